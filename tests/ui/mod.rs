//! UI rendering tests for solscan
//!
//! These tests ensure the UI renders correctly by searching the rendered buffer.
//! Run with: cargo test --test ui_tests

pub mod common_tests;
pub mod home_tests;
pub mod wallet_tests;

use solscan::address::AccountAddress;
use solscan::app::{App, Screen, WalletResult};
use solscan::config::Config;
use solscan::network::Network;
use solscan::rpc::{BalanceRecord, TokenHolding, TransactionSummary, WalletSnapshot};
use solscan::ui::draw;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

pub const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

// ==================== Test Data Builders ====================

pub fn addr(s: &str) -> AccountAddress {
    AccountAddress::parse(s).unwrap()
}

pub fn mock_config() -> Config {
    Config {
        history: vec![
            addr("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"),
            addr(WALLET),
        ],
        favorites: vec![addr("HN7cABqLq46Es1jh92dQQisAq662SmxELLLsHHe4YWrH")],
        ..Config::default()
    }
}

pub fn mock_config_empty() -> Config {
    Config::default()
}

pub fn mock_snapshot() -> WalletSnapshot {
    WalletSnapshot {
        address: addr(WALLET),
        network: Network::Mainnet,
        balance: BalanceRecord::from_lamports(5_000_000_000),
        tokens: vec![
            TokenHolding {
                mint: addr("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
                amount: 120.5,
                decimals: 6,
            },
            TokenHolding {
                mint: addr("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
                amount: 42.0,
                decimals: 5,
            },
        ],
        transactions: vec![
            TransactionSummary {
                signature: "3Bxs4Bc3VYuGVB19nbSLBhGqAs9ozG5XV6QuUQDq7Bq6sH4fzUq4NqsBRSXCXeQpZk4bp1kXUwBxRNRAqT1UV8CE"
                    .to_string(),
                slot: 250_000_010,
                block_time: None,
                success: true,
                confirmation_status: Some("processed".to_string()),
            },
            TransactionSummary {
                signature: "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW"
                    .to_string(),
                slot: 250_000_000,
                block_time: Some(1_700_000_000),
                success: false,
                confirmation_status: Some("finalized".to_string()),
            },
        ],
    }
}

pub fn wallet_screen(snapshot: WalletSnapshot) -> Screen {
    Screen::Wallet(WalletResult {
        snapshot,
        selected: 0,
    })
}

pub fn create_test_app(screen: Screen, with_history: bool) -> App {
    let config = if with_history {
        mock_config()
    } else {
        mock_config_empty()
    };
    let mut app = App::new(config);
    app.screen = screen;
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for line in buffer_to_string(buffer).lines() {
        println!("{}", line.trim_end());
    }
}
