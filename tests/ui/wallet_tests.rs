//! Wallet page UI tests

use super::*;

#[test]
fn test_wallet_screen_shows_balance() {
    let app = create_test_app(wallet_screen(mock_snapshot()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "SOL BALANCE"));
    assert!(buffer_contains(&buffer, "5.0000 SOL"));
}

#[test]
fn test_wallet_screen_shows_short_address_and_network() {
    let app = create_test_app(wallet_screen(mock_snapshot()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "7xKXtg...osgAsU"));
    assert!(buffer_contains(&buffer, "Mainnet"));
}

#[test]
fn test_wallet_screen_shows_tokens() {
    let app = create_test_app(wallet_screen(mock_snapshot()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Tokens (2)"));
    assert!(buffer_contains(&buffer, "EPjFWd...yTDt1v"));
    assert!(buffer_contains(&buffer, "120.5"));
    assert!(buffer_contains(&buffer, "42"));
}

#[test]
fn test_wallet_screen_shows_transactions() {
    let app = create_test_app(wallet_screen(mock_snapshot()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Recent Transactions"));
    assert!(buffer_contains(&buffer, "3Bxs4Bc3..."));
    assert!(buffer_contains(&buffer, "Success"));
    assert!(buffer_contains(&buffer, "Failed"));
}

#[test]
fn test_wallet_screen_pending_transaction() {
    let app = create_test_app(wallet_screen(mock_snapshot()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    // First transaction has no block time; the second is long confirmed
    assert!(buffer_contains(&buffer, "pending"));
    assert!(buffer_contains(&buffer, "d ago"));
}

#[test]
fn test_wallet_screen_empty_wallet() {
    let mut snapshot = mock_snapshot();
    snapshot.balance = BalanceRecord::from_lamports(0);
    snapshot.tokens.clear();
    snapshot.transactions.clear();
    let app = create_test_app(wallet_screen(snapshot), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "0.0000 SOL"));
    assert!(buffer_contains(&buffer, "Tokens (0)"));
    assert!(buffer_contains(&buffer, "No token holdings"));
    assert!(buffer_contains(&buffer, "No recent transactions"));
}

#[test]
fn test_wallet_screen_favorite_star() {
    let mut app = create_test_app(wallet_screen(mock_snapshot()), false);
    let buffer = render_to_buffer(&app, 100, 40);
    assert!(buffer_contains(&buffer, "☆"));
    assert!(!buffer_contains(&buffer, "★"));

    app.toggle_favorite();
    let buffer = render_to_buffer(&app, 100, 40);
    assert!(buffer_contains(&buffer, "★"));
    assert!(buffer_contains(&buffer, "Added to favorites"));
}

#[test]
fn test_wallet_screen_status_shows_opened_link() {
    let mut app = create_test_app(wallet_screen(mock_snapshot()), true);
    app.select_next();
    app.select_next();
    app.open_selected();
    // Wide enough for the whole URL
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Explorer: https://solscan.io/tx/3Bxs4Bc3"));
}

#[test]
fn test_wallet_screen_status_shows_account_page() {
    let mut app = create_test_app(wallet_screen(mock_snapshot()), true);
    app.open_account();
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(
        &buffer,
        &format!("Explorer: https://solscan.io/account/{WALLET}")
    ));
}

#[test]
fn test_wallet_screen_help_lists_account_key() {
    let app = create_test_app(wallet_screen(mock_snapshot()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "a account"));
    assert!(buffer_contains(&buffer, "Esc quit"));
}

#[test]
fn test_wallet_screen_devnet_snapshot() {
    let mut snapshot = mock_snapshot();
    snapshot.network = Network::Devnet;
    let app = create_test_app(wallet_screen(snapshot), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Devnet"));
}
