use solscan::address::AccountAddress;
use solscan::app::App;
use solscan::config::Config;
use solscan::rpc::{QueryClient, QueryError, WalletSnapshot};
use solscan::ui;

use anyhow::{Context, Result};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tui_input::backend::crossterm::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = Config::load()?;

    run_tui(config).await?;

    Ok(())
}

/// The terminal owns stdout, so logs go to a file, and only when RUST_LOG asks for them
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    let path = dir.join("solscan.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    Search(Result<WalletSnapshot, QueryError>),
}

async fn run_tui(config: Config) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);
    app.autosave = true;

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(10);

    let result = run_event_loop(&mut terminal, &mut app, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::Search(result) => app.apply_search(result),
            }
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

                // Global keys
                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if ctrl => {
                        app.should_quit = true;
                    }
                    _ => {}
                }

                if app.is_on_home() {
                    match key.code {
                        KeyCode::Enter => {
                            if let Some(address) = app.get_selected_home_address() {
                                app.clear_home_selection();
                                execute_search(app, address, tx.clone());
                            } else if let Some(address) = app.submit_search() {
                                execute_search(app, address, tx.clone());
                            }
                        }
                        KeyCode::Up => {
                            app.select_home_prev();
                        }
                        KeyCode::Down => {
                            app.select_home_next();
                        }
                        KeyCode::Delete | KeyCode::Backspace
                            if app.selected_home_index.is_some() =>
                        {
                            app.delete_selected_history();
                        }
                        KeyCode::Char('n') if ctrl => {
                            app.toggle_network();
                        }
                        KeyCode::Char('d') if ctrl => {
                            app.fill_demo_address();
                        }
                        KeyCode::Esc => {}
                        _ if ctrl => {}
                        _ => {
                            // Any other key goes back to the search bar
                            app.clear_home_selection();
                            app.search_input.handle_event(&ev);
                        }
                    }
                } else if !app.is_loading() {
                    match key.code {
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.select_prev();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.select_next();
                        }
                        KeyCode::Enter => {
                            app.open_selected();
                        }
                        KeyCode::Char('f') => {
                            app.toggle_favorite();
                        }
                        KeyCode::Char('a') => {
                            app.open_account();
                        }
                        KeyCode::Char('r') => {
                            if let Some(address) = app.current_address().cloned() {
                                execute_search(app, address, tx.clone());
                            }
                        }
                        KeyCode::Char('n') => {
                            app.toggle_network();
                        }
                        KeyCode::Backspace | KeyCode::Char('b') => {
                            app.go_back();
                        }
                        KeyCode::Char('h') => {
                            app.go_home();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn execute_search(app: &mut App, address: AccountAddress, tx: mpsc::Sender<AsyncMessage>) {
    app.record_search(&address);

    let client = match app.query_client() {
        Ok(client) => client,
        Err(e) => {
            app.set_error(format!("{}: {e}", e.kind()));
            return;
        }
    };

    info!(%address, network = %app.network(), "searching");
    app.set_loading(&format!("Fetching {}...", ui::short(address.as_str(), 6)));

    tokio::spawn(async move {
        let result = client.search_address(address).await;
        if let Err(e) = &result {
            error!(error = %e, "search failed");
        }
        let _ = tx.send(AsyncMessage::Search(result)).await;
    });
}
