//! Common UI tests - error, loading, and navigation help

use super::*;
use solscan::app::Screen;
use solscan::rpc::QueryError;

// ==================== Error Screen Tests ====================

#[test]
fn test_error_screen_shows_message() {
    let screen = Screen::Error("RPC error: Invalid param: WrongSize".to_string());
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Error"));
    assert!(buffer_contains(&buffer, "Invalid param: WrongSize"));
}

#[test]
fn test_failed_search_renders_endpoint_message() {
    let mut app = create_test_app(wallet_screen(mock_snapshot()), true);
    app.set_loading("Fetching...");
    app.apply_search(Err(QueryError::Transport(
        "Request timed out: operation timed out".to_string(),
    )));
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Network error"));
    assert!(buffer_contains(&buffer, "operation timed out"));

    // The earlier result is still one step back
    app.go_back();
    let buffer = render_to_buffer(&app, 100, 40);
    assert!(buffer_contains(&buffer, "5.0000 SOL"));
}

// ==================== Loading Screen Tests ====================

#[test]
fn test_loading_screen_shows_message() {
    let screen = Screen::Loading("Fetching 7xKXtg...osgAsU...".to_string());
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Loading"));
    assert!(buffer_contains(&buffer, "Fetching 7xKXtg"));
}

// ==================== Navigation Help Tests ====================

#[test]
fn test_screens_show_navigation_help() {
    let screens = vec![
        Screen::Home,
        wallet_screen(mock_snapshot()),
        Screen::Error("boom".to_string()),
    ];

    for screen in screens {
        let app = create_test_app(screen, true);
        let buffer = render_to_buffer(&app, 100, 40);

        assert!(buffer_contains(&buffer, "quit"));
    }
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_does_not_panic() {
    let screens = vec![
        Screen::Home,
        Screen::Loading("Fetching...".to_string()),
        wallet_screen(mock_snapshot()),
        Screen::Error("boom".to_string()),
    ];

    for screen in screens {
        let app = create_test_app(screen, true);
        let _ = render_to_buffer(&app, 20, 8);
    }
}
