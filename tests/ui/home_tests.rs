//! Home screen UI tests

use super::*;
use solscan::app::Screen;

#[test]
fn test_home_screen_shows_title() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "████"));
    assert!(buffer_contains(&buffer, "Explore any Solana wallet"));
}

#[test]
fn test_home_screen_shows_search_bar_placeholder() {
    let app = create_test_app(Screen::Home, false);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Enter wallet address"));
}

#[test]
fn test_home_screen_shows_network_and_endpoint() {
    let app = create_test_app(Screen::Home, false);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Mainnet"));
    assert!(buffer_contains(&buffer, "api.mainnet-beta.solana.com"));
}

#[test]
fn test_home_screen_after_network_toggle() {
    let mut app = create_test_app(Screen::Home, false);
    app.toggle_network();
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Devnet"));
    assert!(buffer_contains(&buffer, "api.devnet.solana.com"));
    assert!(buffer_contains(&buffer, "Switched to Devnet"));
}

#[test]
fn test_home_screen_shows_recent_searches() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    // Shortened to eight characters either side
    assert!(buffer_contains(&buffer, "7xKXtg2C...uJosgAsU"));
}

#[test]
fn test_home_screen_shows_favorites() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Favorites"));
    assert!(buffer_contains(&buffer, "HN7cABqL"));
}

#[test]
fn test_home_screen_without_history_hides_lists() {
    let app = create_test_app(Screen::Home, false);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(!buffer_contains(&buffer, "Recent Searches"));
    assert!(!buffer_contains(&buffer, "Favorites"));
}

#[test]
fn test_home_screen_shows_typed_address() {
    let mut app = create_test_app(Screen::Home, false);
    app.fill_demo_address();
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, WALLET));
}
