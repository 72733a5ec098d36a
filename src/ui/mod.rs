mod helper;
mod wallet_page;

pub use helper::{format_block_time, format_sol, short, time_ago};

use helper::*;
use wallet_page::draw_wallet_result;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, EntryKind, Screen};
use crate::network::Network;

const TITLE_ART: &str = r#"
███████╗ ██████╗ ██╗     ███████╗ ██████╗ █████╗ ███╗   ██╗
██╔════╝██╔═══██╗██║     ██╔════╝██╔════╝██╔══██╗████╗  ██║
███████╗██║   ██║██║     ███████╗██║     ███████║██╔██╗ ██║
╚════██║██║   ██║██║     ╚════██║██║     ██╔══██║██║╚██╗██║
███████║╚██████╔╝███████╗███████║╚██████╗██║  ██║██║ ╚████║
╚══════╝ ╚═════╝ ╚══════╝╚══════╝ ╚═════╝╚═╝  ╚═╝╚═╝  ╚═══╝
"#;

const NAV_HELP: &str =
    "↑↓ move • Enter open • a account • f star • r refresh • n network • b back • h home • Esc quit";
const NAV_HELP_NO_LIST: &str = "b back • h home • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Home => draw_home(frame, app),
        Screen::Loading(msg) => draw_loading(frame, msg),
        Screen::Wallet(result) => draw_wallet_result(frame, app, result),
        Screen::Error(msg) => draw_error(frame, msg),
    }
}

fn network_badge(network: Network) -> Line<'static> {
    let dot_color = match network {
        Network::Mainnet => Color::Green,
        Network::Devnet => Color::Yellow,
    };
    Line::from(vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::styled(network.label(), Style::default().fg(Color::Gray)),
    ])
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let entries = app.home_entries();
    let recent_count = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Recent)
        .count();
    let favorite_count = entries.len() - recent_count;

    let list_height = |n: usize| if n > 0 { (n + 2) as u16 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(9),                           // Title
        Constraint::Length(1),                           // Subtitle
        Constraint::Length(1),                           // Network
        Constraint::Length(1),                           // Spacing
        Constraint::Length(3),                           // Search bar
        Constraint::Length(1),                           // Spacing
        Constraint::Length(list_height(recent_count)),   // Recent searches
        Constraint::Length(list_height(favorite_count)), // Favorites
        Constraint::Length(1),                           // Endpoint
        Constraint::Length(1),                           // Status
        Constraint::Length(1),                           // Help
        Constraint::Min(0),                              // Padding
    ])
    .split(area);

    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Explore any Solana wallet")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    let badge = Paragraph::new(network_badge(app.network())).alignment(Alignment::Center);
    frame.render_widget(badge, chunks[2]);

    let search_area = centered_rect(60, chunks[4]);
    let search_selected = app.selected_home_index.is_none();
    draw_search_bar(frame, app, search_area, search_selected);

    if recent_count > 0 {
        let area = centered_rect(60, chunks[6]);
        draw_entry_list(frame, app, area, " Recent Searches ", EntryKind::Recent);
    }
    if favorite_count > 0 {
        let area = centered_rect(60, chunks[7]);
        draw_entry_list(frame, app, area, " ★ Favorites ", EntryKind::Favorite);
    }

    let endpoint = app.endpoint();
    let url = if endpoint.url.chars().count() > 50 {
        format!("{}...", endpoint.url.chars().take(47).collect::<String>())
    } else {
        endpoint.url
    };
    let rpc_status = Line::from(vec![
        Span::styled("RPC: ", Style::default().fg(Color::DarkGray)),
        Span::styled(url, Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(
        Paragraph::new(rpc_status).alignment(Alignment::Center),
        chunks[8],
    );

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[9]);
    }

    let help_text = if entries.is_empty() {
        "Enter search • Ctrl+D demo • Ctrl+N network • Esc quit"
    } else {
        "Enter search • ↑↓ select • Del remove • Ctrl+D demo • Ctrl+N network • Esc quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[10]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected {
        Color::Magenta
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Wallet Address ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled("Enter wallet address", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    if selected {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_entry_list(frame: &mut Frame, app: &App, area: Rect, title: &str, kind: EntryKind) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string());

    let items: Vec<ListItem> = app
        .home_entries()
        .into_iter()
        .enumerate()
        .filter(|(_, entry)| entry.kind == kind)
        .map(|(i, entry)| {
            let is_selected = app.selected_home_index == Some(i);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Magenta)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(format!(" {}", short(entry.address.as_str(), 8))).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_loading(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Loading ");

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
        / 100) as usize
        % spinner_frames.len();

    let text = format!("{} {}", spinner_frames[idx], msg);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    let centered = centered_rect_fixed(50, 5, area);
    frame.render_widget(paragraph, centered);
}

fn draw_error(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ❌ Error ");

    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(Color::Red))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(NAV_HELP_NO_LIST).fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}
