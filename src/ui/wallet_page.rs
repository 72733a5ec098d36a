use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, WalletResult};
use crate::rpc::{TokenHolding, TransactionSummary};
use crate::ui::NAV_HELP;

const SELECTED: Style = Style::new().fg(Color::Black).bg(Color::Magenta);

pub fn draw_wallet_result(frame: &mut Frame, app: &App, result: &WalletResult) {
    let area = padded_rect(frame.area(), 1);
    let snapshot = &result.snapshot;

    let token_height = (snapshot.tokens.len().max(1) + 2) as u16;

    let chunks = Layout::vertical([
        Constraint::Length(7),            // Balance card
        Constraint::Length(token_height), // Tokens
        Constraint::Min(3),               // Transactions
        Constraint::Length(1),            // Status
        Constraint::Length(1),            // Nav help
    ])
    .split(area);

    draw_balance_card(frame, app, result, chunks[0]);
    draw_tokens(frame, &snapshot.tokens, result.selected, chunks[1]);
    draw_transactions(
        frame,
        &snapshot.transactions,
        result.selected.checked_sub(snapshot.tokens.len()),
        chunks[2],
    );

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[3]);
    }

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_balance_card(frame: &mut Frame, app: &App, result: &WalletResult, area: Rect) {
    let snapshot = &result.snapshot;
    let favorite = app.is_favorite(&snapshot.address);

    let (star, star_color) = if favorite {
        ("★", Color::Red)
    } else {
        ("☆", Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" 👛 Wallet ")
        .title(
            Line::from(Span::styled(format!(" {star} "), Style::default().fg(star_color)))
                .right_aligned(),
        );

    let lines = vec![
        Line::from(Span::styled(
            "SOL BALANCE",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                format_sol(snapshot.balance.sol),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" SOL", Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
        format_kv("Address", &short(snapshot.address.as_str(), 6)),
        format_kv("Network", snapshot.network.label()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_tokens(frame: &mut Frame, tokens: &[TokenHolding], selected: usize, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Tokens ({}) ", tokens.len()));

    if tokens.is_empty() {
        let empty = Paragraph::new("No token holdings")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let line = Line::from(vec![
                Span::raw(format!(" {:<20}", short(token.mint.as_str(), 6))),
                Span::styled(token.amount.to_string(), Style::default().fg(Color::Green)),
            ]);
            let item = ListItem::new(line);
            if i == selected {
                item.style(SELECTED)
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_transactions(
    frame: &mut Frame,
    transactions: &[TransactionSummary],
    selected: Option<usize>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent Transactions ");

    if transactions.is_empty() {
        let empty = Paragraph::new("No recent transactions")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = transactions
        .iter()
        .enumerate()
        .map(|(i, tx)| {
            let (status, status_color) = if tx.success {
                ("Success", Color::Green)
            } else {
                ("Failed", Color::Red)
            };

            let line = Line::from(vec![
                Span::raw(format!(" {:<20}", short(&tx.signature, 8))),
                Span::styled(
                    format!("{:<10}", format_block_time(tx.block_time)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(status, Style::default().fg(status_color)),
            ]);
            let item = ListItem::new(line);
            if selected == Some(i) {
                item.style(SELECTED)
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
