//! UI rendering

mod classes_view;
mod help_view;
mod lab_view;
mod pairings_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Lab => lab_view::draw(f, app, chunks[1]),
        Tab::Pairings => pairings_view::draw(f, app, chunks[1]),
        Tab::Classes => classes_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    let status = Paragraph::new(Span::styled(
        format!(" {}", app.status_message),
        Style::default().fg(Color::Green),
    ));
    f.render_widget(status, chunks[2]);

    draw_keybindings(f, app, chunks[3]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Lab => vec![
            ("↑/↓", "Parent"),
            ("←/→", "Father/Mother"),
            ("c", "Class"),
            ("k", "Skill"),
            ("+/-", "Level"),
            ("g", "Mods/Sim"),
            ("r", "Roll"),
            ("s", "Save"),
            ("x", "Suggest"),
            ("v", "Support"),
        ],
        Tab::Pairings => vec![
            ("↑/↓", "Select"),
            ("Enter", "Toggle status"),
            ("d", "Delete"),
            ("w", "Export"),
        ],
        Tab::Classes => vec![("↑/↓", "Select class")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Genetic Lab "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Signed modifier, green when positive and red when negative
pub fn modifier_line(name: &str, value: i32) -> Line<'static> {
    let color = match value.signum() {
        1 => Color::Green,
        -1 => Color::Red,
        _ => Color::DarkGray,
    };
    Line::from(vec![
        Span::styled(format!("{:8}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:+}", value), Style::default().fg(color)),
    ])
}

pub fn stat_line(name: &str, value: i32) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:8}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", value), Style::default().fg(Color::White)),
    ])
}
