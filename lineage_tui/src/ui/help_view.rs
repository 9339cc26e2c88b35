//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-4", "Jump to tab (Lab/Pairings/Classes/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑  ↓", "Navigate lists"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Lab"),
        key_line("←/→", "Switch between fathers and mothers"),
        key_line("c", "Cycle the focused parent's planned class"),
        key_line("k", "Cycle the focused parent's passed-down skill"),
        key_line("+ / -", "Raise/lower the child's level"),
        key_line("g", "Toggle modifiers/projected stats"),
        key_line("r", "Roll random growths for the child"),
        key_line("s / Enter", "Save the pairing"),
        key_line("x", "Suggest an unmarried pair, support rank first"),
        key_line("v", "Cycle the pair's support rank (none/C/B/A/S)"),
        Line::from(""),
        section_header("Pairings"),
        key_line("Enter / Space", "Toggle Planned / S Rank"),
        key_line("d", "Delete selected pairing"),
        key_line("w", "Export pairings to JSON (skipped if the file failed to load)"),
        Line::from(""),
        section_header("Inheritance"),
        Line::from(""),
        Line::from(Span::styled(
            "Child modifiers:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!(
            "  Father + Mother + Child base + {} for each stat except HP",
            app.constants.universal_bonus
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Projected stats:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  floor(Base + Growth% × (Level - 1) + Modifier)"),
        Line::from(format!(
            "  Classes without growth data use {}% HP, {}% other stats",
            app.constants.fallback_growth.hp, app.constants.fallback_growth.str
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Passed-down skill:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Highest unlock level skill of the parent's class"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Log file: {}", std::env::temp_dir().join("lineage_tui").join("lineage_tui.log").display()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
