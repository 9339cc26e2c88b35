//! Classes tab view

use super::section_header;
use crate::app::App;
use lineage_core::inheritance::expected_gain;
use lineage_core::skills::best_class_skill;
use lineage_core::{ClassDefinition, Stat};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_class_list(f, app, chunks[0]);
    draw_class_details(f, app, chunks[1]);
}

fn draw_class_list(f: &mut Frame, app: &App, area: Rect) {
    // Keep the selection in view on short terminals
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.selected_class.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = app
        .data
        .classes
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, class)| {
            let style = if i == app.selected_class {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == app.selected_class { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", prefix, class.name), style),
                Span::styled(
                    format!(" {}", class.tier.name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Classes ({}) ", app.data.classes.len())),
    );

    f.render_widget(list, area);
}

fn draw_class_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Class ");

    let Some(class) = app.data.classes.get(app.selected_class) else {
        f.render_widget(Paragraph::new("No classes loaded.").block(block), area);
        return;
    };

    let paragraph = Paragraph::new(class_lines(app, class)).block(block);
    f.render_widget(paragraph, area);
}

fn class_lines(app: &App, class: &ClassDefinition) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            class.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            class.tier.name(),
            Style::default().fg(Color::Gray),
        )),
    ];

    if !class.promotes.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Promotes to: ", Style::default().fg(Color::Gray)),
            Span::styled(class.promotes.join(", "), Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Skills"));
    let predicted = best_class_skill(&app.data.class_skills, &class.name);
    for skill in &class.skills {
        let passed_down = predicted.as_ref() == Some(skill);
        let style = if passed_down {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if passed_down { "  ◄ passed down" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", skill), style),
            Span::styled(marker, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_header(&format!(
        "Growth Rates (+ expected by Lv {})",
        app.constants.default_level
    )));
    let growth = app.lab().calculator().growth_for(&class.name);
    if class.growth.is_none() {
        lines.push(Line::from(Span::styled(
            "  No table entry, using fallback growths",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for stat in Stat::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:8}", stat.label()), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>4}%", growth.get(stat)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(
                    "  +{:.1}",
                    expected_gain(growth.get(stat), app.constants.default_level)
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("  {:8}", "Total"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:>4}%", growth.total()),
            Style::default().fg(Color::Yellow),
        ),
    ]));

    lines
}
