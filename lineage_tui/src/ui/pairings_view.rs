//! Pairings tab view

use super::{modifier_line, section_header, stat_line};
use crate::app::App;
use lineage_core::{PairingExperiment, PairingStatus, Stat};
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
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_pairing_list(f, app, chunks[0]);
    draw_pairing_details(f, app, chunks[1]);
}

fn status_style(status: PairingStatus) -> Style {
    match status {
        PairingStatus::Planned => Style::default().fg(Color::Cyan),
        PairingStatus::CRank | PairingStatus::BRank => Style::default().fg(Color::Gray),
        PairingStatus::ARank => Style::default().fg(Color::Magenta),
        PairingStatus::Realized => Style::default().fg(Color::Green),
    }
}

fn draw_pairing_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .pairings
        .experiments()
        .iter()
        .enumerate()
        .map(|(i, experiment)| {
            let style = if i == app.selected_pairing {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == app.selected_pairing { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "{}{} x {} → {}",
                        prefix, experiment.parent1, experiment.parent2, experiment.child
                    ),
                    style,
                ),
                Span::styled(
                    format!("  [{}]", experiment.status.name()),
                    status_style(experiment.status),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Pairings ({} planned, {} realized) ",
        app.pairings.planned().count(),
        app.pairings.realized().count()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

fn draw_pairing_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let Some(experiment) = app.pairings.experiments().get(app.selected_pairing) else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No saved pairings. Save one from the Lab tab with s.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let paragraph = Paragraph::new(detail_lines(experiment)).block(block);
    f.render_widget(paragraph, area);
}

fn detail_lines(experiment: &PairingExperiment) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            experiment.child.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} x {}", experiment.parent1, experiment.parent2),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("   {}", experiment.date),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            experiment.status.name(),
            status_style(experiment.status),
        )),
        Line::from(""),
        section_header("Inherited Skills"),
    ];

    for (who, skill) in [
        ("Father", &experiment.father_skill),
        ("Mother", &experiment.mother_skill),
    ] {
        let text = skill
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("{:8}", who), Style::default().fg(Color::Gray)),
            Span::styled(text, Style::default().fg(Color::White)),
        ]));
    }

    // Records added from chat carry no stats
    if !experiment.stats.is_zero() {
        lines.push(Line::from(""));
        lines.push(section_header("Stat Modifiers"));
        for stat in Stat::GENETIC {
            lines.push(modifier_line(stat.label(), experiment.stats[stat]));
        }
        lines.push(modifier_line("Total", experiment.stats.genetic_total()));
    }

    if let Some(simulated) = &experiment.simulated_stats {
        let header = match (&experiment.simulated_class, experiment.simulated_level) {
            (Some(class), Some(level)) => format!("{} Lv {}", class, level),
            (Some(class), None) => class.clone(),
            (None, Some(level)) => format!("Lv {}", level),
            (None, None) => "Projected Stats".to_string(),
        };
        lines.push(Line::from(""));
        lines.push(section_header(&header));
        for stat in Stat::ALL {
            lines.push(stat_line(stat.label(), simulated[stat]));
        }
    }

    lines
}
