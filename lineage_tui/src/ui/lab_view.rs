//! Lab tab view

use super::{modifier_line, section_header, stat_line};
use crate::app::{App, LabFocus, StatMode};
use lineage_core::{ChildPreview, RosterEntry, Stat};
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
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    draw_parent_list(
        f,
        " Fathers ",
        &app.fathers,
        app.selected_father,
        app.focus == LabFocus::Fathers,
        chunks[0],
    );
    draw_parent_list(
        f,
        " Mothers ",
        &app.mothers,
        app.selected_mother,
        app.focus == LabFocus::Mothers,
        chunks[1],
    );
    draw_child(f, app, chunks[2]);
}

fn draw_parent_list(
    f: &mut Frame,
    title: &str,
    entries: &[RosterEntry],
    selected: usize,
    focused: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", prefix, entry.name), style),
                Span::styled(
                    format!(" ({})", entry.class),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string()),
    );

    f.render_widget(list, area);
}

fn draw_child(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Child ");

    let Some(preview) = app.preview() else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No child for this pairing.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            preview.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Class: ", Style::default().fg(Color::Gray)),
            Span::styled(preview.class.clone(), Style::default().fg(Color::White)),
            Span::styled("   Level: ", Style::default().fg(Color::Gray)),
            Span::styled(
                preview.simulated.level.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        support_line(app),
        Line::from(""),
        section_header("Inherited Skills"),
        skill_line(
            "Father",
            app.selection.father_class.as_deref(),
            &preview.father_skill,
            app.selection.father_skill.is_some(),
        ),
        skill_line(
            "Mother",
            app.selection.mother_class.as_deref(),
            &preview.mother_skill,
            app.selection.mother_skill.is_some(),
        ),
        Line::from(""),
    ];

    match app.stat_mode {
        StatMode::Modifiers => modifier_lines(&preview, &mut lines),
        StatMode::Simulation => simulation_lines(app, &preview, &mut lines),
    }

    if !preview.unresolved.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("No modifiers for: {}", preview.unresolved.join(", ")),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn support_line(app: &App) -> Line<'static> {
    let (text, color) = match app.current_support() {
        Some(rank) => (format!("{} Rank", rank.name()), Color::Green),
        None => ("none".to_string(), Color::DarkGray),
    };
    Line::from(vec![
        Span::styled("Support: ", Style::default().fg(Color::Gray)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

fn skill_line(
    who: &str,
    planned_class: Option<&str>,
    skill: &Option<lineage_core::Skill>,
    overridden: bool,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:8}", who),
        Style::default().fg(Color::Gray),
    )];
    match skill {
        Some(skill) => {
            let color = if overridden { Color::Magenta } else { Color::White };
            spans.push(Span::styled(skill.to_string(), Style::default().fg(color)));
        }
        None => spans.push(Span::styled("none", Style::default().fg(Color::DarkGray))),
    }
    if let Some(class) = planned_class {
        spans.push(Span::styled(
            format!("  as {}", class),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

fn modifier_lines(preview: &ChildPreview, lines: &mut Vec<Line<'static>>) {
    lines.push(section_header("Stat Modifiers"));
    for stat in Stat::GENETIC {
        lines.push(modifier_line(stat.label(), preview.stats[stat]));
    }
    lines.push(modifier_line("Total", preview.stats.genetic_total()));
}

fn simulation_lines(app: &App, preview: &ChildPreview, lines: &mut Vec<Line<'static>>) {
    let roll = app
        .roll
        .as_ref()
        .filter(|r| r.class_name == preview.class && r.level == preview.simulated.level);

    match roll {
        None => {
            lines.push(section_header("Projected Stats"));
            for stat in Stat::ALL {
                lines.push(stat_line(stat.label(), preview.simulated.get(stat)));
            }
            lines.push(Line::from(Span::styled(
                "Press r to roll growths.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(roll) => {
            lines.push(section_header(&format!("Rolled x{}", roll.trials)));
            lines.push(Line::from(Span::styled(
                format!("{:8}{:>6}{:>8}{:>10}", "", "Proj", "Mean", "Range"),
                Style::default().fg(Color::DarkGray),
            )));
            for stat in Stat::ALL {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:8}", stat.label()), Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("{:>6}", preview.simulated.get(stat)),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:>8.1}", roll.mean(stat)),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{:>10}", format!("{}-{}", roll.min[stat], roll.max[stat])),
                        Style::default().fg(Color::Cyan),
                    ),
                ]));
            }
        }
    }
}
