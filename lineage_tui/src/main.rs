//! lineage_tui - Interactive TUI for planning pairings and previewing children

mod app;
mod export;
mod simulation;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> io::Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = setup_logging()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();
    tracing::info!(
        classes = app.data.classes.len(),
        roster = app.data.roster.len(),
        "lineage_tui started"
    );

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Up, _) => app.on_up(),
                    (KeyCode::Down, _) => app.on_down(),
                    (KeyCode::Left, _) => app.on_left(),
                    (KeyCode::Right, _) => app.on_right(),
                    (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
                    (KeyCode::Char('c'), _) => app.cycle_class(),
                    (KeyCode::Char('k'), _) => app.cycle_skill(),
                    (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.level_up(),
                    (KeyCode::Char('-'), _) => app.level_down(),
                    (KeyCode::Char('g'), _) => app.toggle_stat_mode(),
                    (KeyCode::Char('r'), _) => app.roll_growths(),
                    (KeyCode::Char('s'), _) => app.save_experiment(),
                    (KeyCode::Char('x'), _) => app.smart_pair(),
                    (KeyCode::Char('v'), _) => app.cycle_support(),
                    (KeyCode::Char('d'), _) => app.delete_selected_pairing(),
                    (KeyCode::Char('w'), _) => app.export_pairings(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("lineage_tui exiting");
    Ok(())
}

/// Log to a file so output never lands on the drawn terminal.
///
/// `RUST_LOG` controls the filter, defaulting to `info`.
fn setup_logging() -> io::Result<WorkerGuard> {
    let log_dir = std::env::temp_dir().join("lineage_tui");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "lineage_tui.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}
