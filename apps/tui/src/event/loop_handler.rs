use color_eyre::Result;
use crossterm::event::{self, Event, MouseEventKind};
use kpi_dashboard::animation::FRAME_INTERVAL;
use kpi_dashboard::app::{handle_input, App};
use kpi_dashboard::domain::{format_number, StatKind, MONTH_LABELS, WEEKDAY_LABELS};
use kpi_dashboard::export;
use tracing::{debug, warn};

use crate::terminal::DashboardTerminal;
use crate::ui;

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.load().await;

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let state = &app.state;

    println!("\nKPI Dashboard");
    println!("=============");
    for stat in StatKind::ALL {
        let hidden = if app.visibility.is_visible(stat) {
            ""
        } else {
            " (hidden)"
        };
        println!(
            "{}: {}{hidden}",
            stat.label(),
            stat.format_value(state.stats.get(stat))
        );
    }

    println!("\nWeekly Sales:");
    for (label, value) in WEEKDAY_LABELS.iter().zip(&state.sales_data) {
        println!("- {label}: {}", format_number(*value));
    }

    println!("\nMonthly Analytics:");
    for (label, value) in MONTH_LABELS.iter().zip(&state.analytics_data) {
        println!("- {label}: {}", format_number(*value));
    }

    if let (Some(from), Some(to)) = (state.date_range.from, state.date_range.to) {
        println!("\nDate range: {from} to {to}");
    }
    println!("Theme: {}", app.theme.as_str());
}

fn render_headless_json(app: &App) -> Result<()> {
    let json = export::to_json(&app.state, chrono::Utc::now())?;
    println!("{json}");
    Ok(())
}

/// Run the main application event loop
pub async fn run(terminal: &mut DashboardTerminal, app: &mut App) -> Result<()> {
    while app.running {
        // Advance the startup delay and counter animations
        app.update().await;

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(FRAME_INTERVAL), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) => handle_input(app, key).await,
            Ok(Event::Mouse(mouse)) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    app.pointer_moved(mouse.column, mouse.row);
                }
                _ => {}
            },
            Ok(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
                // Charts are laid out again for the new size
                if terminal.draw(|f| ui::ui(app, f)).is_err() {
                    warn!("redraw after resize failed");
                }
            }
            Ok(Event::FocusLost) => app.tooltip = None,
            Ok(Event::FocusGained | Event::Paste(_)) => {}
            Err(e) => warn!(error = %e, "failed to read terminal event"),
        }
    }

    Ok(())
}
