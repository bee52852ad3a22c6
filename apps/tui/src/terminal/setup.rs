use color_eyre::eyre::{eyre, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};
use tracing::{debug, info, warn};

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture. Whatever was already
/// switched on is rolled back if a later step fails.
pub fn setup_terminal() -> Result<DashboardTerminal> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    info!(width, height, "setting up terminal");

    enable_raw_mode().map_err(|e| eyre!("Failed to enable raw mode: {e}"))?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        cleanup_terminal_state(true, false);
        return Err(eyre!("Failed to enter alternate screen: {e}"));
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| {
        cleanup_terminal_state(true, true);
        eyre!("Failed to create terminal: {e}")
    })?;

    if let Err(e) = terminal.clear() {
        warn!(error = %e, "failed to clear terminal");
    }
    if let Err(e) = terminal.hide_cursor() {
        warn!(error = %e, "failed to hide cursor");
    }

    debug!("terminal ready");
    Ok(terminal)
}

/// Puts the terminal back the way the shell expects it. Errors are logged
/// and otherwise ignored, so this is safe to call on any exit path.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    if let Err(e) = execute!(out, DisableMouseCapture, cursor::Show) {
        warn!(error = %e, "failed to restore cursor");
    }
    if alternate_screen {
        if let Err(e) = execute!(out, LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave alternate screen");
        }
    }
    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    }

    // leave the shell prompt on a fresh line
    let _ = execute!(out, cursor::MoveToNextLine(1));
    let _ = out.flush();

    debug!("terminal restored");
}
