//! Terminal setup around the flow controller.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};

use crate::{AppConfig, AppController, KeyValueStorage, LanguagePreference};

/// Puts the terminal back into cooked mode on the main screen when dropped,
/// including on early returns between setup steps.
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    /// Enables raw mode. The guard exists only if that succeeded.
    #[instrument]
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Loads the language preference, takes over the terminal and runs the game
/// until the user quits. The terminal is restored even if the loop fails.
#[instrument(skip_all)]
pub async fn run_tui(config: &AppConfig, storage: Arc<dyn KeyValueStorage>) -> Result<()> {
    info!("Starting I Know You TUI");

    let mut preference = LanguagePreference::new(storage);
    preference.load().await;

    let mut controller = AppController::new(
        preference,
        *config.strict_transitions(),
        config.tick_rate(),
        Instant::now(),
    );

    let guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
