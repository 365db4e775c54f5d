//! Terminal setup and teardown.
//!
//! The preview draws on the alternate screen with raw mode and mouse capture
//! enabled, so clicks reach the widget's tap targets. Both must be undone on
//! every exit path, including panics.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the preview.
pub type PreviewTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enables raw mode, enters the alternate screen and captures the mouse.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn setup_terminal() -> Result<PreviewTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Restores the terminal to its original state.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut PreviewTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal before the original
/// hook prints the panic message.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Owns the preview terminal and restores it when dropped.
///
/// Errors during the drop-time restore are ignored; call
/// [`TerminalGuard::restore`] to observe them.
///
/// # Examples
///
/// ```no_run
/// use lulu_widget_tui::terminal::{self, TerminalGuard};
///
/// terminal::install_panic_hook();
/// let mut guard = TerminalGuard::new()?;
/// guard.terminal_mut().clear()?;
/// guard.restore()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TerminalGuard {
    terminal: PreviewTerminal,
    restored: bool,
}

impl TerminalGuard {
    /// Sets up the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self, TerminalError> {
        Ok(Self {
            terminal: setup_terminal()?,
            restored: false,
        })
    }

    /// Returns the guarded terminal.
    pub fn terminal_mut(&mut self) -> &mut PreviewTerminal {
        &mut self.terminal
    }

    /// Restores the terminal, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.restored = true;
        restore_terminal(&mut self.terminal)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore_terminal(&mut self.terminal);
        }
    }
}
