//! Terminal session guard
//!
//! Raw mode, the alternate screen and mouse capture (which is what delivers
//! wheel scroll events) are acquired together and released together. The
//! guard releases them on drop, so every exit path restores the terminal:
//! normal quit, `?` early returns, and panics.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout};
use std::sync::Once;

/// RAII guard over the terminal session
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode, switch to the alternate screen and start capturing the mouse
    pub fn enter() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        // Construct before the remaining steps so a failure below still restores raw mode
        let guard = Self { active: true };
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        tracing::debug!(target: "terminal", "session_entered");
        Ok(guard)
    }

    /// Release the session now instead of at drop
    pub fn leave(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            restore_terminal()?;
            tracing::debug!(target: "terminal", "session_left");
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

fn restore_terminal() -> Result<()> {
    restore_with(
        || execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, Show),
        disable_raw_mode,
    )?;
    Ok(())
}

/// Run both restore steps even if the first fails; report the first error
fn restore_with(
    leave_screen: impl FnOnce() -> io::Result<()>,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let screen = leave_screen();
    let raw = leave_raw_mode();
    screen.and(raw)
}

/// Restore the terminal before the default hook prints, so the panic message
/// lands on the normal screen
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_raw_mode_left_when_screen_restore_fails() {
        let raw_mode_left = Cell::new(false);
        let result = restore_with(
            || Err(io::Error::other("alternate screen")),
            || {
                raw_mode_left.set(true);
                Ok(())
            },
        );

        assert!(raw_mode_left.get());
        assert_eq!(result.unwrap_err().to_string(), "alternate screen");
    }

    #[test]
    fn test_raw_mode_error_reported() {
        let result = restore_with(|| Ok(()), || Err(io::Error::other("raw mode")));
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_wins() {
        let result = restore_with(
            || Err(io::Error::other("alternate screen")),
            || Err(io::Error::other("raw mode")),
        );
        assert_eq!(result.unwrap_err().to_string(), "alternate screen");
    }
}
