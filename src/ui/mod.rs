//! User interface module
//!
//! This module contains the window abstraction used by the timer controller
//! and its terminal implementation.

pub mod format;
pub mod layout;
pub mod terminal;

use std::io;

// Re-export main types
pub use format::format_time;
pub use terminal::TerminalFrontend;

/// Title of the primary window
pub const WINDOW_TITLE: &str = "20-20-20 Reminder";

/// Title of the reminder window
pub const ALERT_TITLE: &str = "Reminder";

/// Message shown when the interval elapses
pub const REMINDER_MESSAGE: &str = "Take a 20-second break and look at something 20 feet away!";

/// Snapshot of the countdown the window renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownView {
    pub remaining: u64,
    pub total: u64,
    pub running: bool,
}

impl CountdownView {
    /// Fraction of the interval still remaining, in `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.remaining as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Remaining time as `MM:SS`
    pub fn label(&self) -> String {
        format_time(self.remaining)
    }
}

/// Primary window and reminder window, driven from the main loop only
pub trait Frontend {
    /// Show the latest countdown
    fn update_countdown(&mut self, view: CountdownView) -> io::Result<()>;

    /// Hide the primary window
    fn hide_window(&mut self) -> io::Result<()>;

    /// Show the primary window
    fn show_window(&mut self) -> io::Result<()>;

    /// Check if the primary window is shown
    fn window_visible(&self) -> bool;

    /// Open the reminder window with `message`
    fn open_alert(&mut self, message: &str) -> io::Result<()>;

    /// Check if a reminder window is open
    fn alert_open(&self) -> bool;

    /// Close the reminder window
    fn close_alert(&mut self) -> io::Result<()>;

    /// Re-render whatever is currently shown
    fn redraw(&mut self) -> io::Result<()>;

    /// Tear down every window
    fn close(&mut self) -> io::Result<()>;
}
