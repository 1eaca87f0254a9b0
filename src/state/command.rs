//! Commands sent to the main loop by the window, the tray and signal handlers

/// A request for the timer controller, drained by the refresh loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) the countdown
    Start,
    /// Stop and refill the countdown
    Reset,
    /// Hide the window to the tray
    Minimize,
    /// Bring the window back from the tray
    Restore,
    /// Shut everything down
    Quit,
    /// Close the open reminder, if any
    DismissAlert,
    /// Re-render the current view
    Redraw,
}
