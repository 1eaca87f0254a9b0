//! Tray module
//!
//! The tray icon lives on its own thread so it stays responsive while the
//! window is hidden. Its menu offers Restore and Quit, and every click is
//! forwarded to the main loop as a `Command`.

pub mod icon;

pub use icon::{command_for_menu_item, spawn_tray, TrayError, TrayHandle};

/// Tray icon as seen by the timer controller
pub trait Tray {
    /// Show or hide the icon
    fn set_visible(&mut self, visible: bool);

    /// Check if the icon is shown
    fn is_visible(&self) -> bool;

    /// Remove the icon for good
    fn stop(&mut self);
}
