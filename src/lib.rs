//! Twenty Reminder - A 20-20-20 eye rest reminder
//!
//! Every interval a reminder window pops up with a sound, telling the user to
//! look at something 20 feet away for 20 seconds. The countdown is shown in a
//! terminal window that can be hidden to a tray icon.

pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod tray;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::Config;
pub use state::{Command, TimerController, TimerState};
pub use utils::signals::forward_signals;
