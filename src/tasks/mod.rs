//! Tasks module
//!
//! This module contains the main refresh loop and the background task that
//! reads the terminal.

pub mod refresh_loop;
pub mod terminal_input;

// Re-export main functions
pub use refresh_loop::{refresh_loop, REFRESH_PERIOD};
pub use terminal_input::terminal_input_task;
