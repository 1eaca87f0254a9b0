//! State management module
//!
//! This module contains the countdown state, the commands that change it and
//! the controller that owns both.

pub mod command;
pub mod controller;
pub mod timer_state;

// Re-export main types
pub use command::Command;
pub use controller::{Flow, TimerController};
pub use timer_state::{Tick, TimerState};
