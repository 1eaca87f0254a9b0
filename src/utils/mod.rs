//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod logging;
pub mod signals;

// Re-export main functions
pub use logging::{init_tracing, LogPause};
pub use signals::forward_signals;
