//! External service module
//!
//! This module contains the asset loader and the sound player the timer
//! controller calls when a reminder fires.

pub mod assets;
pub mod sound;

// Re-export main types
pub use assets::{AssetError, Assets, IconImage};
pub use sound::{RodioPlayer, SoundPlayer};
