//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "twenty-reminder")]
#[command(about = "Reminds you to rest your eyes every 20 minutes (20-20-20 rule)")]
#[command(version)]
pub struct Config {
    /// Reminder interval in minutes
    #[arg(short, long, default_value = "20", value_parser = clap::value_parser!(u64).range(1..=240))]
    pub interval: u64,

    /// Icon image shown by the tray
    #[arg(long, default_value = "assets/icon.png")]
    pub icon: PathBuf,

    /// Sound played when the interval elapses
    #[arg(long, default_value = "assets/chime.wav")]
    pub sound: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Interval length in seconds
    pub fn interval_seconds(&self) -> u64 {
        self.interval * 60
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
