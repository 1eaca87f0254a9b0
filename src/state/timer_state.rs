//! Timer state structure and management

use std::time::Instant;

/// Outcome of a single refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer is not running, nothing changed
    Idle,
    /// Timer is running with this many seconds left
    Running(u64),
    /// Timer just reached zero and stopped
    Expired,
}

/// Countdown state for the reminder interval
#[derive(Debug, Clone)]
pub struct TimerState {
    total_seconds: u64,
    remaining_seconds: u64,
    running: bool,
    started_at: Option<Instant>,
}

impl TimerState {
    /// Create a stopped timer with the full interval remaining
    pub fn new(total_seconds: u64) -> Self {
        let total_seconds = total_seconds.max(1);
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            running: false,
            started_at: None,
        }
    }

    /// Start (or restart) the interval anchored at `now`
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.started_at = Some(now);
        self.remaining_seconds = self.total_seconds;
    }

    /// Stop the timer and refill the interval
    pub fn reset(&mut self) {
        self.running = false;
        self.started_at = None;
        self.remaining_seconds = self.total_seconds;
    }

    /// Recompute the remaining time from the elapsed time since start
    pub fn tick(&mut self, now: Instant) -> Tick {
        let Some(started_at) = self.started_at.filter(|_| self.running) else {
            return Tick::Idle;
        };

        let elapsed = now.saturating_duration_since(started_at).as_secs();
        self.remaining_seconds = self.total_seconds.saturating_sub(elapsed);

        if self.remaining_seconds == 0 {
            self.running = false;
            self.started_at = None;
            Tick::Expired
        } else {
            Tick::Running(self.remaining_seconds)
        }
    }

    /// Configured interval length in seconds
    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// Seconds left as of the last tick
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Check if the timer is counting down
    pub fn is_running(&self) -> bool {
        self.running
    }
}
