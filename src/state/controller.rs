//! Timer controller: the only owner of the countdown and its windows

use std::time::Instant;

use tracing::{debug, error, info};

use super::{Command, Tick, TimerState};
use crate::{
    services::SoundPlayer,
    tray::Tray,
    ui::{CountdownView, Frontend, REMINDER_MESSAGE},
};

/// Whether the main loop should keep running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the timer state, the windows, the tray icon and the sound player.
///
/// Every method runs on the main loop; other contexts reach it through
/// `Command`s only.
pub struct TimerController<F, T, S> {
    timer: TimerState,
    frontend: F,
    tray: T,
    sound: S,
    alerts_raised: u64,
}

impl<F: Frontend, T: Tray, S: SoundPlayer> TimerController<F, T, S> {
    /// Create a controller around its collaborators
    pub fn new(timer: TimerState, frontend: F, tray: T, sound: S) -> Self {
        Self {
            timer,
            frontend,
            tray,
            sound,
            alerts_raised: 0,
        }
    }

    /// Apply a command at time `now`
    pub fn handle(&mut self, command: Command, now: Instant) -> Flow {
        debug!("Handling command: {:?}", command);
        match command {
            Command::Start => self.start(now),
            Command::Reset => self.reset(),
            Command::Minimize => self.minimize(),
            Command::Restore => self.restore(),
            Command::DismissAlert => self.dismiss_alert(),
            Command::Redraw => self.redraw(),
            Command::Quit => {
                self.quit();
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Start the interval at `now`; restarts it when already running
    pub fn start(&mut self, now: Instant) {
        if self.timer.is_running() {
            info!("Restarting reminder interval");
        } else {
            info!(
                "Starting reminder interval of {}s",
                self.timer.total_seconds()
            );
        }
        self.timer.start(now);
        self.refresh_display();
    }

    /// Refresh the countdown; raises the reminder when it reaches zero
    pub fn tick(&mut self, now: Instant) {
        match self.timer.tick(now) {
            Tick::Idle => {}
            Tick::Running(remaining) => {
                debug!("Remaining: {}s", remaining);
                self.refresh_display();
            }
            Tick::Expired => {
                info!("Reminder interval elapsed");
                self.refresh_display();
                self.raise_alert();
            }
        }
    }

    /// Stop the timer and refill the interval
    pub fn reset(&mut self) {
        info!("Resetting reminder interval");
        self.timer.reset();
        self.refresh_display();
    }

    /// Hide the window to the tray
    pub fn minimize(&mut self) {
        info!("Hiding window to tray");
        if let Err(e) = self.frontend.hide_window() {
            error!("Failed to hide window: {}", e);
        }
        self.tray.set_visible(true);
    }

    /// Bring the window back from the tray
    pub fn restore(&mut self) {
        if self.frontend.window_visible() {
            debug!("Window already visible, nothing to restore");
            return;
        }

        info!("Restoring window from tray");
        self.tray.set_visible(false);
        if let Err(e) = self.frontend.show_window() {
            error!("Failed to show window: {}", e);
        }
    }

    /// Close the reminder window if one is open
    pub fn dismiss_alert(&mut self) {
        if !self.frontend.alert_open() {
            return;
        }

        debug!("Closing reminder window");
        if let Err(e) = self.frontend.close_alert() {
            error!("Failed to close reminder window: {}", e);
        }
    }

    /// Stop the tray, close every window; safe whether or not a reminder is open
    pub fn quit(&mut self) {
        info!("Quitting");
        self.tray.stop();
        self.dismiss_alert();
        if let Err(e) = self.frontend.close() {
            error!("Failed to close window: {}", e);
        }
    }

    /// Push the current countdown to the window
    pub fn refresh_display(&mut self) {
        if let Err(e) = self.frontend.update_countdown(self.view()) {
            error!("Failed to update countdown: {}", e);
        }
    }

    fn redraw(&mut self) {
        if let Err(e) = self.frontend.redraw() {
            error!("Failed to redraw: {}", e);
        }
    }

    /// Replace any open reminder with a new one and play the sound once
    fn raise_alert(&mut self) {
        if self.frontend.alert_open() {
            debug!("Replacing open reminder window");
            if let Err(e) = self.frontend.close_alert() {
                error!("Failed to close previous reminder window: {}", e);
            }
        }

        if let Err(e) = self.frontend.open_alert(REMINDER_MESSAGE) {
            error!("Failed to open reminder window: {}", e);
        }
        self.sound.play();
        self.alerts_raised += 1;
    }

    /// Snapshot of the countdown
    pub fn view(&self) -> CountdownView {
        CountdownView {
            remaining: self.timer.remaining_seconds(),
            total: self.timer.total_seconds(),
            running: self.timer.is_running(),
        }
    }

    /// Current timer state
    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Number of reminders raised since startup
    pub fn alerts_raised(&self) -> u64 {
        self.alerts_raised
    }

    #[cfg(test)]
    pub(crate) fn frontend(&self) -> &F {
        &self.frontend
    }

    #[cfg(test)]
    pub(crate) fn tray(&self) -> &T {
        &self.tray
    }

    #[cfg(test)]
    pub(crate) fn sound(&self) -> &S {
        &self.sound
    }
}
