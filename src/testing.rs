//! Recording collaborators for controller and loop tests

use std::{cell::Cell, io};

use crate::{
    services::SoundPlayer,
    tray::Tray,
    ui::{CountdownView, Frontend},
};

#[derive(Debug)]
pub struct RecordingFrontend {
    pub visible: bool,
    pub alert: Option<String>,
    pub last_view: Option<CountdownView>,
    pub updates: usize,
    pub shows: usize,
    pub redraws: usize,
    pub alerts_opened: usize,
    pub alerts_closed: usize,
    pub closed: bool,
}

impl Default for RecordingFrontend {
    fn default() -> Self {
        Self {
            visible: true,
            alert: None,
            last_view: None,
            updates: 0,
            shows: 0,
            redraws: 0,
            alerts_opened: 0,
            alerts_closed: 0,
            closed: false,
        }
    }
}

impl RecordingFrontend {
    /// Countdown text last shown
    pub fn label(&self) -> Option<String> {
        self.last_view.map(|view| view.label())
    }
}

impl Frontend for RecordingFrontend {
    fn update_countdown(&mut self, view: CountdownView) -> io::Result<()> {
        self.last_view = Some(view);
        self.updates += 1;
        Ok(())
    }

    fn hide_window(&mut self) -> io::Result<()> {
        self.visible = false;
        Ok(())
    }

    fn show_window(&mut self) -> io::Result<()> {
        self.visible = true;
        self.shows += 1;
        Ok(())
    }

    fn window_visible(&self) -> bool {
        self.visible
    }

    fn open_alert(&mut self, message: &str) -> io::Result<()> {
        self.alert = Some(message.to_string());
        self.alerts_opened += 1;
        Ok(())
    }

    fn alert_open(&self) -> bool {
        self.alert.is_some()
    }

    fn close_alert(&mut self) -> io::Result<()> {
        self.alert = None;
        self.alerts_closed += 1;
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.redraws += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.visible = false;
        self.closed = true;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingTray {
    pub visible: bool,
    pub stopped: bool,
}

impl Tray for RecordingTray {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn stop(&mut self) {
        self.visible = false;
        self.stopped = true;
    }
}

#[derive(Debug, Default)]
pub struct RecordingSound {
    plays: Cell<usize>,
}

impl RecordingSound {
    pub fn plays(&self) -> usize {
        self.plays.get()
    }
}

impl SoundPlayer for RecordingSound {
    fn play(&self) {
        self.plays.set(self.plays.get() + 1);
    }
}
