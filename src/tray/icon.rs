//! Native tray icon running on a dedicated thread

use std::{
    sync::mpsc::{self as std_mpsc, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::Duration,
};

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tray_icon::{
    menu::{Menu, MenuEvent, MenuId, MenuItem},
    Icon, TrayIcon, TrayIconBuilder,
};

use super::Tray;
use crate::{services::IconImage, state::Command};

const RESTORE_ID: &str = "restore";
const QUIT_ID: &str = "quit";

/// How often the tray thread looks for menu clicks and controller requests
const POLL_PERIOD: Duration = Duration::from_millis(50);

/// Errors while bringing up the tray icon
#[derive(Debug, Error)]
pub enum TrayError {
    #[error("failed to start the tray thread")]
    Thread(#[source] std::io::Error),

    #[error("failed to create the tray icon: {0}")]
    Create(String),

    #[error("tray thread exited during startup")]
    Exited,
}

/// Requests from the controller to the tray thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrayControl {
    SetVisible(bool),
    Stop,
}

/// Command a tray menu item stands for
pub fn command_for_menu_item(id: &MenuId) -> Option<Command> {
    match id.0.as_str() {
        RESTORE_ID => Some(Command::Restore),
        QUIT_ID => Some(Command::Quit),
        _ => None,
    }
}

/// Controller side of the tray: visibility and shutdown
#[derive(Debug)]
pub struct TrayHandle {
    control: std_mpsc::Sender<TrayControl>,
    thread: Option<JoinHandle<()>>,
    visible: bool,
}

impl TrayHandle {
    fn send(&self, control: TrayControl) {
        if self.control.send(control).is_err() {
            warn!("Tray thread is gone, dropping {:?}", control);
        }
    }
}

impl Tray for TrayHandle {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.send(TrayControl::SetVisible(visible));
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn stop(&mut self) {
        self.visible = false;
        if let Some(thread) = self.thread.take() {
            info!("Stopping tray");
            self.send(TrayControl::Stop);
            if thread.join().is_err() {
                error!("Tray thread panicked");
            }
        }
    }
}

impl Drop for TrayHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Create the hidden tray icon on its own thread.
///
/// Returns once the icon exists, so a platform without a tray fails at
/// startup instead of leaving a hidden window with no way back.
pub fn spawn_tray(
    icon: IconImage,
    tooltip: &str,
    commands: mpsc::Sender<Command>,
) -> Result<TrayHandle, TrayError> {
    let (control_tx, control_rx) = std_mpsc::channel();
    let (ready_tx, ready_rx) = std_mpsc::sync_channel(1);
    let tooltip = tooltip.to_string();

    let thread = thread::Builder::new()
        .name("tray".to_string())
        .spawn(move || {
            let tray = match build_tray(icon, &tooltip) {
                Ok(tray) => {
                    let _ = ready_tx.send(Ok(()));
                    tray
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            run_tray(&tray, &control_rx, &commands);
            drop(tray);
            info!("Tray stopped");
        })
        .map_err(TrayError::Thread)?;

    match ready_rx.recv() {
        Ok(Ok(())) => {
            info!("Tray icon ready");
            Ok(TrayHandle {
                control: control_tx,
                thread: Some(thread),
                visible: false,
            })
        }
        Ok(Err(e)) => {
            let _ = thread.join();
            Err(e)
        }
        Err(_) => {
            let _ = thread.join();
            Err(TrayError::Exited)
        }
    }
}

fn build_tray(image: IconImage, tooltip: &str) -> Result<TrayIcon, TrayError> {
    // The tray is driven by GTK on Linux, on this thread
    #[cfg(target_os = "linux")]
    gtk::init().map_err(create_error)?;

    let icon = Icon::from_rgba(image.rgba, image.width, image.height).map_err(create_error)?;

    let menu = Menu::new();
    let restore = MenuItem::with_id(RESTORE_ID, "Restore", true, None);
    let quit = MenuItem::with_id(QUIT_ID, "Quit", true, None);
    menu.append_items(&[&restore, &quit]).map_err(create_error)?;

    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(tooltip)
        .with_icon(icon)
        .build()
        .map_err(create_error)?;

    // Invisible until the window is minimized
    tray.set_visible(false).map_err(create_error)?;
    Ok(tray)
}

fn create_error(e: impl std::fmt::Display) -> TrayError {
    TrayError::Create(e.to_string())
}

/// Serve menu clicks and controller requests until told to stop
fn run_tray(
    tray: &TrayIcon,
    control: &std_mpsc::Receiver<TrayControl>,
    commands: &mpsc::Sender<Command>,
) {
    let menu_events = MenuEvent::receiver();

    loop {
        #[cfg(target_os = "linux")]
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }

        while let Ok(event) = menu_events.try_recv() {
            if !forward_menu_event(&event, commands) {
                warn!("Main loop is gone, stopping tray");
                return;
            }
        }

        match control.recv_timeout(POLL_PERIOD) {
            Ok(TrayControl::SetVisible(visible)) => {
                debug!("Tray visible: {}", visible);
                if let Err(e) = tray.set_visible(visible) {
                    warn!("Failed to change tray visibility: {}", e);
                }
            }
            Ok(TrayControl::Stop) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

/// Send the command behind a menu click; false once the main loop is gone
fn forward_menu_event(event: &MenuEvent, commands: &mpsc::Sender<Command>) -> bool {
    match command_for_menu_item(&event.id) {
        Some(command) => {
            info!("Tray menu: {:?}", command);
            commands.blocking_send(command).is_ok()
        }
        None => {
            debug!("Ignoring tray menu item {}", event.id.0);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(id: &str) -> MenuEvent {
        MenuEvent {
            id: MenuId::new(id),
        }
    }

    /// Handle whose thread records every request until Stop
    fn recording_handle() -> (TrayHandle, std_mpsc::Receiver<TrayControl>) {
        let (control_tx, control_rx) = std_mpsc::channel();
        let (seen_tx, seen_rx) = std_mpsc::channel();
        let thread = thread::spawn(move || {
            for control in control_rx {
                let _ = seen_tx.send(control);
                if control == TrayControl::Stop {
                    break;
                }
            }
        });
        let handle = TrayHandle {
            control: control_tx,
            thread: Some(thread),
            visible: false,
        };
        (handle, seen_rx)
    }

    #[test]
    fn menu_items_map_to_commands() {
        assert_eq!(
            command_for_menu_item(&MenuId::new("restore")),
            Some(Command::Restore)
        );
        assert_eq!(command_for_menu_item(&MenuId::new("quit")), Some(Command::Quit));
        assert_eq!(command_for_menu_item(&MenuId::new("about")), None);
    }

    #[test]
    fn clicks_are_forwarded_to_the_main_loop() {
        let (tx, mut rx) = mpsc::channel(4);
        assert!(forward_menu_event(&click("restore"), &tx));
        assert!(forward_menu_event(&click("quit"), &tx));
        assert!(forward_menu_event(&click("about"), &tx));

        assert_eq!(rx.try_recv().ok(), Some(Command::Restore));
        assert_eq!(rx.try_recv().ok(), Some(Command::Quit));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_main_loop_stops_forwarding() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        assert!(!forward_menu_event(&click("quit"), &tx));
    }

    #[test]
    fn handle_drives_visibility_and_stops_the_thread() {
        let (mut handle, seen) = recording_handle();
        assert!(!handle.is_visible());

        handle.set_visible(true);
        assert!(handle.is_visible());
        handle.set_visible(false);
        handle.stop();
        assert!(!handle.is_visible());

        // Stopping twice is harmless
        handle.stop();

        let requests: Vec<_> = seen.try_iter().collect();
        assert_eq!(
            requests,
            vec![
                TrayControl::SetVisible(true),
                TrayControl::SetVisible(false),
                TrayControl::Stop
            ]
        );
    }

    #[test]
    fn dropping_the_handle_stops_the_thread() {
        let (handle, seen) = recording_handle();
        drop(handle);
        assert_eq!(seen.try_iter().last(), Some(TrayControl::Stop));
    }
}
