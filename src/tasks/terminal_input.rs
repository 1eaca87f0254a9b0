//! Terminal input task: turns key presses into commands for the main loop

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::stream::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::state::Command;

/// Read terminal events until the main loop goes away
pub async fn terminal_input_task(commands: mpsc::Sender<Command>, window_visible: Arc<AtomicBool>) {
    info!("Starting terminal input task");

    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        let command = match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                command_for_key(key, window_visible.load(Ordering::Relaxed))
            }
            Ok(Event::Resize(..)) => Some(Command::Redraw),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read terminal input: {}", e);
                break;
            }
        };

        let Some(command) = command else {
            continue;
        };

        debug!("Key mapped to {:?}", command);
        if commands.send(command).await.is_err() {
            debug!("Main loop closed, stopping terminal input task");
            break;
        }
    }
}

/// Map a key to a window command. A hidden window only lets the reminder be
/// dismissed.
pub fn command_for_key(key: KeyEvent, window_visible: bool) -> Option<Command> {
    if key.code == KeyCode::Enter {
        return Some(Command::DismissAlert);
    }
    if !window_visible {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            // Closing the window hides it to the tray
            KeyCode::Char('c') | KeyCode::Char('w') => Some(Command::Minimize),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(Command::Minimize)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Minimize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn buttons_map_to_commands() {
        assert_eq!(command_for_key(key(KeyCode::Char('s')), true), Some(Command::Start));
        assert_eq!(command_for_key(key(KeyCode::Char('r')), true), Some(Command::Reset));
        assert_eq!(command_for_key(key(KeyCode::Char('h')), true), Some(Command::Minimize));
        assert_eq!(command_for_key(key(KeyCode::Char('Q')), true), Some(Command::Quit));
        assert_eq!(command_for_key(key(KeyCode::Char('x')), true), None);
    }

    #[test]
    fn closing_the_window_minimizes() {
        assert_eq!(command_for_key(key(KeyCode::Esc), true), Some(Command::Minimize));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_c, true), Some(Command::Minimize));
    }

    #[test]
    fn enter_dismisses_the_reminder() {
        assert_eq!(command_for_key(key(KeyCode::Enter), true), Some(Command::DismissAlert));
        assert_eq!(command_for_key(key(KeyCode::Enter), false), Some(Command::DismissAlert));
    }

    #[test]
    fn hidden_window_ignores_its_buttons() {
        for code in [KeyCode::Char('s'), KeyCode::Char('r'), KeyCode::Char('q'), KeyCode::Esc] {
            assert_eq!(command_for_key(key(code), false), None);
        }
    }
}
