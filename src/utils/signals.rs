//! Signal handling: SIGINT closes the window, SIGTERM and SIGHUP quit

use futures::stream::StreamExt;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::state::Command;

/// Forward process signals to the main loop as commands
pub async fn forward_signals(commands: mpsc::Sender<Command>) {
    let mut signals = match Signals::new([SIGTERM, SIGINT, SIGHUP]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to create signal handler: {}", e);
            return;
        }
    };

    while let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
        let Some(command) = command_for_signal(signal) else {
            continue;
        };

        if commands.send(command).await.is_err() {
            break;
        }
    }
}

/// Map a signal to the command it stands for
pub fn command_for_signal(signal: i32) -> Option<Command> {
    match signal {
        // Same as closing the window
        SIGINT => Some(Command::Minimize),
        SIGTERM | SIGHUP => Some(Command::Quit),
        _ => None,
    }
}
