//! Refresh loop: the main loop that ticks the countdown and applies commands

use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{interval, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    services::SoundPlayer,
    state::{Command, Flow, TimerController},
    tray::Tray,
    ui::Frontend,
};

/// Period of the countdown refresh
pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Tick the countdown every `period` and apply commands until Quit.
///
/// A closed command channel is treated as Quit. The ticker is dropped with
/// the loop.
pub async fn refresh_loop<F, T, S>(
    mut controller: TimerController<F, T, S>,
    mut commands: mpsc::Receiver<Command>,
    period: Duration,
) -> TimerController<F, T, S>
where
    F: Frontend,
    T: Tray,
    S: SoundPlayer,
{
    info!("Starting refresh loop");
    controller.refresh_display();

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Timer tick - recompute remaining time
            _ = ticker.tick() => {
                controller.tick(Instant::now().into_std());
            }

            // Command from the window, the tray or a signal
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("All command senders dropped, shutting down");
                    controller.quit();
                    break;
                };

                if controller.handle(command, Instant::now().into_std()) == Flow::Exit {
                    break;
                }
            }
        }
    }

    debug!("Refresh loop finished");
    controller
}
