//! Twenty Reminder - A 20-20-20 eye rest reminder
//!
//! This is the main entry point for the twenty-reminder application.

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::info;

use twenty_reminder::{
    config::Config,
    services::{Assets, RodioPlayer},
    state::{TimerController, TimerState},
    tasks::{refresh_loop, terminal_input_task, REFRESH_PERIOD},
    tray::spawn_tray,
    ui::{CountdownView, TerminalFrontend, WINDOW_TITLE},
    utils::{forward_signals, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let logs = init_tracing(config.log_level());

    info!("Starting twenty-reminder v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: interval={}min", config.interval);

    // Missing or broken assets are fatal
    let assets = Assets::load(&config.icon, &config.sound).context("failed to load assets")?;

    let (command_tx, command_rx) = mpsc::channel(32);

    // The tray runs on its own thread for the whole session
    let tray = spawn_tray(assets.icon, WINDOW_TITLE, command_tx.clone())
        .context("failed to create the tray icon")?;

    let timer = TimerState::new(config.interval_seconds());
    let frontend = TerminalFrontend::new(CountdownView {
        remaining: timer.remaining_seconds(),
        total: timer.total_seconds(),
        running: false,
    })
    .context("failed to open the countdown window")?;

    // stderr would draw over the window
    logs.pause();

    tokio::spawn(terminal_input_task(command_tx.clone(), frontend.visibility()));
    tokio::spawn(forward_signals(command_tx));

    let controller = TimerController::new(timer, frontend, tray, RodioPlayer::new(assets.sound));
    let controller = refresh_loop(controller, command_rx, REFRESH_PERIOD).await;
    let alerts = controller.alerts_raised();
    drop(controller);

    logs.resume();
    info!("Reminders raised this session: {}", alerts);
    info!("Shutdown complete");
    Ok(())
}
