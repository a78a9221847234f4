use std::sync::mpsc::RecvTimeoutError;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::api::HabitClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{run_worker, COMMAND_BUFFER};

/// Run the terminal client until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = HabitClient::new(&config.api).context("failed to build HTTP client")?;
    let base_url = client.base_url().to_string();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let event_tx = events.sender();
    runtime.spawn(run_worker(client, command_rx, move |event| {
        let _ = event_tx.send(AppEvent::Api(event));
    }));

    let mut app = App::new();
    app.set_command_sender(command_tx);
    app.open_dashboard();

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    tracing::info!(%base_url, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app, &base_url))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Dropping the App closes the command channel and stops the worker.
    drop(app);
    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    tracing::info!("UI stopped");
    Ok(())
}
