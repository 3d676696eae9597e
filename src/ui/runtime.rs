use crate::client::PetApi;
use crate::config::UiConfig;
use crate::inventory::RemoteRequest;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use tokio::sync::mpsc;

/// Requests queue behind the one in flight; the UI never sends more than
/// one at a time, so this only needs headroom.
const REQUEST_CHANNEL_SIZE: usize = 8;

/// Run the full-screen inventory UI until the user quits.
pub fn run<C: PetApi + 'static>(config: &UiConfig, client: C) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("petstore-remote")
        .enable_all()
        .build()?;

    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (request_tx, request_rx) = mpsc::channel(REQUEST_CHANNEL_SIZE);
    runtime.spawn(remote_worker(client, request_rx, events.sender()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.title.clone());
    app.set_request_sender(request_tx);
    app.load();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Remote(intent)) => app.on_remote(intent),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}

/// Executes requests one at a time, in arrival order, and reports each
/// result back to the event loop.
async fn remote_worker<C: PetApi>(
    client: C,
    mut requests: mpsc::Receiver<RemoteRequest>,
    events: Sender<AppEvent>,
) {
    while let Some(request) = requests.recv().await {
        let operation = request.operation();
        tracing::info!(operation = %operation, "Executing request");
        let intent = request.run(&client).await;
        if events.send(AppEvent::Remote(intent)).is_err() {
            tracing::debug!("Event loop gone; stopping remote worker");
            break;
        }
    }
}
