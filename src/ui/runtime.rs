use std::time::Duration;

use crate::api::CharacterClient;
use crate::config::Config;
use crate::store::{SliceSet, Store};
use crate::ui::app::{App, StoreCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = CharacterClient::new(&config.api);
    let store = Store::new(client, config.app.initial_character);

    let tick_rate = Duration::from_millis(config.app.tick_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    // Bridge store notifications into the UI event channel.
    {
        let mut changes = store.subscribe(SliceSet::ALL);
        let event_tx = events.sender();
        runtime.spawn(async move {
            while let Some(change) = changes.recv().await {
                if event_tx.send(AppEvent::Store(change)).is_err() {
                    break;
                }
            }
        });
    }

    // Async worker that executes store actions. Boundary violations and
    // fetch failures come back as error values and surface as a notice.
    let (command_tx, mut command_rx) = tokio::sync::mpsc::unbounded_channel::<StoreCommand>();
    {
        let store = store.clone();
        let event_tx = events.sender();
        runtime.spawn(async move {
            while let Some(command) = command_rx.recv().await {
                let result = match command {
                    StoreCommand::Increment => store.increment().await,
                    StoreCommand::Decrement => store.decrement().await,
                    StoreCommand::Refetch => {
                        let id = store.state().counter;
                        store.fetch(id).await
                    }
                };
                if let Err(err) = result {
                    if event_tx.send(AppEvent::Notice(err.to_string())).is_err() {
                        break;
                    }
                }
            }
        });
    }

    // Initial load runs exactly once, tied to startup rather than redraws.
    {
        let store = store.clone();
        let event_tx = events.sender();
        runtime.spawn(async move {
            if let Err(err) = store.load_initial().await {
                let _ = event_tx.send(AppEvent::Notice(err.to_string()));
            }
        });
    }

    let mut app = App::new(store.state());
    app.attach_commands(command_tx);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Store(change)) => app.apply_change(change),
            Ok(AppEvent::Notice(text)) => app.set_notice(text),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    runtime.shutdown_timeout(Duration::from_secs(1));
    drop(guard);
    Ok(())
}
