use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::store::{CounterState, StateChange};

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Store actions the UI can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCommand {
    Increment,
    Decrement,
    Refetch,
}

pub type StoreCommandSender = mpsc::UnboundedSender<StoreCommand>;

/// View-side application state: the latest store snapshot plus presentation
/// concerns (transient notice, quit flag) the store has no business knowing.
pub struct App {
    state: CounterState,
    notice: Option<(String, Instant)>,
    should_quit: bool,
    commands: Option<StoreCommandSender>,
}

impl App {
    pub fn new(state: CounterState) -> Self {
        Self {
            state,
            notice: None,
            should_quit: false,
            commands: None,
        }
    }

    /// Wire up the channel store commands are dispatched over.
    pub fn attach_commands(&mut self, tx: StoreCommandSender) {
        self.commands = Some(tx);
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Install the snapshot carried by a store notification.
    pub fn apply_change(&mut self, change: StateChange) {
        self.state = change.state;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn set_notice(&mut self, text: String) {
        self.notice = Some((text, Instant::now()));
    }

    pub fn on_tick(&mut self) {
        if let Some((_, shown_at)) = &self.notice {
            if shown_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn request_increment(&self) {
        self.dispatch(StoreCommand::Increment);
    }

    pub fn request_decrement(&self) {
        self.dispatch(StoreCommand::Decrement);
    }

    pub fn request_refetch(&self) {
        self.dispatch(StoreCommand::Refetch);
    }

    fn dispatch(&self, command: StoreCommand) {
        if let Some(tx) = &self.commands {
            let _ = tx.send(command);
        }
    }
}
