use crate::api::{CharacterRecord, MIN_CHARACTER_ID};

/// Fetch lifecycle for the record panel.
///
/// The previous record is retained across `Loading` and `Failed`; the phase
/// only drives the status indicator and footer notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No request in flight; the last one (if any) succeeded.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed; last-known-good state is kept.
    Failed,
}

/// The single application state record.
///
/// Created once at startup, owned by the [`Store`](crate::store::Store), and
/// mutated only through its actions.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    /// Current character id; the sole addressable key into the resource.
    pub counter: u16,
    /// Last successfully fetched record.
    pub record: Option<CharacterRecord>,
    pub phase: FetchPhase,
}

impl CounterState {
    pub fn new(counter: u16) -> Self {
        Self {
            counter,
            record: None,
            phase: FetchPhase::Idle,
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(MIN_CHARACTER_ID)
    }
}
