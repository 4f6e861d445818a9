use crate::store::intent::CounterIntent;
use crate::store::state::{CounterState, FetchPhase};

pub struct CounterReducer;

impl CounterReducer {
    /// Process an intent and return the new state.
    ///
    /// Pure function: no side effects, no I/O.
    pub fn reduce(state: CounterState, intent: CounterIntent) -> CounterState {
        match intent {
            CounterIntent::FetchStarted => CounterState {
                phase: FetchPhase::Loading,
                ..state
            },
            CounterIntent::FetchSucceeded { counter, record } => CounterState {
                counter,
                record: Some(record),
                phase: FetchPhase::Idle,
            },
            CounterIntent::RecordLoaded { record } => CounterState {
                record: Some(record),
                phase: FetchPhase::Idle,
                ..state
            },
            CounterIntent::FetchFailed => CounterState {
                phase: FetchPhase::Failed,
                ..state
            },
        }
    }
}
