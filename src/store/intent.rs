use crate::api::CharacterRecord;

/// State transitions applied by the reducer.
///
/// Store actions issue the network call and translate its outcome into one
/// of these; the reducer is the only place the state record changes.
#[derive(Debug, Clone)]
pub enum CounterIntent {
    /// A fetch was issued.
    FetchStarted,
    /// A stepping fetch completed: move the counter and install the record
    /// in one commit.
    FetchSucceeded { counter: u16, record: CharacterRecord },
    /// A direct fetch completed: replace the record, leave the counter.
    RecordLoaded { record: CharacterRecord },
    /// A fetch failed; keep last-known-good state.
    FetchFailed,
}
