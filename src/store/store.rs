use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::api::{ApiError, CharacterClient, CharacterRecord, MAX_CHARACTER_ID, MIN_CHARACTER_ID};
use crate::store::intent::CounterIntent;
use crate::store::reducer::CounterReducer;
use crate::store::slice::{Slice, SliceSet};
use crate::store::state::CounterState;

/// Errors returned by store actions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The action would leave the valid id range. No network call is
    /// issued and no state changes.
    #[error("character {attempted} is outside the valid range {min}..={max}",
        min = MIN_CHARACTER_ID, max = MAX_CHARACTER_ID)]
    Boundary { attempted: u16 },

    /// The underlying fetch failed; last-known-good state is kept.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A change notification delivered to subscribers.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Which slices differ from the previously committed state.
    pub changed: SliceSet,
    /// Snapshot taken right after the commit.
    pub state: CounterState,
}

struct Subscriber {
    interest: SliceSet,
    tx: mpsc::UnboundedSender<StateChange>,
}

/// The single owner of application state.
///
/// Constructed once in `main` and handed to whoever needs to dispatch
/// actions or observe changes; tests build isolated instances. Cheap to
/// clone: clones share the same state.
///
/// Actions are independent asynchronous units. Each fetch carries a
/// monotonically increasing generation and only the newest issued fetch may
/// commit its result, so a slow superseded response is discarded instead of
/// clobbering a newer one.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<CounterState>,
    subscribers: Mutex<Vec<Subscriber>>,
    client: CharacterClient,
    /// Newest issued fetch generation.
    generation: AtomicU64,
}

impl Store {
    pub fn new(client: CharacterClient, initial_counter: u16) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(CounterState::new(initial_counter)),
                subscribers: Mutex::new(Vec::new()),
                client,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CounterState {
        self.inner.state.lock().clone()
    }

    /// Register an observer for the given slices.
    ///
    /// After every committed mutation the store computes which slices
    /// actually changed and notifies only observers whose interest
    /// intersects the change.
    pub fn subscribe(&self, interest: SliceSet) -> mpsc::UnboundedReceiver<StateChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(Subscriber { interest, tx });
        rx
    }

    /// Number of registered observers. Closed receivers are pruned on the
    /// next notify pass, so this can lag behind drops by one commit.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// Step the counter up, fetching the next record first. On success the
    /// counter and record move in one commit; on failure neither changes.
    pub async fn increment(&self) -> Result<(), StoreError> {
        let current = self.inner.state.lock().counter;
        if current >= MAX_CHARACTER_ID {
            return Err(StoreError::Boundary {
                attempted: current.saturating_add(1),
            });
        }

        let target = current + 1;
        self.run_fetch(target, move |record| CounterIntent::FetchSucceeded {
            counter: target,
            record,
        })
        .await
    }

    /// Step the counter down. Symmetric to [`Store::increment`].
    pub async fn decrement(&self) -> Result<(), StoreError> {
        let current = self.inner.state.lock().counter;
        if current <= MIN_CHARACTER_ID {
            return Err(StoreError::Boundary {
                attempted: current.wrapping_sub(1),
            });
        }

        let target = current - 1;
        self.run_fetch(target, move |record| CounterIntent::FetchSucceeded {
            counter: target,
            record,
        })
        .await
    }

    /// Fetch an explicit id, replacing the record and leaving the counter
    /// alone. On failure the previous record stays (stale-on-error).
    pub async fn fetch(&self, id: u16) -> Result<(), StoreError> {
        if !(MIN_CHARACTER_ID..=MAX_CHARACTER_ID).contains(&id) {
            return Err(StoreError::Boundary { attempted: id });
        }

        self.run_fetch(id, |record| CounterIntent::RecordLoaded { record })
            .await
    }

    /// Load the record matching the current counter. The runtime invokes
    /// this exactly once at startup.
    pub async fn load_initial(&self) -> Result<(), StoreError> {
        let counter = self.inner.state.lock().counter;
        self.fetch(counter).await
    }

    async fn run_fetch(
        &self,
        target: u16,
        on_success: impl FnOnce(CharacterRecord) -> CounterIntent,
    ) -> Result<(), StoreError> {
        let generation = self.next_generation();
        self.commit(CounterIntent::FetchStarted);

        match self.inner.client.get_character(target).await {
            Ok(record) => {
                if self.is_current(generation) {
                    self.commit(on_success(record));
                } else {
                    tracing::debug!(id = target, generation, "discarding stale fetch result");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = target, error = %err, "character fetch failed");
                if self.is_current(generation) {
                    self.commit(CounterIntent::FetchFailed);
                }
                Err(err.into())
            }
        }
    }

    fn next_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner.generation.load(Ordering::SeqCst) == generation
    }

    /// Apply an intent through the reducer, then notify observers whose
    /// interest intersects the slices that actually changed.
    fn commit(&self, intent: CounterIntent) {
        let (changed, snapshot) = {
            let mut state = self.inner.state.lock();
            let old = state.clone();
            let new = CounterReducer::reduce(old.clone(), intent);
            let changed = diff_slices(&old, &new);
            *state = new.clone();
            (changed, new)
        };

        if !changed.is_empty() {
            self.notify(changed, &snapshot);
        }
    }

    fn notify(&self, changed: SliceSet, state: &CounterState) {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|sub| {
            if !sub.interest.intersects(changed) {
                return !sub.tx.is_closed();
            }
            sub.tx
                .send(StateChange {
                    changed,
                    state: state.clone(),
                })
                .is_ok()
        });
    }
}

fn diff_slices(old: &CounterState, new: &CounterState) -> SliceSet {
    let mut changed = SliceSet::EMPTY;
    if old.counter != new.counter {
        changed.insert(Slice::Counter);
    }
    if old.record != new.record {
        changed.insert(Slice::Record);
    }
    if old.phase != new.phase {
        changed.insert(Slice::Phase);
    }
    changed
}
