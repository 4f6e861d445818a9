//! Explicit application state container.
//!
//! Unidirectional data flow:
//!
//! ```text
//! action ──fetch──→ intent ──reduce──→ state ──diff──→ notify(slices)
//! ```
//!
//! Actions perform the network call and feed its outcome to the reducer as
//! an intent; the reducer is the only place state transitions happen; after
//! each commit only observers interested in a changed slice are notified.

mod intent;
mod reducer;
mod slice;
mod state;
mod store;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use slice::{Slice, SliceSet};
pub use state::{CounterState, FetchPhase};
pub use store::{StateChange, Store, StoreError};
