//! Client for the remote character resource.
//!
//! One operation: `GET {base_url}{id}` returning a JSON character payload.
//! No authentication, no pagination, no request body.

mod client;
mod record;

pub use client::{ApiError, CharacterClient};
pub use record::{CharacterRecord, MAX_CHARACTER_ID, MIN_CHARACTER_ID};
