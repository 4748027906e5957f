//! Data models for the sipboard service and dashboard.
//!
//! These models match the JSON documents on disk and on the wire exactly, so the
//! same types serve the storage layer, the HTTP handlers and the client.

mod player;
mod refresh;
mod rule;

pub use player::*;
pub use refresh::*;
pub use rule::*;
