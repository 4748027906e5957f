//! Refresh marker model for change detection.

use serde::{Deserialize, Serialize};

/// Last explicit refresh or reset, in unix seconds.
///
/// Clients compare it against the value they last saw; it is not a version clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastRefresh {
    pub timestamp: f64,
}
