//! Player model matching the `sip-data` document.

use std::num::NonZeroU32;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Every drink increment ever recorded for one player, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub sips: Vec<u32>,
}

impl PlayerEntry {
    /// Total drinks taken by this player.
    pub fn total(&self) -> u64 {
        self.sips.iter().map(|&s| u64::from(s)).sum()
    }
}

/// The whole `sip-data` document, keyed by the exact player name.
///
/// Players stay in the order they first drank.
pub type SipData = IndexMap<String, PlayerEntry>;

/// Request body for recording drinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSipRequest {
    pub username: String,
    pub count: NonZeroU32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_every_increment() {
        let entry = PlayerEntry {
            sips: vec![1, 2, u32::MAX],
        };
        assert_eq!(entry.total(), 3 + u64::from(u32::MAX));
        assert_eq!(PlayerEntry::default().total(), 0);
    }

    #[test]
    fn test_sip_data_wire_format() {
        let data: SipData =
            serde_json::from_str(r#"{"Zoe": {"sips": [2, 3]}, "Adam": {"sips": []}}"#).unwrap();
        assert_eq!(data["Zoe"].total(), 5);
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"Zoe":{"sips":[2,3]},"Adam":{"sips":[]}}"#
        );
    }
}
