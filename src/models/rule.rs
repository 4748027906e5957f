//! Rule model matching the `rules` document.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A house rule and its drink cost, serialized as a `[text, cost]` pair.
///
/// Rules have no stable id: their position in the list is their identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule(pub String, pub u32);

impl Rule {
    pub fn new(text: impl Into<String>, cost: u32) -> Self {
        Self(text.into(), cost)
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn cost(&self) -> u32 {
        self.1
    }
}

/// Request body for appending a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRuleRequest {
    pub rule: String,
    pub sip_count: NonZeroU32,
}

/// Request body for deleting a rule by position.
///
/// Signed so that negative indices reach the bounds check and fail with the
/// same error as indices past the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRuleRequest {
    pub index: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_wire_format_is_pair() {
        let rule = Rule::new("Finish your drink", 2);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json, serde_json::json!(["Finish your drink", 2]));
    }

    #[test]
    fn test_add_rule_rejects_zero_cost() {
        let parsed = serde_json::from_str::<AddRuleRequest>(r#"{"rule": "x", "sip_count": 0}"#);
        assert!(parsed.is_err());
    }
}
