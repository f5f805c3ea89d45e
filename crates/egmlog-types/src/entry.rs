use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tokenized log line.
///
/// Built once by the line tokenizer and never mutated afterwards.
/// `attributes` is a sorted map so that serialized output does not depend
/// on hash ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Calendar date as written in the log (`YYYY-MM-DD`)
    pub date: String,
    /// Time of day as written in the log (`HH:MM:SS,mmm`)
    pub time: String,
    pub message_type: String,
    pub sender: String,
    pub raw_message: String,
    /// Text before the first `:` of the message
    pub action_type: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl LogEntry {
    /// Look up an attribute value by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attribute value, or `"0"` when the key is absent.
    ///
    /// Amount attributes on a recognized event default to zero rather than
    /// blank.
    pub fn amount(&self, key: &str) -> String {
        self.attr(key).unwrap_or("0").to_string()
    }

    pub fn is_action(&self, action: &str) -> bool {
        self.action_type == action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with(attrs: &[(&str, &str)]) -> LogEntry {
        LogEntry {
            date: "2024-03-01".to_string(),
            time: "10:00:00,000".to_string(),
            message_type: "INFO".to_string(),
            sender: "GameEngine".to_string(),
            raw_message: String::new(),
            action_type: "Meters summary".to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        let entry = entry_with(&[("CurrentPlayableAmount", "500")]);
        assert_eq!(entry.amount("CurrentPlayableAmount"), "500");
        assert_eq!(entry.amount("amountWon"), "0");
        assert_eq!(entry.attr("amountWon"), None);
    }

    #[test]
    fn test_is_action() {
        let entry = entry_with(&[]);
        assert!(entry.is_action("Meters summary"));
        assert!(!entry.is_action("Meters"));
    }
}
