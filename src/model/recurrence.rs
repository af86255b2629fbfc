//! The recurrence rule that describes when a recurring transfer fires.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a recurring transfer repeats. Starling sends these as upper-case strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

serde_plain::derive_display_from_serialize!(Frequency);
serde_plain::derive_fromstr_from_deserialize!(Frequency);

/// The schedule of a recurring transfer: when it starts and how often it repeats.
///
/// Only `startDate` and `frequency` are consumed by this tool. The remaining fields appear in real
/// Starling payloads and are carried so that resubmitting a transfer echoes the rule unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    start_date: NaiveDate,
    #[serde(default)]
    frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    until_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    days: Vec<String>,
}

impl RecurrenceRule {
    /// Creates a rule with the given start date and frequency and no further constraints.
    pub fn new(start_date: NaiveDate, frequency: Frequency) -> Self {
        Self {
            start_date,
            frequency,
            interval: None,
            count: None,
            until_date: None,
            days: Vec::new(),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_defaults_to_monthly() {
        let json = r#"{"startDate":"2023-01-01"}"#;
        let rule: RecurrenceRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.frequency(), Frequency::Monthly);
        assert_eq!(
            rule.start_date(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_frequency_display() {
        assert_eq!(Frequency::Monthly.to_string(), "MONTHLY");
        assert_eq!(Frequency::Daily.to_string(), "DAILY");
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        // The shape Starling actually returns, optional scheduling fields included.
        let json = r#"{
            "startDate": "2023-01-01",
            "frequency": "DAILY",
            "interval": 2,
            "count": 10,
            "untilDate": "2023-01-01",
            "days": ["MONDAY"]
        }"#;
        let rule: RecurrenceRule = serde_json::from_str(json).unwrap();
        let reserialized = serde_json::to_value(&rule).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_missing_start_date_is_rejected() {
        let json = r#"{"frequency":"MONTHLY"}"#;
        assert!(serde_json::from_str::<RecurrenceRule>(json).is_err());
    }
}
