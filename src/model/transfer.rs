//! A standing instruction to move a fixed amount into a savings goal on a schedule.

use crate::model::{Amount, RecurrenceRule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recurring transfer into a savings goal. A goal has at most one; it may have none.
///
/// The waterfall resubmits these to the bank byte-for-byte as read, so any field Starling returns
/// that we do not model explicitly is retained in `other_fields` and serialized back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransfer {
    transfer_uid: String,
    recurrence_rule: RecurrenceRule,
    currency_and_amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_up: Option<bool>,
    /// Fields returned by the API that this tool does not model. Preserved so the resubmitted
    /// configuration is identical to the one read.
    #[serde(flatten)]
    other_fields: BTreeMap<String, serde_json::Value>,
}

impl RecurringTransfer {
    /// Creates a transfer with the required fields and nothing else.
    pub fn new(
        transfer_uid: impl Into<String>,
        recurrence_rule: RecurrenceRule,
        currency_and_amount: Amount,
    ) -> Self {
        Self {
            transfer_uid: transfer_uid.into(),
            recurrence_rule,
            currency_and_amount,
            next_payment_date: None,
            description: None,
            reference: None,
            top_up: None,
            other_fields: BTreeMap::new(),
        }
    }

    pub fn transfer_uid(&self) -> &str {
        &self.transfer_uid
    }

    pub fn recurrence_rule(&self) -> &RecurrenceRule {
        &self.recurrence_rule
    }

    pub fn amount(&self) -> &Amount {
        &self.currency_and_amount
    }

    pub fn next_payment_date(&self) -> Option<NaiveDate> {
        self.next_payment_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frequency;

    /// A recurring-transfer payload in the shape Starling actually returns.
    const TRANSFER_JSON: &str = r#"{
        "transferUid": "88998899-8899-8899-8899-889988998899",
        "recurrenceRule": {
            "startDate": "2023-01-01",
            "frequency": "DAILY",
            "interval": 2,
            "count": 10,
            "untilDate": "2023-01-01",
            "days": ["MONDAY"]
        },
        "currencyAndAmount": {
            "currency": "GBP",
            "minorUnits": 123456
        },
        "nextPaymentDate": "2023-01-01",
        "topUp": true
    }"#;

    #[test]
    fn test_deserialize() {
        let transfer: RecurringTransfer = serde_json::from_str(TRANSFER_JSON).unwrap();
        assert_eq!(transfer.transfer_uid(), "88998899-8899-8899-8899-889988998899");
        assert_eq!(transfer.amount().minor_units(), 123456);
        assert_eq!(transfer.recurrence_rule().frequency(), Frequency::Daily);
        assert_eq!(
            transfer.next_payment_date(),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert_eq!(transfer.description(), None);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let transfer: RecurringTransfer = serde_json::from_str(TRANSFER_JSON).unwrap();
        let reserialized = serde_json::to_value(&transfer).unwrap();
        let original: serde_json::Value = serde_json::from_str(TRANSFER_JSON).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_unmodeled_fields_survive_a_round_trip() {
        let json = r#"{
            "transferUid": "t-1",
            "recurrenceRule": {"startDate": "2025-07-01"},
            "currencyAndAmount": {"currency": "GBP", "minorUnits": 100},
            "someFutureField": {"nested": true}
        }"#;
        let transfer: RecurringTransfer = serde_json::from_str(json).unwrap();
        let reserialized = serde_json::to_value(&transfer).unwrap();
        assert_eq!(reserialized["someFutureField"]["nested"], true);
    }

    #[test]
    fn test_missing_transfer_uid_is_rejected() {
        let json = r#"{
            "recurrenceRule": {"startDate": "2025-07-01"},
            "currencyAndAmount": {"minorUnits": 100}
        }"#;
        assert!(serde_json::from_str::<RecurringTransfer>(json).is_err());
    }
}
