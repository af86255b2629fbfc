//! Savings goals ("spaces"): named sub-accounts earmarked for a savings target.

use crate::model::{Amount, RecurringTransfer};
use serde::{Deserialize, Serialize};

/// The lifecycle state of a savings goal as reported by Starling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalState {
    Creating,
    Active,
    Archiving,
    Archived,
    Restoring,
    Pending,
    /// Any state this tool does not know about. The goal is still reported.
    #[serde(other)]
    Unknown,
}

serde_plain::derive_display_from_serialize!(GoalState);
serde_plain::derive_fromstr_from_deserialize!(GoalState);

/// A single savings goal, optionally carrying the recurring transfer that feeds it.
///
/// The goal itself is one API payload; the recurring transfer comes from a separate per-goal
/// endpoint and is attached by the session after its own fetch. It is therefore excluded from
/// (de)serialization of the goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    savings_goal_uid: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<Amount>,
    total_saved: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_percentage: Option<u32>,
    state: GoalState,
    #[serde(skip)]
    recurring_transfer: Option<RecurringTransfer>,
}

impl SavingsGoal {
    /// Creates a goal with the required fields; `target`, `savedPercentage` and the recurring
    /// transfer are absent.
    pub fn new(
        savings_goal_uid: impl Into<String>,
        name: impl Into<String>,
        total_saved: Amount,
        state: GoalState,
    ) -> Self {
        Self {
            savings_goal_uid: savings_goal_uid.into(),
            name: name.into(),
            target: None,
            total_saved,
            saved_percentage: None,
            state,
            recurring_transfer: None,
        }
    }

    pub fn uid(&self) -> &str {
        &self.savings_goal_uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> Option<&Amount> {
        self.target.as_ref()
    }

    pub fn total_saved(&self) -> &Amount {
        &self.total_saved
    }

    pub fn saved_percentage(&self) -> Option<u32> {
        self.saved_percentage
    }

    pub fn state(&self) -> GoalState {
        self.state
    }

    pub fn recurring_transfer(&self) -> Option<&RecurringTransfer> {
        self.recurring_transfer.as_ref()
    }

    /// Attaches the recurring transfer fetched for this goal, or records that it has none.
    pub fn attach_recurring_transfer(&mut self, transfer: Option<RecurringTransfer>) {
        self.recurring_transfer = transfer;
    }

    /// The minor-unit amount of this goal's recurring transfer; 0 when it has none.
    pub fn recurring_minor_units(&self) -> u64 {
        self.recurring_transfer
            .as_ref()
            .map(|t| t.amount().minor_units())
            .unwrap_or(0)
    }
}

/// The wire shape of the savings-goal list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalList {
    #[serde(default)]
    savings_goal_list: Vec<SavingsGoal>,
}

impl SavingsGoalList {
    pub fn into_goals(self) -> Vec<SavingsGoal> {
        self.savings_goal_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A goal payload in the shape Starling actually returns.
    const GOAL_JSON: &str = r#"{
        "savingsGoalUid": "77887788-7788-7788-7788-778877887788",
        "name": "Trip to Paris",
        "target": {"currency": "GBP", "minorUnits": 100000},
        "totalSaved": {"currency": "GBP", "minorUnits": 50000},
        "savedPercentage": 50,
        "state": "ACTIVE"
    }"#;

    #[test]
    fn test_deserialize() {
        let goal: SavingsGoal = serde_json::from_str(GOAL_JSON).unwrap();
        assert_eq!(goal.uid(), "77887788-7788-7788-7788-778877887788");
        assert_eq!(goal.name(), "Trip to Paris");
        assert_eq!(goal.total_saved().minor_units(), 50000);
        assert_eq!(goal.target().unwrap().minor_units(), 100000);
        assert_eq!(goal.saved_percentage(), Some(50));
        assert_eq!(goal.state(), GoalState::Active);
        assert!(goal.recurring_transfer().is_none());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let json = r#"{
            "savingsGoalUid": "g-1",
            "name": "Rainy Day Fund",
            "totalSaved": {"currency": "GBP", "minorUnits": 2000},
            "state": "ACTIVE"
        }"#;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert!(goal.target().is_none());
        assert!(goal.saved_percentage().is_none());
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let goal: SavingsGoal = serde_json::from_str(GOAL_JSON).unwrap();
        let reserialized = serde_json::to_value(&goal).unwrap();
        let original: serde_json::Value = serde_json::from_str(GOAL_JSON).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_unknown_state_maps_to_unknown() {
        let json = r#"{
            "savingsGoalUid": "g-1",
            "name": "Mystery",
            "totalSaved": {"minorUnits": 0},
            "state": "SOME_NEW_STATE"
        }"#;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.state(), GoalState::Unknown);
    }

    #[test]
    fn test_goal_list_unwraps() {
        let json = format!(r#"{{"savingsGoalList": [{GOAL_JSON}]}}"#);
        let list: SavingsGoalList = serde_json::from_str(&json).unwrap();
        assert_eq!(list.into_goals().len(), 1);
    }

    #[test]
    fn test_empty_goal_list() {
        let list: SavingsGoalList = serde_json::from_str("{}").unwrap();
        assert!(list.into_goals().is_empty());
    }

    #[test]
    fn test_recurring_minor_units_without_transfer() {
        let goal: SavingsGoal = serde_json::from_str(GOAL_JSON).unwrap();
        assert_eq!(goal.recurring_minor_units(), 0);
    }
}
