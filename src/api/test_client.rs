//! Implements the `Starling` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the
//! whole app, top-to-bottom, without a Starling account (set WATERFALL_TEST_MODE).

use crate::api::Starling;
use crate::model::{
    Amount, BalanceResponse, Frequency, GoalState, RecurrenceRule, RecurringTransfer, SavingsGoal,
};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::error;

/// An implementation of the `Starling` trait that does not use the network. Its data is fixed at
/// construction; individual reads and writes can be told to fail so that the absent-result paths
/// can be exercised. Every accepted update is recorded, and the record is shared between clones
/// so a test can keep a handle on it after the app takes ownership of the client.
#[derive(Clone, Default)]
pub struct TestStarling {
    balance: Option<BalanceResponse>,
    goals: Option<Vec<SavingsGoal>>,
    transfers: HashMap<String, RecurringTransfer>,
    failing_transfer_reads: HashSet<String>,
    failing_updates: HashSet<String>,
    updates: Arc<Mutex<Vec<(String, RecurringTransfer)>>>,
}

impl TestStarling {
    /// An empty instance: every read is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed data resembling a real account: a balance of £1,234.51 and two active goals, one with
    /// a £500.00 monthly recurring transfer and one with none.
    pub fn seeded() -> Self {
        let paris = SavingsGoal::new(
            "77887788-7788-7788-7788-778877887788",
            "Trip to Paris",
            Amount::gbp(50000),
            GoalState::Active,
        );
        let rainy_day = SavingsGoal::new(
            "77887788-7788-7788-7788-778877887789",
            "Rainy Day Fund",
            Amount::gbp(2000),
            GoalState::Active,
        );
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let transfer = RecurringTransfer::new(
            "88998899-8899-8899-8899-889988998899",
            RecurrenceRule::new(start, Frequency::Monthly),
            Amount::gbp(50000),
        );

        Self::new()
            .with_balance(Amount::gbp(123451))
            .with_goal(paris.clone())
            .with_goal(rainy_day)
            .with_transfer(paris.uid(), transfer)
    }

    pub fn with_balance(mut self, effective: Amount) -> Self {
        let value = serde_json::json!({ "effectiveBalance": effective });
        self.balance = serde_json::from_value(value).ok();
        self
    }

    pub fn with_goal(mut self, goal: SavingsGoal) -> Self {
        self.goals.get_or_insert_with(Vec::new).push(goal);
        self
    }

    pub fn with_transfer(mut self, goal_uid: &str, transfer: RecurringTransfer) -> Self {
        self.transfers.insert(goal_uid.to_string(), transfer);
        self
    }

    /// Makes the recurring-transfer read for `goal_uid` behave like a transport failure.
    pub fn with_failing_transfer_read(mut self, goal_uid: &str) -> Self {
        self.failing_transfer_reads.insert(goal_uid.to_string());
        self
    }

    /// Makes the recurring-transfer update for `goal_uid` behave like a transport failure.
    pub fn with_failing_update(mut self, goal_uid: &str) -> Self {
        self.failing_updates.insert(goal_uid.to_string());
        self
    }

    /// The updates accepted so far, in call order, as (goal uid, submitted transfer).
    pub fn updates(&self) -> Vec<(String, RecurringTransfer)> {
        self.updates.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Starling for TestStarling {
    async fn balance(&self) -> Option<BalanceResponse> {
        self.balance.clone()
    }

    async fn savings_goals(&self) -> Option<Vec<SavingsGoal>> {
        self.goals.clone()
    }

    async fn recurring_transfer(&self, goal_uid: &str) -> Option<RecurringTransfer> {
        if self.failing_transfer_reads.contains(goal_uid) {
            error!("API request failed: simulated failure reading the transfer for {goal_uid}");
            return None;
        }
        self.transfers.get(goal_uid).cloned()
    }

    async fn set_recurring_transfer(
        &self,
        goal_uid: &str,
        transfer: &RecurringTransfer,
    ) -> Option<RecurringTransfer> {
        if self.failing_updates.contains(goal_uid) {
            error!("API request failed: simulated failure updating the transfer for {goal_uid}");
            return None;
        }
        if let Ok(mut updates) = self.updates.lock() {
            updates.push((goal_uid.to_string(), transfer.clone()));
        }
        Some(transfer.clone())
    }
}
