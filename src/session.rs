//! The in-memory view of the account for one run: the balance snapshot plus the savings goals
//! with their recurring transfers attached.

use crate::api::Starling;
use crate::model::{Amount, SavingsGoal};
use tracing::{debug, warn};

/// Holds everything fetched from the bank during a single run. The balance is fetched once when
/// the session starts; the goal list is populated lazily on first access and then cached for the
/// remainder of the run.
pub struct Session {
    api: Box<dyn Starling>,
    balance: Option<Amount>,
    spaces: Option<Vec<SavingsGoal>>,
}

impl Session {
    /// Starts a session by fetching the balance snapshot. A failed balance read leaves the
    /// balance absent; the run continues and anything that needs the balance reports it missing.
    pub async fn start(api: Box<dyn Starling>) -> Self {
        let balance = api
            .balance()
            .await
            .map(|response| response.into_effective_balance());
        if balance.is_none() {
            warn!("Could not fetch the account balance; continuing without it");
        }
        Self {
            api,
            balance,
            spaces: None,
        }
    }

    /// The effective balance fetched at session start, if that read succeeded.
    pub fn balance(&self) -> Option<&Amount> {
        self.balance.as_ref()
    }

    pub(crate) fn api(&self) -> &dyn Starling {
        self.api.as_ref()
    }

    /// Re-fetches the goal list, then fetches each goal's recurring transfer and attaches it when
    /// present. One extra round trip per goal, strictly sequential. A failed per-goal fetch leaves
    /// that goal without a transfer; a failed list fetch leaves the goal set empty.
    pub async fn refresh(&mut self) {
        let mut goals = self.api.savings_goals().await.unwrap_or_default();
        for goal in &mut goals {
            let transfer = self.api.recurring_transfer(goal.uid()).await;
            goal.attach_recurring_transfer(transfer);
        }
        debug!("Refreshed {} savings goals", goals.len());
        self.spaces = Some(goals);
    }

    /// The savings goals, refreshing them on first access only.
    pub async fn spaces(&mut self) -> &[SavingsGoal] {
        if self.spaces.is_none() {
            debug!("Refreshing savings goals");
            self.refresh().await;
        }
        self.spaces.as_deref().unwrap_or_default()
    }

    /// The sum of all recurring transfer amounts in minor units. Goals without a recurring
    /// transfer contribute 0; an empty (or not yet fetched) goal set sums to 0.
    pub fn total_recurring(&self) -> u64 {
        self.spaces
            .iter()
            .flatten()
            .map(SavingsGoal::recurring_minor_units)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TestStarling;
    use crate::model::{Frequency, GoalState, RecurrenceRule, RecurringTransfer};
    use chrono::NaiveDate;

    fn transfer(minor_units: u64) -> RecurringTransfer {
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        RecurringTransfer::new(
            "t-1",
            RecurrenceRule::new(start, Frequency::Monthly),
            Amount::gbp(minor_units),
        )
    }

    fn goal(uid: &str, name: &str) -> SavingsGoal {
        SavingsGoal::new(uid, name, Amount::gbp(1000), GoalState::Active)
    }

    #[tokio::test]
    async fn test_total_recurring_is_zero_before_refresh() {
        let session = Session::start(Box::new(TestStarling::seeded())).await;
        assert_eq!(session.total_recurring(), 0);
    }

    #[tokio::test]
    async fn test_total_recurring_with_no_transfers() {
        let api = TestStarling::new()
            .with_balance(Amount::gbp(1))
            .with_goal(goal("g-1", "One"))
            .with_goal(goal("g-2", "Two"));
        let mut session = Session::start(Box::new(api)).await;
        session.spaces().await;
        assert_eq!(session.total_recurring(), 0);
    }

    #[tokio::test]
    async fn test_total_recurring_sums_attached_transfers() {
        let api = TestStarling::new()
            .with_balance(Amount::gbp(123451))
            .with_goal(goal("g-1", "One"))
            .with_goal(goal("g-2", "Two"))
            .with_goal(goal("g-3", "Three"))
            .with_transfer("g-1", transfer(50000))
            .with_transfer("g-3", transfer(2500));
        let mut session = Session::start(Box::new(api)).await;
        session.spaces().await;
        assert_eq!(session.total_recurring(), 52500);
    }

    #[tokio::test]
    async fn test_balance_comes_from_effective_balance() {
        let session = Session::start(Box::new(TestStarling::seeded())).await;
        assert_eq!(session.balance().unwrap().minor_units(), 123451);
    }

    #[tokio::test]
    async fn test_failed_balance_read_is_absent_not_fatal() {
        let api = TestStarling::new().with_goal(goal("g-1", "One"));
        let mut session = Session::start(Box::new(api)).await;
        assert!(session.balance().is_none());
        assert_eq!(session.spaces().await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_goal_list_read_yields_empty_set() {
        let api = TestStarling::new().with_balance(Amount::gbp(1));
        let mut session = Session::start(Box::new(api)).await;
        assert!(session.spaces().await.is_empty());
        assert_eq!(session.total_recurring(), 0);
    }

    #[tokio::test]
    async fn test_failed_transfer_read_leaves_goal_without_transfer() {
        let api = TestStarling::new()
            .with_balance(Amount::gbp(1))
            .with_goal(goal("g-1", "One"))
            .with_goal(goal("g-2", "Two"))
            .with_transfer("g-1", transfer(100))
            .with_transfer("g-2", transfer(200))
            .with_failing_transfer_read("g-2");
        let mut session = Session::start(Box::new(api)).await;
        let spaces = session.spaces().await;
        assert!(spaces[0].recurring_transfer().is_some());
        assert!(spaces[1].recurring_transfer().is_none());
        assert_eq!(session.total_recurring(), 100);
    }

    #[tokio::test]
    async fn test_spaces_is_cached_after_first_access() {
        let api = TestStarling::seeded();
        let mut session = Session::start(Box::new(api)).await;
        let first = session.spaces().await.to_vec();
        let second = session.spaces().await.to_vec();
        assert_eq!(first, second);
    }
}
