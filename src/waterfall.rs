//! The waterfall: resubmit every configured recurring transfer in one pass, gated on the main
//! balance covering their total.
//!
//! The flow is a small state machine. A run starts idle, passes the precondition check (producing
//! a [`Checked`] token) or aborts with a named reason, and a checked run is then distributed.
//! [`distribute`] requires the token, so no update can be issued on a run that was refused.

use crate::model::Amount;
use crate::session::Session;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{info, warn};

/// Why a waterfall run was refused before any update was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The balance read failed at session start, so the precondition cannot be evaluated.
    BalanceUnavailable,
    /// No goal has a recurring transfer, so there is nothing to resubmit.
    NoRecurringTransfers,
    /// The recurring total exceeds the available balance.
    InsufficientBalance { balance: u64, required: u64 },
}

impl Display for AbortReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::BalanceUnavailable => {
                write!(f, "the account balance could not be fetched")
            }
            AbortReason::NoRecurringTransfers => {
                write!(f, "no recurring payments are configured")
            }
            AbortReason::InsufficientBalance { balance, required } => {
                write!(
                    f,
                    "insufficient balance: {} available, {} required",
                    Amount::gbp(*balance),
                    Amount::gbp(*required)
                )
            }
        }
    }
}

/// Proof that the precondition check passed. [`distribute`] will not run without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checked {
    total: u64,
}

impl Checked {
    /// The recurring total, in minor units, that the check approved.
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Evaluates the waterfall precondition: the recurring total must be non-zero and the balance
/// must be known and cover it. On failure the returned reason names exactly what refused the run.
pub fn check(balance: Option<u64>, total_recurring: u64) -> Result<Checked, AbortReason> {
    let balance = balance.ok_or(AbortReason::BalanceUnavailable)?;
    if total_recurring == 0 {
        return Err(AbortReason::NoRecurringTransfers);
    }
    if balance < total_recurring {
        return Err(AbortReason::InsufficientBalance {
            balance,
            required: total_recurring,
        });
    }
    Ok(Checked {
        total: total_recurring,
    })
}

/// What happened to one goal during distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalOutcome {
    /// The goal's existing recurring transfer was resubmitted and the bank echoed it.
    Resubmitted,
    /// The goal has no recurring transfer; nothing to resubmit.
    SkippedNoTransfer,
    /// The goal's recurring transfer amount is zero; resubmitting it would be pointless.
    SkippedZeroAmount,
    /// The update call failed. Later goals were still attempted.
    UpdateFailed,
}

serde_plain::derive_display_from_serialize!(GoalOutcome);

/// The per-goal results of one distribution pass, in goal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    results: Vec<(String, GoalOutcome)>,
}

impl Summary {
    pub(crate) fn new(results: Vec<(String, GoalOutcome)>) -> Self {
        Self { results }
    }

    /// Each goal's name paired with what happened to it.
    pub fn results(&self) -> &[(String, GoalOutcome)] {
        &self.results
    }

    pub fn resubmitted(&self) -> usize {
        self.count(GoalOutcome::Resubmitted)
    }

    pub fn skipped(&self) -> usize {
        self.count(GoalOutcome::SkippedNoTransfer) + self.count(GoalOutcome::SkippedZeroAmount)
    }

    pub fn failed(&self) -> usize {
        self.count(GoalOutcome::UpdateFailed)
    }

    fn count(&self, outcome: GoalOutcome) -> usize {
        self.results.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Resubmits each goal's existing recurring-transfer configuration to the bank, unchanged.
///
/// Goals without a transfer, or with a zero-amount transfer, are skipped and reported as skipped.
/// Each resubmission is independent: a failure is recorded and the remaining goals are still
/// attempted. No rollback.
pub async fn distribute(session: &mut Session, checked: Checked) -> Summary {
    info!(
        "Distributing: resubmitting recurring transfers totalling {}",
        Amount::gbp(checked.total())
    );
    let goals = session.spaces().await.to_vec();
    let mut results = Vec::with_capacity(goals.len());

    for goal in &goals {
        let outcome = match goal.recurring_transfer() {
            None => GoalOutcome::SkippedNoTransfer,
            Some(transfer) if transfer.amount().is_zero() => GoalOutcome::SkippedZeroAmount,
            Some(transfer) => {
                info!(
                    "Resubmitting {} to '{}'",
                    transfer.amount(),
                    goal.name()
                );
                match session
                    .api()
                    .set_recurring_transfer(goal.uid(), transfer)
                    .await
                {
                    Some(_) => GoalOutcome::Resubmitted,
                    None => {
                        warn!("The update for '{}' failed; continuing", goal.name());
                        GoalOutcome::UpdateFailed
                    }
                }
            }
        };
        results.push((goal.name().to_string(), outcome));
    }

    Summary::new(results)
}
