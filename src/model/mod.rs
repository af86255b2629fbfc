//! Typed records for the Starling API payloads this tool reads and writes.
//!
//! Everything in here is a read-only snapshot of what the bank returned. Records are constructed
//! once (usually by deserializing a response body) and never mutated, with the single exception of
//! attaching a goal's recurring transfer after its separate fetch.

mod amount;
mod balance;
mod goal;
mod recurrence;
mod transfer;

pub use amount::Amount;
pub use balance::BalanceResponse;
pub use goal::{GoalState, SavingsGoal, SavingsGoalList};
pub use recurrence::{Frequency, RecurrenceRule};
pub use transfer::RecurringTransfer;
