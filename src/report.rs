//! Console report formatting.
//!
//! Pure functions over already-fetched data. Each section renders as a 53-column ruled table, one
//! `String` per section, and performs no I/O and no network calls.

use crate::model::{Amount, SavingsGoal};
use crate::waterfall::{GoalOutcome, Summary};
use std::fmt::Write;

/// Every table is this many columns wide.
const WIDTH: usize = 53;

/// The width of the left-hand (name) column in two-column rows.
const NAME_WIDTH: usize = 40;

fn rule(c: char) -> String {
    c.to_string().repeat(WIDTH)
}

fn row(left: &str, right: &str) -> String {
    format!("{left:<NAME_WIDTH$}{right:>13}")
}

/// The main balance section. A balance that failed to load renders as "unavailable".
pub fn balance_section(balance: Option<&Amount>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{}", row("Account", "Balance"));
    let _ = writeln!(out, "{}", rule('-'));
    let rendered = match balance {
        Some(amount) => amount.to_string(),
        None => "unavailable".to_string(),
    };
    let _ = writeln!(out, "{}", row("Main balance:", &rendered));
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// The goal-by-goal balance table.
pub fn goals_section(spaces: &[SavingsGoal]) -> String {
    if spaces.is_empty() {
        return "No savings goals found.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{}", row("Savings Goals", "Balance"));
    let _ = writeln!(out, "{}", rule('-'));
    for goal in spaces {
        let _ = writeln!(out, "{}", row(goal.name(), &goal.total_saved().to_string()));
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// The goal-by-goal next-payment table. Goals without a recurring transfer say so.
pub fn next_payments_section(spaces: &[SavingsGoal]) -> String {
    if spaces.is_empty() {
        return "No savings goals found.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{}", row("Savings Goals", "Next Payment"));
    let _ = writeln!(out, "{}", rule('-'));
    for goal in spaces {
        match goal.recurring_transfer() {
            Some(transfer) => {
                let date = transfer.recurrence_rule().start_date();
                let _ = writeln!(
                    out,
                    "{:<29}{date}{:>14}",
                    goal.name(),
                    transfer.amount().to_string()
                );
            }
            None => {
                let _ = writeln!(out, "{:<29}{:>24}", goal.name(), "No recurring transfer");
            }
        }
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// The total-recurring summary line.
pub fn total_section(total_minor_units: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{}", row("Waterfall Total", "Amount"));
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(
        out,
        "{}",
        row(
            "Total recurring payments:",
            &Amount::gbp(total_minor_units).to_string()
        )
    );
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// The per-goal outcome table for a completed waterfall run.
pub fn waterfall_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{:<31}{:>22}", "Waterfall", "Outcome");
    let _ = writeln!(out, "{}", rule('-'));
    for (name, outcome) in summary.results() {
        let _ = writeln!(out, "{name:<31}{:>22}", outcome_label(*outcome));
    }
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(
        out,
        "{} resubmitted, {} skipped, {} failed",
        summary.resubmitted(),
        summary.skipped(),
        summary.failed()
    );
    let _ = writeln!(out, "{}", rule('='));
    out
}

fn outcome_label(outcome: GoalOutcome) -> &'static str {
    match outcome {
        GoalOutcome::Resubmitted => "resubmitted",
        GoalOutcome::SkippedNoTransfer => "skipped (no transfer)",
        GoalOutcome::SkippedZeroAmount => "skipped (zero amount)",
        GoalOutcome::UpdateFailed => "update failed",
    }
}
