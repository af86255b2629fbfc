//! Command handlers for the waterfall CLI.

mod report;
mod waterfall;

pub use report::report;
pub use waterfall::waterfall;

use crate::session::Session;

/// Prints the full four-section report for a session: balance, goal balances, next payments and
/// the recurring total.
pub(crate) async fn print_report(session: &mut Session) {
    print!("{}", crate::report::balance_section(session.balance()));
    println!();

    let spaces = session.spaces().await.to_vec();
    print!("{}", crate::report::goals_section(&spaces));
    println!();
    print!("{}", crate::report::next_payments_section(&spaces));
    println!();

    print!("{}", crate::report::total_section(session.total_recurring()));
    println!();
}
