use crate::api::{self, Mode};
use crate::model::Amount;
use crate::session::Session;
use crate::{report, waterfall, Config, Result};
use anyhow::Context;
use std::io::Write;
use tracing::info;

/// Handles the `waterfall` command: print the report, check that the balance covers the recurring
/// total, confirm with the user, then resubmit every configured recurring transfer.
pub async fn waterfall(config: Config, mode: Mode, assume_yes: bool) -> Result<()> {
    let api = api::starling(config, mode);
    let mut session = Session::start(api).await;
    super::print_report(&mut session).await;

    let checked = match waterfall::check(
        session.balance().map(Amount::minor_units),
        session.total_recurring(),
    ) {
        Ok(checked) => checked,
        Err(reason) => {
            println!("Waterfall aborted: {reason}.");
            return Ok(());
        }
    };

    if !assume_yes {
        let question = format!(
            "Resubmit recurring transfers totalling {}?",
            Amount::gbp(checked.total())
        );
        if !confirm(&question)? {
            println!("Waterfall aborted: not confirmed.");
            return Ok(());
        }
    }

    info!("Waterfall confirmed, distributing");
    let summary = waterfall::distribute(&mut session, checked).await;
    print!("{}", report::waterfall_summary(&summary));
    Ok(())
}

/// Asks a yes/no question on stdin. Anything other than "y" or "yes" (case-insensitive) is no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout()
        .flush()
        .context("Failed to flush the confirmation prompt")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read the confirmation answer")?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
