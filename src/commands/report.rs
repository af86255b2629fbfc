use crate::api::{self, Mode};
use crate::session::Session;
use crate::{Config, Result};

/// Handles the `report` command: fetch everything, print the report, change nothing.
pub async fn report(config: Config, mode: Mode) -> Result<()> {
    let api = api::starling(config, mode);
    let mut session = Session::start(api).await;
    super::print_report(&mut session).await;
    Ok(())
}
