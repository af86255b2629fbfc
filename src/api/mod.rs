//! The seam between this tool and the Starling Bank API.
//!
//! Everything upstream of this module works against the [`Starling`] trait. The real
//! implementation wraps reqwest; an in-memory implementation exists for tests and for running the
//! whole app without touching the bank.

mod client;
mod test_client;

use crate::model::{BalanceResponse, RecurringTransfer, SavingsGoal};
use crate::Config;

pub use test_client::TestStarling;

/// Environment variable that switches the app to the in-memory API implementation.
const TEST_MODE_VAR: &str = "WATERFALL_TEST_MODE";

/// The operations this tool performs against the bank.
///
/// Every method returns `Option`: a transport failure, a non-2xx status or a payload that does not
/// match the expected shape is logged at the API boundary and surfaces to the caller as an absent
/// result. Callers treat absent as "operation failed, proceed as if empty".
#[async_trait::async_trait]
pub trait Starling: Send + Sync {
    /// `GET /accounts/{account}/balance`
    async fn balance(&self) -> Option<BalanceResponse>;

    /// `GET /account/{account}/savings-goals`, unwrapped from its list envelope.
    async fn savings_goals(&self) -> Option<Vec<SavingsGoal>>;

    /// `GET /account/{account}/savings-goals/{goal}/recurring-transfer`. Absent also means the
    /// goal has no recurring transfer configured (the API returns 404 for that case).
    async fn recurring_transfer(&self, goal_uid: &str) -> Option<RecurringTransfer>;

    /// `PUT /account/{account}/savings-goals/{goal}/recurring-transfer`. Echoes the stored
    /// configuration on success.
    async fn set_recurring_transfer(
        &self,
        goal_uid: &str,
        transfer: &RecurringTransfer,
    ) -> Option<RecurringTransfer>;
}

/// Whether to talk to the real Starling API or the in-memory test implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Test,
}

impl Mode {
    /// `Mode::Test` when `WATERFALL_TEST_MODE` is set and non-empty, else `Mode::Live`.
    pub fn from_env() -> Self {
        match std::env::var(TEST_MODE_VAR) {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Live,
        }
    }
}

/// Creates the `Starling` implementation for the given mode.
pub fn starling(config: Config, mode: Mode) -> Box<dyn Starling> {
    match mode {
        Mode::Live => Box::new(client::StarlingClient::new(config)),
        Mode::Test => Box::new(TestStarling::seeded()),
    }
}
