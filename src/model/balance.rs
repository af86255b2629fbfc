//! The account balance snapshot.

use crate::model::Amount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The balance endpoint's response. Starling returns several amount blocks (cleared balance,
/// pending transactions, overdraft and so on); only `effectiveBalance` is consumed here, and the
/// rest are retained unmodeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    effective_balance: Amount,
    #[serde(flatten)]
    other_fields: BTreeMap<String, serde_json::Value>,
}

impl BalanceResponse {
    pub fn effective_balance(&self) -> &Amount {
        &self.effective_balance
    }

    pub fn into_effective_balance(self) -> Amount {
        self.effective_balance
    }
}
