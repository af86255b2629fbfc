//! The reqwest-backed implementation of the `Starling` trait.
//!
//! All four endpoint calls funnel through one `request` helper that attaches the bearer token and
//! JSON content type and normalizes every failure into an absent result, and one `decode` helper
//! that maps the raw JSON into the typed record, logging the offending field on a shape mismatch.

use crate::api::Starling;
use crate::model::{BalanceResponse, RecurringTransfer, SavingsGoal, SavingsGoalList};
use crate::Config;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

pub(super) struct StarlingClient {
    http: reqwest::Client,
    config: Config,
}

impl StarlingClient {
    pub(super) fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the full URL for an API path relative to the configured base.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_url().as_str().trim_end_matches('/'),
            path
        )
    }

    /// Performs one HTTP request and returns the parsed JSON body on any 2xx response.
    ///
    /// Nothing here raises to the caller: transport errors and non-2xx statuses are logged and
    /// become `None`. A 404 is logged at debug because for the recurring-transfer endpoint it is
    /// the API's way of saying "not configured".
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Option<Value> {
        let url = self.endpoint(path);
        debug!("{method} {url}");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(self.config.access_token())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("API request failed: {method} {url}: {e}");
                return None;
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{method} {url} returned 404");
            return None;
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("API request failed: {method} {url} returned {status}: {text}");
            return None;
        }

        match response.json::<Value>().await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Failed to parse response body from {method} {url}: {e}");
                None
            }
        }
    }
}

/// Maps a raw JSON response into the typed record `T`, logging what failed to map on a mismatch.
fn decode<T: DeserializeOwned>(what: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            error!("The {what} response did not match the expected shape: {e}");
            None
        }
    }
}

#[async_trait::async_trait]
impl Starling for StarlingClient {
    async fn balance(&self) -> Option<BalanceResponse> {
        let path = format!("accounts/{}/balance", self.config.account_uid());
        let value = self.request(Method::GET, &path, None).await?;
        decode("balance", value)
    }

    async fn savings_goals(&self) -> Option<Vec<SavingsGoal>> {
        let path = format!("account/{}/savings-goals", self.config.account_uid());
        let value = self.request(Method::GET, &path, None).await?;
        decode::<SavingsGoalList>("savings goal list", value).map(SavingsGoalList::into_goals)
    }

    async fn recurring_transfer(&self, goal_uid: &str) -> Option<RecurringTransfer> {
        let path = format!(
            "account/{}/savings-goals/{goal_uid}/recurring-transfer",
            self.config.account_uid()
        );
        let value = self.request(Method::GET, &path, None).await?;
        decode("recurring transfer", value)
    }

    async fn set_recurring_transfer(
        &self,
        goal_uid: &str,
        transfer: &RecurringTransfer,
    ) -> Option<RecurringTransfer> {
        let body = match serde_json::to_value(transfer) {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to serialize the recurring transfer for goal {goal_uid}: {e}");
                return None;
            }
        };
        let path = format!(
            "account/{}/savings-goals/{goal_uid}/recurring-transfer",
            self.config.account_uid()
        );
        let value = self.request(Method::PUT, &path, Some(body)).await?;
        decode("recurring transfer update", value)
    }
}
