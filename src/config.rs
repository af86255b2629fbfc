//! Runtime configuration for the waterfall CLI.
//!
//! There is no configuration file. The two credentials and the API base URL are supplied on the
//! command line or through environment variables (see [`crate::args::Common`]), and the `Config`
//! object carries them to the API client.

use crate::args::Common;
use url::Url;

/// The `Config` object represents the configuration of the app: the credentials for the Starling
/// API and the base URL to reach it at. Nothing here is persisted; it lives for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    access_token: String,
    account_uid: String,
    api_url: Url,
}

impl Config {
    /// Create a `Config` from the parsed common CLI arguments.
    pub fn new(common: &Common) -> Self {
        Self {
            access_token: common.access_token().to_string(),
            account_uid: common.account_uid().to_string(),
            api_url: common.api_url().clone(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn account_uid(&self) -> &str {
        &self.account_uid
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[cfg(test)]
impl Config {
    /// A `Config` with fake credentials for tests that never reach the network.
    pub(crate) fn for_test() -> Self {
        use std::str::FromStr;
        Self {
            access_token: "fake-access-token".to_string(),
            account_uid: "fake-account-uid".to_string(),
            api_url: Url::from_str(crate::args::DEFAULT_API_URL).unwrap(),
        }
    }
}
