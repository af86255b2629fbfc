//! These structs provide the CLI interface for the waterfall CLI.

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use url::Url;

/// The default Starling Bank API base URL.
pub const DEFAULT_API_URL: &str = "https://api.starlingbank.com/api/v2";

/// waterfall: a command-line tool for Starling Bank savings goals.
///
/// The purpose of this program is to report your Starling Bank main balance, your savings goals
/// ("spaces") and their recurring transfer schedules, and to optionally confirm those recurring
/// transfers by resubmitting each one to the bank unchanged (the "waterfall").
///
/// You will need a Starling personal access token and your account uid. These are read from the
/// ACCESS_TOKEN and ACCOUNT_UID environment variables, or can be passed as flags.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the balance, savings goal and recurring transfer report without changing anything.
    Report,
    /// Print the report, then resubmit every configured recurring transfer to the bank,
    /// provided the main balance covers their total.
    Waterfall(WaterfallArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The Starling personal access token used as the bearer token on every API call.
    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// The uid of the Starling account to operate on.
    #[arg(long, env = "ACCOUNT_UID")]
    account_uid: String,

    /// The base URL of the Starling API.
    #[arg(long, env = "STARLING_API_URL", default_value = DEFAULT_API_URL)]
    api_url: Url,
}

impl Common {
    pub fn new(
        log_level: LevelFilter,
        access_token: impl Into<String>,
        account_uid: impl Into<String>,
        api_url: Url,
    ) -> Self {
        Self {
            log_level,
            access_token: access_token.into(),
            account_uid: account_uid.into(),
            api_url,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
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

/// Args for the `waterfall waterfall` command.
#[derive(Debug, Parser, Clone)]
pub struct WaterfallArgs {
    /// Skip the interactive confirmation prompt and proceed with the waterfall.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl WaterfallArgs {
    pub fn new(yes: bool) -> Self {
        Self { yes }
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}
