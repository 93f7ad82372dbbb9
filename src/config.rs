//! Runtime configuration
//!
//! Slack credentials come from the environment, run options from the CLI.
//! Both are read once at startup and passed around by reference.

use std::time::Duration;

use crate::{Error, Result};

/// Default constants
pub const SLACK_API_URL: &str = "https://slack.com/api";
pub const TOKEN_ENV: &str = "SLACK_API_TOKEN";
pub const API_URL_ENV: &str = "SLACK_API_URL";
pub const DEFAULT_DAYS: u32 = 3;
/// Wait after each `chat.delete` call, to stay under Slack's rate limit.
pub const DELETE_INTERVAL: Duration = Duration::from_secs(2);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// What a single run should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Print message text even when deleting
    pub verbose: bool,
    /// Actually delete; otherwise dry-run
    pub perform: bool,
    /// Only touch messages older than this many days
    pub days: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            perform: false,
            days: DEFAULT_DAYS,
        }
    }
}

impl RunConfig {
    /// Message text is shown on a dry run, or when asked for.
    pub fn prints_messages(&self) -> bool {
        !self.perform || self.verbose
    }
}

/// How to reach Slack.
#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub token: String,
    pub base_url: String,
    pub delete_interval: Duration,
    pub timeout: Duration,
}

impl SlackConfig {
    /// Build config with the default endpoint and pacing.
    pub fn new<S: Into<String>>(token: S) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::InvalidArgument(format!("{} is empty", TOKEN_ENV)));
        }

        Ok(Self {
            token,
            base_url: SLACK_API_URL.to_string(),
            delete_interval: DELETE_INTERVAL,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Load from `SLACK_API_TOKEN` and the optional `SLACK_API_URL` override.
    pub fn from_env() -> Result<Self> {
        Self::from_optional_token(None)
    }

    /// Use an explicit token, falling back to `SLACK_API_TOKEN`.
    pub fn from_optional_token(token: Option<String>) -> Result<Self> {
        let token = token
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .ok_or_else(|| Error::InvalidArgument(format!("{} is not set", TOKEN_ENV)))?;

        let mut config = Self::new(token)?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        Ok(config)
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_delete_interval(mut self, interval: Duration) -> Self {
        self.delete_interval = interval;
        self
    }
}
