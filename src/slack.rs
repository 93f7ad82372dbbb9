//! Minimal Slack Web API client (channel listing, history, deletion).
//!
//! Every call is a POST with an empty body and the token in the query
//! string. Only the first page of `conversations.list` and
//! `conversations.history` is read.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::{Client, Method, Url};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::SlackConfig;
use crate::{Error, Result};

pub const CONVERSATIONS_LIST: &str = "conversations.list";
pub const CONVERSATIONS_HISTORY: &str = "conversations.history";
pub const CHAT_DELETE: &str = "chat.delete";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
    /// Slack's message id, e.g. `1700000000.000100`. Also the delete key.
    #[serde(default)]
    pub ts: String,
}

#[derive(Debug, Clone)]
pub struct SlackClient {
    http: Client,
    config: SlackConfig,
}

impl SlackClient {
    pub fn new(config: SlackConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("delsla/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::ConnectionError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Send one request and hand back the raw body.
    ///
    /// The HTTP status is not inspected: Slack reports failures through the
    /// `ok` field, so a 4xx/5xx body is returned like any other.
    pub async fn send_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        let url = build_url(&self.config.base_url, path, &self.config.token, query)?;
        debug!(%method, path, "Slack request");

        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(|e| Error::ConnectionError(format!("{}: {}", path, e.without_url())))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                Error::ConnectionError(format!("{}: failed to read body: {}", path, e.without_url()))
            })?;
        debug!(path, status = status.as_u16(), bytes = body.len(), "Slack response");

        Ok(body.to_vec())
    }

    async fn call<D: for<'de> Deserialize<'de>>(
        &self,
        method_name: &str,
        query: &[(&str, &str)],
    ) -> Result<D> {
        let body = self.send_request(Method::POST, method_name, query).await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::SerializationError(format!("{}: {}", method_name, e)))
    }

    /// All channels visible to the token, in API order.
    pub async fn list_channels(&self) -> Result<Vec<Channel>> {
        let response: ChannelsResponse = self.call(CONVERSATIONS_LIST, &[]).await?;
        if !response.ok {
            return Err(Error::slack_api(CONVERSATIONS_LIST, response.error));
        }
        Ok(response.channels.unwrap_or_default())
    }

    /// Messages in `channel_id` posted at or before `days` days ago.
    pub async fn list_messages_before(&self, channel_id: &str, days: u32) -> Result<Vec<Message>> {
        let latest = cutoff_timestamp(days, Utc::now())?;
        let query = [("channel", channel_id), ("latest", latest.as_str())];

        let response: HistoryResponse = self.call(CONVERSATIONS_HISTORY, &query).await?;
        if !response.ok {
            return Err(Error::slack_api(CONVERSATIONS_HISTORY, response.error));
        }
        Ok(response.messages.unwrap_or_default())
    }

    pub async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<()> {
        let query = [("channel", channel_id), ("ts", ts)];

        let response: DeleteResponse = self.call(CHAT_DELETE, &query).await?;
        if !response.ok {
            return Err(Error::slack_api(CHAT_DELETE, response.error));
        }
        Ok(())
    }

    /// Delete `messages` in order, waiting `delete_interval` after each one.
    ///
    /// Stops at the first failure; messages already deleted stay deleted.
    pub async fn delete_messages(&self, channel_id: &str, messages: &[Message]) -> Result<usize> {
        let mut deleted = 0;

        for message in messages {
            if message.ts.is_empty() {
                warn!(channel = channel_id, "Skipping message without ts");
                continue;
            }

            self.delete_message(channel_id, &message.ts).await?;
            deleted += 1;
            debug!(channel = channel_id, ts = %message.ts, "Deleted message");

            sleep(self.config.delete_interval).await;
        }

        if deleted > 0 {
            info!(channel = channel_id, deleted, "Channel cleaned");
        }
        Ok(deleted)
    }
}

/// `now` minus `days` whole days, as epoch seconds.
pub fn cutoff_timestamp(days: u32, now: DateTime<Utc>) -> Result<String> {
    now.checked_sub_signed(ChronoDuration::days(i64::from(days)))
        .map(|cutoff| cutoff.timestamp().to_string())
        .ok_or_else(|| Error::InvalidArgument(format!("{} days is out of range", days)))
}

/// Join `path` onto `base_url` and attach the query, token last.
///
/// A caller-supplied `token` is dropped so the configured one always wins.
fn build_url(base_url: &str, path: &str, token: &str, query: &[(&str, &str)]) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&joined)
        .map_err(|e| Error::ConnectionError(format!("invalid URL '{}': {}", joined, e)))?;

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query.iter().filter(|(key, _)| *key != "token") {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("token", token);
    }

    Ok(url)
}

// A missing `ok` reads as false, and a null list as empty.
#[derive(Debug, Deserialize)]
struct ChannelsResponse {
    #[serde(default)]
    ok: bool,
    channels: Option<Vec<Channel>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    ok: bool,
    messages: Option<Vec<Message>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    ok: bool,
    error: Option<String>,
}
