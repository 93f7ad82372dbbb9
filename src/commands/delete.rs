//! Delete old messages command
//!
//! Walks every channel, prints what matched and deletes it when asked to.

use std::io::Write;

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::Result;
use crate::slack::SlackClient;

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub channels: usize,
    pub matched: usize,
    pub deleted: usize,
    pub performed: bool,
}

impl DeleteReport {
    pub fn summary(&self) -> String {
        if !self.performed {
            return "This is dry-run".to_string();
        }

        match self.deleted {
            0 => "No deleted messages".to_string(),
            1 => "Delete 1 message".to_string(),
            n => format!("Delete {} messages", n),
        }
    }
}

/// Run the delete loop, writing message text and the summary to `out`.
///
/// Any error aborts the run immediately.
pub async fn run<W: Write>(
    client: &SlackClient,
    config: &RunConfig,
    out: &mut W,
) -> Result<DeleteReport> {
    let channels = client.list_channels().await?;
    info!(
        channels = channels.len(),
        days = config.days,
        perform = config.perform,
        "Scanning channels"
    );

    let mut report = DeleteReport {
        channels: channels.len(),
        performed: config.perform,
        ..Default::default()
    };

    for channel in &channels {
        let messages = client.list_messages_before(&channel.id, config.days).await?;
        debug!(channel = %channel.id, matched = messages.len(), "Old messages");

        if config.prints_messages() {
            for message in &messages {
                writeln!(out, "{}", message.text)?;
            }
        }

        if config.perform {
            report.deleted += client.delete_messages(&channel.id, &messages).await?;
        }

        report.matched += messages.len();
    }

    writeln!(out)?;
    writeln!(out, "{}", report.summary())?;
    out.flush()?;

    Ok(report)
}
