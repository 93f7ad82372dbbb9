//! Delsla: delete your old Slack messages
//!
//! This library provides:
//! - A small Slack Web API client (`conversations.list`,
//!   `conversations.history`, `chat.delete`)
//! - The delete loop with dry-run preview and paced deletion
//! - Configuration from the environment and CLI flags

pub mod commands;
pub mod config;
pub mod error;
pub mod slack;

// Re-export common types
pub use config::{RunConfig, SlackConfig};
pub use error::{Error, Result};
pub use slack::{Channel, Message, SlackClient};
