//! Command-level tests against a mock Slack API

mod test_version;
