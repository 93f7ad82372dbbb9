//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI.

pub mod delete;
pub mod version;
