//! Subcommand implementations.

pub mod edit;
pub mod query;
