//! CLI subcommands.

pub mod delete;
pub mod flush;
