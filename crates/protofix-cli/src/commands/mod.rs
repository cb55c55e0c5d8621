//! CLI commands

pub mod rewrite;
