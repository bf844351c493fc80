//! Command implementations for the CLI.

pub mod pull;

pub use pull::{ProductReport, PullCommand};
