//! CLI command implementations

mod commands;

pub use commands::*;
