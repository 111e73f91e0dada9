//! CLI command handlers

pub mod commands;

pub use commands::{copy, list_funds};
