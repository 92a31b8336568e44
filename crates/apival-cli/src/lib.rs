//! Terminal front end for apival
//!
//! Renders comparison records and saved validation service responses as
//! tables, JSON, or plain text. The `apival` binary wires these up to clap.

pub mod config;
pub mod output;

pub use config::AppConfig;
pub use output::{OutputFormat, RenderOptions};
