// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::{build_project_status_query, RailwayClient, StatusReport};
pub use commands::fetch_and_print;
pub use config::{Config, StatusConfig};
pub use error::{StatusError, StatusResult};
