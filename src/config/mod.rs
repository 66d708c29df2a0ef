#[allow(clippy::module_inception)]
pub mod config;

pub use config::{load_config, load_config_from, Config, StatusConfig};
