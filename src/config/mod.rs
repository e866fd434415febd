#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Query};
pub use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://toolbox.palette-adv.spectrocloud.com:5002/films";
