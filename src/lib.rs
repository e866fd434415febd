pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Query};
pub use config::{TomlConfig, DEFAULT_API_ENDPOINT};

pub use adapters::http::HttpFilmSource;
pub use crate::core::service::FilmService;
pub use domain::model::{Film, FilmCatalog, StatsReport};
pub use domain::ports::{ConfigProvider, FilmSource};
pub use utils::error::{FilmError, Result};
