pub mod service;
pub mod stats;

pub use crate::domain::model::{Film, FilmCatalog, StatsReport};
pub use crate::domain::ports::{ConfigProvider, FilmSource};
pub use crate::utils::error::Result;
