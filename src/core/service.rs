use crate::core::stats;
use crate::domain::model::{FilmCatalog, StatsReport};
use crate::domain::ports::FilmSource;
use crate::utils::error::Result;
use tokio::sync::OnceCell;

/// Owns a film source and the catalog it produced.
///
/// The source is asked for the catalog at most once per service. A failed fetch
/// is logged and leaves an empty catalog in place for the service's lifetime;
/// callers of [`FilmService::catalog`] and the query methods never see the error.
pub struct FilmService<S: FilmSource> {
    source: S,
    catalog: OnceCell<FilmCatalog>,
}

impl<S: FilmSource> FilmService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Goes to the source directly, bypassing and not touching the cache.
    pub async fn fetch_catalog(&self) -> Result<FilmCatalog> {
        self.source.fetch_catalog().await
    }

    pub async fn catalog(&self) -> &FilmCatalog {
        self.catalog
            .get_or_init(|| async {
                match self.source.fetch_catalog().await {
                    Ok(catalog) => {
                        tracing::info!("Loaded film catalog with {} films", catalog.len());
                        catalog
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Film catalog fetch failed, continuing with empty catalog: {}",
                            e
                        );
                        FilmCatalog::default()
                    }
                }
            })
            .await
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    pub async fn best_rated_film(&self, director_name: &str) -> String {
        stats::best_rated_film(self.catalog().await, director_name)
    }

    pub async fn director_with_most_films(&self) -> String {
        stats::director_with_most_films(self.catalog().await)
    }

    pub async fn average_rating(&self, director_name: &str) -> f64 {
        stats::average_rating(self.catalog().await, director_name)
    }

    pub async fn shortest_film_release_gap(&self, director_name: &str) -> i64 {
        stats::shortest_film_release_gap(self.catalog().await, director_name)
    }

    pub async fn report(&self, director_name: &str) -> StatsReport {
        let catalog = self.catalog().await;
        StatsReport {
            director: director_name.to_string(),
            film_count: catalog.directed_by(director_name).count(),
            best_rated_film: stats::best_rated_film(catalog, director_name),
            average_rating: stats::average_rating(catalog, director_name),
            shortest_release_gap_days: stats::shortest_film_release_gap(catalog, director_name),
            director_with_most_films: stats::director_with_most_films(catalog),
        }
    }
}
