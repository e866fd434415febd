use crate::config::DEFAULT_API_ENDPOINT;
use crate::core::service::FilmService;
use crate::core::{ConfigProvider, FilmSource};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "film-stats")]
#[command(about = "Query director statistics from the films service")]
pub struct CliConfig {
    #[arg(long, env = "FILMS_API_ENDPOINT", default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, env = "FILMS_API_TOKEN", default_value = "", hide_env_values = true)]
    pub api_token: String,

    #[arg(long, help = "TOML file with a [source] section; overrides endpoint and token flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Query {
    /// Name of the director's highest rated film
    BestRated {
        #[arg(long)]
        director: String,
    },
    /// Director with the most films in the catalog
    MostFilms,
    /// Director's mean rating, one decimal place
    AverageRating {
        #[arg(long)]
        director: String,
    },
    /// Fewest days between two consecutive releases by the director
    ReleaseGap {
        #[arg(long)]
        director: String,
    },
    /// Every statistic for the director as JSON
    Report {
        #[arg(long)]
        director: String,
    },
}

impl Query {
    /// Runs the query and renders the answer for stdout.
    pub async fn execute<S: FilmSource>(&self, service: &FilmService<S>) -> Result<String> {
        let output = match self {
            Query::BestRated { director } => service.best_rated_film(director).await,
            Query::MostFilms => service.director_with_most_films().await,
            Query::AverageRating { director } => {
                format!("{:.1}", service.average_rating(director).await)
            }
            Query::ReleaseGap { director } => {
                service.shortest_film_release_gap(director).await.to_string()
            }
            Query::Report { director } => {
                serde_json::to_string_pretty(&service.report(director).await)?
            }
        };
        Ok(output)
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_header_value("api_token", &self.api_token)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Film, FilmCatalog};
    use async_trait::async_trait;

    struct StaticSource(Vec<Film>);

    #[async_trait]
    impl FilmSource for StaticSource {
        async fn fetch_catalog(&self) -> Result<FilmCatalog> {
            Ok(FilmCatalog::new(self.0.clone()))
        }
    }

    fn service() -> FilmService<StaticSource> {
        let film = |name: &str, rating: f64, date: &str| Film {
            name: name.to_string(),
            length: 120,
            rating,
            release_date: date.to_string(),
            director_name: "Christopher Nolan".to_string(),
        };
        FilmService::new(StaticSource(vec![
            film("Batman Begins", 8.2, "2006-06-16"),
            film("Interstellar", 8.6, "2014-11-07"),
            film("Prestige", 8.5, "2006-11-10"),
        ]))
    }

    #[test]
    fn test_parse_subcommands() {
        let config = CliConfig::try_parse_from([
            "film-stats",
            "--api-endpoint",
            "http://localhost:5002/films",
            "--api-token",
            "tok",
            "best-rated",
            "--director",
            "Christopher Nolan",
        ])
        .unwrap();

        assert_eq!(config.api_endpoint(), "http://localhost:5002/films");
        assert_eq!(config.api_token(), "tok");
        assert_eq!(
            config.query,
            Query::BestRated {
                director: "Christopher Nolan".to_string()
            }
        );

        let config = CliConfig::try_parse_from(["film-stats", "most-films"]).unwrap();
        assert_eq!(config.query, Query::MostFilms);
    }

    #[test]
    fn test_director_is_required() {
        assert!(CliConfig::try_parse_from(["film-stats", "release-gap"]).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = CliConfig::try_parse_from([
            "film-stats",
            "--api-endpoint",
            "not a url",
            "most-films",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_execute_renders_answers() {
        let service = service();
        let nolan = "Christopher Nolan".to_string();

        let best = Query::BestRated {
            director: nolan.clone(),
        };
        assert_eq!(best.execute(&service).await.unwrap(), "Interstellar");

        let average = Query::AverageRating {
            director: nolan.clone(),
        };
        assert_eq!(average.execute(&service).await.unwrap(), "8.4");

        let gap = Query::ReleaseGap {
            director: nolan.clone(),
        };
        assert_eq!(gap.execute(&service).await.unwrap(), "147");

        let none = Query::AverageRating {
            director: "Nobody".to_string(),
        };
        assert_eq!(none.execute(&service).await.unwrap(), "0.0");

        let report = Query::Report { director: nolan };
        let json: serde_json::Value =
            serde_json::from_str(&report.execute(&service).await.unwrap()).unwrap();
        assert_eq!(json["film_count"], 3);
        assert_eq!(json["shortest_release_gap_days"], 147);
    }
}
