use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A missing or `null` field decodes to its zero value instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Film {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub length: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub director_name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Film {
    /// Parsed `release_date`, or `None` when it is not a valid `YYYY-MM-DD` date.
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, RELEASE_DATE_FORMAT).ok()
    }

    pub fn is_directed_by(&self, director_name: &str) -> bool {
        self.director_name == director_name
    }
}

/// Films in the order the service returned them. Decodes straight from the JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmCatalog {
    films: Vec<Film>,
}

impl FilmCatalog {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }

    pub fn directed_by<'a>(&'a self, director_name: &'a str) -> impl Iterator<Item = &'a Film> {
        self.films
            .iter()
            .filter(move |film| film.is_directed_by(director_name))
    }
}

impl Deref for FilmCatalog {
    type Target = [Film];

    fn deref(&self) -> &[Film] {
        &self.films
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub director: String,
    pub film_count: usize,
    pub best_rated_film: String,
    pub average_rating: f64,
    pub shortest_release_gap_days: i64,
    pub director_with_most_films: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog_from_json_array() {
        let body = r#"[
            {"name": "Batman Begins", "length": 140, "rating": 8.2,
             "releaseDate": "2006-06-16", "directorName": "Christopher Nolan"},
            {"name": "Interstellar", "length": 169, "rating": 8.6,
             "releaseDate": "2014-11-07", "directorName": "Christopher Nolan"}
        ]"#;

        let catalog: FilmCatalog = serde_json::from_str(body).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Batman Begins");
        assert_eq!(catalog[1].length, 169);
        assert_eq!(catalog[1].director_name, "Christopher Nolan");
    }

    #[test]
    fn test_decode_keeps_films_with_null_or_missing_fields() {
        let body = r#"[
            {"name": "Memento", "length": 113, "rating": null,
             "releaseDate": "2000-10-11", "directorName": "Christopher Nolan"},
            {"name": "Inception", "rating": 8.8,
             "releaseDate": "2010-07-16", "directorName": "Christopher Nolan"},
            {"name": null, "length": 96, "rating": 7.1, "releaseDate": null}
        ]"#;

        let catalog: FilmCatalog = serde_json::from_str(body).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].name, "Memento");
        assert_eq!(catalog[0].rating, 0.0);
        assert_eq!(catalog[1].name, "Inception");
        assert_eq!(catalog[1].length, 0);
        assert_eq!(catalog[1].rating, 8.8);
        assert_eq!(
            catalog[2],
            Film {
                length: 96,
                rating: 7.1,
                ..Film::default()
            }
        );
        assert_eq!(catalog.directed_by("Christopher Nolan").count(), 2);
    }

    #[test]
    fn test_decode_rejects_wrongly_typed_field() {
        let body = r#"[{"name": "Tenet", "length": "150 min"}]"#;
        assert!(serde_json::from_str::<FilmCatalog>(body).is_err());
    }

    #[test]
    fn test_decode_rejects_object_body() {
        let result = serde_json::from_str::<FilmCatalog>(r#"{"error": "unauthorized"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parsed_release_date() {
        let mut film = Film {
            name: "Prestige".to_string(),
            length: 130,
            rating: 8.5,
            release_date: "2006-11-10".to_string(),
            director_name: "Christopher Nolan".to_string(),
        };
        assert_eq!(
            film.parsed_release_date(),
            NaiveDate::from_ymd_opt(2006, 11, 10)
        );

        film.release_date = "10/11/2006".to_string();
        assert_eq!(film.parsed_release_date(), None);
    }

    #[test]
    fn test_directed_by_is_case_sensitive() {
        let film = |director: &str| Film {
            name: "x".to_string(),
            length: 1,
            rating: 1.0,
            release_date: "2000-01-01".to_string(),
            director_name: director.to_string(),
        };
        let catalog = FilmCatalog::new(vec![film("Nolan"), film("nolan"), film("Nolan ")]);

        assert_eq!(catalog.directed_by("Nolan").count(), 1);
    }
}
