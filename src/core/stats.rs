//! Aggregate queries over an in-memory film list.
//!
//! Every function here is pure and infallible: an absent director yields the
//! sentinel `""`, `0` or `0.0` instead of an error. Director names match exactly,
//! with no case folding or trimming.

use crate::domain::model::Film;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Name of the highest-rated film by `director_name`, or `""` if there is none.
///
/// On equal ratings the film that appears first keeps the title.
pub fn best_rated_film(films: &[Film], director_name: &str) -> String {
    let mut best: Option<&Film> = None;

    for film in films.iter().filter(|f| f.is_directed_by(director_name)) {
        if best.map_or(true, |current| film.rating > current.rating) {
            best = Some(film);
        }
    }

    best.map(|film| film.name.clone()).unwrap_or_default()
}

/// Director credited with the most films across the whole list, or `""` when empty.
///
/// Counting goes through a `HashMap`, so when several directors share the top
/// count the winner depends on map iteration order and is not stable between runs.
pub fn director_with_most_films(films: &[Film]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for film in films {
        *counts.entry(film.director_name.as_str()).or_insert(0) += 1;
    }

    let mut top_director = "";
    let mut top_count = 0;
    for (director, count) in counts {
        if count > top_count {
            top_director = director;
            top_count = count;
        }
    }

    top_director.to_string()
}

/// Mean rating of the director's films rounded to one decimal, `0.0` if none.
pub fn average_rating(films: &[Film], director_name: &str) -> f64 {
    let (total, count) = films
        .iter()
        .filter(|f| f.is_directed_by(director_name))
        .fold((0.0_f64, 0_usize), |(total, count), film| {
            (total + film.rating, count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    round_to_one_decimal(total / count as f64)
}

/// Smallest number of days between two consecutive releases by the director.
///
/// Films whose release date does not parse are left out. Returns `0` when fewer
/// than two dated films remain.
pub fn shortest_film_release_gap(films: &[Film], director_name: &str) -> i64 {
    let mut release_dates: Vec<NaiveDate> = films
        .iter()
        .filter(|f| f.is_directed_by(director_name))
        .filter_map(|f| {
            let date = f.parsed_release_date();
            if date.is_none() {
                tracing::debug!(
                    "Skipping '{}' with unparsable release date '{}'",
                    f.name,
                    f.release_date
                );
            }
            date
        })
        .collect();

    release_dates.sort_unstable();

    release_dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .min()
        .unwrap_or(0)
}

/// Half-up rounding at one decimal place; `f64::round` breaks ties away from zero.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
