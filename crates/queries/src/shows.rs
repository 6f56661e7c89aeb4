//! Show queries: kind selection, year/genre filters, criterion ranking.

use crate::pipeline::rank_by_key;
use crate::spec::{ShowCriterion, ShowQuery};
use catalog::{Catalog, Genre, Show};

/// Run a show query and return the ordered title list.
pub fn run(catalog: &Catalog, query: &ShowQuery) -> Vec<String> {
    let mut selected: Vec<&Show> = catalog
        .shows()
        .iter()
        .filter(|show| show.is_movie() == query.movies)
        .collect();

    if let Some(year) = query.year {
        selected.retain(|show| show.year == year);
    }

    if let Some(name) = &query.genre {
        // An unrecognized genre name matches no show at all
        let Some(genre) = Genre::from_name(name) else {
            return Vec::new();
        };
        selected.retain(|show| show.genres.contains(&genre));
    }

    match query.criterion {
        // No criterion: keep load order, no positivity filter
        None => selected
            .into_iter()
            .take(query.limit)
            .map(|show| show.title.clone())
            .collect(),
        Some(criterion) => {
            let entries: Vec<(String, f64)> = selected
                .into_iter()
                .map(|show| (show.title.clone(), criterion_key(criterion, show)))
                .filter(|(_, key)| *key > 0.0)
                .collect();
            rank_by_key(entries, query.sort, query.limit)
        }
    }
}

fn criterion_key(criterion: ShowCriterion, show: &Show) -> f64 {
    match criterion {
        ShowCriterion::Ratings => show.rating_average(),
        ShowCriterion::Favorite => show.favorite_adds as f64,
        ShowCriterion::Longest => show.duration() as f64,
        ShowCriterion::MostViewed => show.views as f64,
    }
}
