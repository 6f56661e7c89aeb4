//! Heuristics gated on a premium subscription.

use crate::Recommendation;
use catalog::{Catalog, Genre, Subscription, User};
use std::collections::HashMap;
use tracing::instrument;

/// Resolve the user and enforce the premium gate shared by all three
/// heuristics in this module.
fn premium_user<'a>(catalog: &'a Catalog, username: &str) -> Option<&'a User> {
    let user = catalog.user(catalog.user_by_name(username)?);
    (user.subscription == Subscription::Premium).then_some(user)
}

/// First unseen show of the most popular genre.
///
/// A genre's popularity is the sum of global view counts over every show
/// carrying it. Genres are ranked by that score descending; equal scores
/// keep first-encountered-in-load-order position (the accumulation below is
/// in encounter order and the sort is stable). Within a genre, shows are
/// scanned in load order.
#[instrument(skip(catalog))]
pub fn popular(catalog: &Catalog, username: &str) -> Recommendation {
    let Some(user) = premium_user(catalog, username) else {
        return Recommendation::CannotBeApplied;
    };

    let mut order: Vec<Genre> = Vec::new();
    let mut scores: HashMap<Genre, u64> = HashMap::new();
    for show in catalog.shows() {
        for genre in &show.genres {
            if !scores.contains_key(genre) {
                order.push(*genre);
            }
            *scores.entry(*genre).or_insert(0) += u64::from(show.views);
        }
    }

    let mut ranked: Vec<(Genre, u64)> = order
        .into_iter()
        .map(|genre| (genre, scores[&genre]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    for (genre, _) in ranked {
        for (id, show) in catalog.shows().iter().enumerate() {
            if !user.has_seen(id) && show.genres.contains(&genre) {
                return Recommendation::Title(show.title.clone());
            }
        }
    }
    Recommendation::CannotBeApplied
}

/// The most-favorited show the user hasn't seen. Shows nobody favorited
/// are ignored; equal counts keep load order.
#[instrument(skip(catalog))]
pub fn favorite(catalog: &Catalog, username: &str) -> Recommendation {
    let Some(user) = premium_user(catalog, username) else {
        return Recommendation::CannotBeApplied;
    };

    let mut favorited: Vec<(usize, u32)> = catalog
        .shows()
        .iter()
        .enumerate()
        .filter(|(_, show)| show.favorite_adds > 0)
        .map(|(id, show)| (id, show.favorite_adds))
        .collect();
    favorited.sort_by(|a, b| b.1.cmp(&a.1));

    favorited
        .into_iter()
        .find(|(id, _)| !user.has_seen(*id))
        .map(|(id, _)| Recommendation::Title(catalog.show(id).title.clone()))
        .unwrap_or(Recommendation::CannotBeApplied)
}

/// Every unseen show carrying the requested genre, sorted ascending by
/// rating average then by title. Unlike the other heuristics this returns
/// the whole list.
#[instrument(skip(catalog))]
pub fn search(catalog: &Catalog, username: &str, genre: &str) -> Recommendation {
    let Some(user) = premium_user(catalog, username) else {
        return Recommendation::CannotBeApplied;
    };
    let Some(genre) = Genre::from_name(genre) else {
        return Recommendation::CannotBeApplied;
    };

    let mut matches: Vec<(String, f64)> = catalog
        .shows()
        .iter()
        .enumerate()
        .filter(|(id, show)| !user.has_seen(*id) && show.genres.contains(&genre))
        .map(|(_, show)| (show.title.clone(), show.rating_average()))
        .collect();
    matches.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    if matches.is_empty() {
        Recommendation::CannotBeApplied
    } else {
        Recommendation::Titles(matches.into_iter().map(|(title, _)| title).collect())
    }
}
