//! Command handlers: the state-mutating third of the action log.
//!
//! Per (user, show) the states are: unseen -> seen via view (repeatable),
//! and independently not-favorited -> favorited and not-rated -> rated
//! (both one-way; rating is per season for serials). Handlers return the
//! output message, or `None` for the soft-skip paths that emit nothing.

use crate::messages;
use catalog::{Catalog, ShowKind};
use tracing::warn;

/// Record a view. Inserts the show into the user's history with count 1 or
/// increments the stored count; every successful view also increments the
/// show's global view counter. Unknown user or title is a soft no-op.
pub fn view(catalog: &mut Catalog, username: &str, title: &str) -> Option<String> {
    let user_id = catalog.user_by_name(username)?;
    let show_id = catalog.show_by_title(title)?;

    let count = {
        let entry = catalog
            .user_mut(user_id)
            .history
            .entry(show_id)
            .or_insert(0);
        *entry += 1;
        *entry
    };
    catalog.show_mut(show_id).views += 1;

    Some(messages::viewed(title, count))
}

/// Add a show to the user's favorites. Requires the show to be in the
/// user's history and not already favorited; both violations produce error
/// records, not skips.
pub fn favorite(catalog: &mut Catalog, username: &str, title: &str) -> Option<String> {
    let user_id = catalog.user_by_name(username)?;
    // A title the catalog never loaded cannot be in any history
    let Some(show_id) = catalog.show_by_title(title) else {
        return Some(messages::not_seen(title));
    };

    if !catalog.user(user_id).has_seen(show_id) {
        return Some(messages::not_seen(title));
    }
    if catalog.user(user_id).favorites.contains(&show_id) {
        return Some(messages::already_favorite(title));
    }

    catalog.user_mut(user_id).favorites.push(show_id);
    catalog.show_mut(show_id).favorite_adds += 1;
    Some(messages::added_favorite(title))
}

/// Rate a show (season 0) or one season of a serial (1-based). Requires
/// the show in the user's history and the (show, season) pair unrated.
pub fn rate(
    catalog: &mut Catalog,
    username: &str,
    title: &str,
    season: u32,
    grade: f64,
) -> Option<String> {
    let user_id = catalog.user_by_name(username)?;
    let show_id = catalog.show_by_title(title)?;

    if !catalog.user(user_id).has_seen(show_id) {
        return Some(messages::not_seen(title));
    }
    if catalog.user(user_id).rated.contains(&(show_id, season)) {
        return Some(messages::already_rated(title));
    }

    let show = catalog.show_mut(show_id);
    match (&mut show.kind, season) {
        (ShowKind::Movie { grades, .. }, 0) => grades.push(grade),
        (ShowKind::Serial { seasons }, n) if n >= 1 => {
            match seasons.get_mut(n as usize - 1) {
                Some(entry) => entry.grades.push(grade),
                None => {
                    warn!(%title, season, "season out of range, dropping rating");
                    return None;
                }
            }
        }
        _ => {
            warn!(%title, season, "season number does not match the show's kind");
            return None;
        }
    }

    let user = catalog.user_mut(user_id);
    user.rated.insert((show_id, season));
    user.ratings_given += 1;
    Some(messages::rated(title, grade, username))
}
