//! The in-memory catalog: owned entities plus resolved cross-references.
//!
//! The catalog is built exactly once, before any action is replayed.
//! Membership never changes afterwards; only entity counters, grade lists,
//! and per-user maps mutate, and only through the command handlers.

use crate::error::{CatalogError, Result};
use crate::input::Input;
use crate::types::{Actor, Season, Show, ShowId, ShowKind, User, UserId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Owns every entity for the lifetime of a run.
///
/// Shows live in one combined list, movies first (in input order) then
/// serials (in input order); that order is the load order every tie-break
/// falls back to. Cross-references between entities are stored as indices
/// into these lists, never as a second ownership path.
#[derive(Debug)]
pub struct Catalog {
    shows: Vec<Show>,
    actors: Vec<Actor>,
    users: Vec<User>,
    title_index: HashMap<String, ShowId>,
    username_index: HashMap<String, UserId>,
}

impl Catalog {
    /// Assemble the catalog from parsed input records.
    ///
    /// Load order is significant: shows first, then actors (resolving
    /// filmography both ways), then users (resolving favorites and history,
    /// folding load-time view counts into the shows' global counters).
    /// A favorite/filmography/history title that matches no show is not an
    /// error; the reference is dropped.
    pub fn build(input: &Input) -> Result<Catalog> {
        let mut shows = Vec::with_capacity(input.movies.len() + input.serials.len());
        let mut title_index = HashMap::new();

        for movie in &input.movies {
            push_show(
                &mut shows,
                &mut title_index,
                Show {
                    title: movie.title.clone(),
                    year: movie.year,
                    genres: movie.genres.clone(),
                    cast: Vec::new(),
                    views: 0,
                    favorite_adds: 0,
                    kind: ShowKind::Movie {
                        duration: movie.duration,
                        grades: Vec::new(),
                    },
                },
            );
        }

        for serial in &input.serials {
            if serial.number_of_seasons != serial.seasons.len() {
                return Err(CatalogError::SeasonCountMismatch {
                    title: serial.title.clone(),
                    declared: serial.number_of_seasons,
                    listed: serial.seasons.len(),
                });
            }
            push_show(
                &mut shows,
                &mut title_index,
                Show {
                    title: serial.title.clone(),
                    year: serial.year,
                    genres: serial.genres.clone(),
                    cast: Vec::new(),
                    views: 0,
                    favorite_adds: 0,
                    kind: ShowKind::Serial {
                        seasons: serial
                            .seasons
                            .iter()
                            .map(|s| Season {
                                duration: s.duration,
                                grades: Vec::new(),
                            })
                            .collect(),
                    },
                },
            );
        }

        let mut actors = Vec::with_capacity(input.actors.len());
        for record in &input.actors {
            let actor_id = actors.len();
            let mut actor = Actor {
                name: record.name.clone(),
                career_description: record.career_description.clone(),
                filmography: Vec::new(),
                awards: record.awards.clone(),
            };
            for title in &record.filmography {
                match title_index.get(title) {
                    Some(&show_id) => {
                        actor.filmography.push(show_id);
                        shows[show_id].cast.push(actor_id);
                    }
                    None => debug!(actor = %record.name, %title, "dropping unknown filmography title"),
                }
            }
            actors.push(actor);
        }

        let mut users = Vec::with_capacity(input.users.len());
        let mut username_index = HashMap::new();
        for record in &input.users {
            let mut user = User::new(record.username.clone(), record.subscription_type);
            for title in &record.favorite_movies {
                match title_index.get(title) {
                    Some(&show_id) => {
                        user.favorites.push(show_id);
                        shows[show_id].favorite_adds += 1;
                    }
                    None => debug!(user = %record.username, %title, "dropping unknown favorite title"),
                }
            }
            for (title, &count) in &record.history {
                match title_index.get(title) {
                    Some(&show_id) => {
                        shows[show_id].views += count;
                        user.history.insert(show_id, count);
                    }
                    // A history entry for a title the catalog never loaded
                    // can never match a later action, so it is not recorded.
                    None => warn!(user = %record.username, %title, "skipping history entry for unknown title"),
                }
            }
            username_index
                .entry(record.username.clone())
                .or_insert(users.len());
            users.push(user);
        }

        debug!(
            shows = shows.len(),
            actors = actors.len(),
            users = users.len(),
            "catalog built"
        );

        Ok(Catalog {
            shows,
            actors,
            users,
            title_index,
            username_index,
        })
    }

    // Read access. Entity ids are positions in these slices, so callers
    // enumerate in load order for free.

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn show(&self, id: ShowId) -> &Show {
        &self.shows[id]
    }

    pub fn user(&self, id: UserId) -> &User {
        &self.users[id]
    }

    /// Look up a show by its exact title.
    pub fn show_by_title(&self, title: &str) -> Option<ShowId> {
        self.title_index.get(title).copied()
    }

    /// Look up a user by username.
    pub fn user_by_name(&self, username: &str) -> Option<UserId> {
        self.username_index.get(username).copied()
    }

    // Mutable access, for the command handlers only.

    pub fn show_mut(&mut self, id: ShowId) -> &mut Show {
        &mut self.shows[id]
    }

    pub fn user_mut(&mut self, id: UserId) -> &mut User {
        &mut self.users[id]
    }
}

fn push_show(shows: &mut Vec<Show>, title_index: &mut HashMap<String, ShowId>, show: Show) {
    // First occurrence of a title wins the index slot
    title_index.entry(show.title.clone()).or_insert(shows.len());
    shows.push(show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        ActorRecord, MovieRecord, SeasonRecord, SerialRecord, UserRecord,
    };
    use crate::types::{Genre, Subscription};
    use std::collections::HashMap as Map;

    fn movie(title: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            year: 2010,
            genres: vec![Genre::Drama],
            duration: 100,
        }
    }

    fn serial(title: &str) -> SerialRecord {
        SerialRecord {
            title: title.to_string(),
            year: 2012,
            genres: vec![Genre::Comedy],
            number_of_seasons: 2,
            seasons: vec![
                SeasonRecord { duration: 20 },
                SeasonRecord { duration: 25 },
            ],
        }
    }

    fn user(username: &str, favorites: &[&str], history: &[(&str, u32)]) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            subscription_type: Subscription::Basic,
            favorite_movies: favorites.iter().map(|s| s.to_string()).collect(),
            history: history
                .iter()
                .map(|(t, c)| (t.to_string(), *c))
                .collect(),
        }
    }

    fn empty_input() -> Input {
        Input {
            movies: vec![],
            serials: vec![],
            actors: vec![],
            users: vec![],
            actions: vec![],
        }
    }

    #[test]
    fn shows_are_ordered_movies_then_serials() {
        let input = Input {
            movies: vec![movie("M1"), movie("M2")],
            serials: vec![serial("S1")],
            ..empty_input()
        };
        let catalog = Catalog::build(&input).unwrap();
        let titles: Vec<&str> = catalog.shows().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["M1", "M2", "S1"]);
        assert_eq!(catalog.show_by_title("S1"), Some(2));
        assert_eq!(catalog.show_by_title("missing"), None);
    }

    #[test]
    fn filmography_links_are_two_way_and_skip_unknown_titles() {
        let input = Input {
            movies: vec![movie("M1")],
            actors: vec![ActorRecord {
                name: "Ann".to_string(),
                career_description: String::new(),
                filmography: vec!["M1".to_string(), "Ghost".to_string()],
                awards: Map::new(),
            }],
            ..empty_input()
        };
        let catalog = Catalog::build(&input).unwrap();
        assert_eq!(catalog.actors()[0].filmography, vec![0]);
        assert_eq!(catalog.show(0).cast, vec![0]);
    }

    #[test]
    fn user_load_updates_show_counters() {
        let input = Input {
            movies: vec![movie("M1")],
            users: vec![
                user("u1", &["M1"], &[("M1", 3)]),
                user("u2", &["M1"], &[]),
            ],
            ..empty_input()
        };
        let catalog = Catalog::build(&input).unwrap();
        assert_eq!(catalog.show(0).favorite_adds, 2);
        assert_eq!(catalog.show(0).views, 3);
        assert_eq!(catalog.user(0).history[&0], 3);
    }

    #[test]
    fn unknown_history_title_is_skipped_entirely() {
        let input = Input {
            movies: vec![movie("M1")],
            users: vec![user("u1", &[], &[("Ghost", 5)])],
            ..empty_input()
        };
        let catalog = Catalog::build(&input).unwrap();
        assert!(catalog.user(0).history.is_empty());
        assert_eq!(catalog.show(0).views, 0);
    }

    #[test]
    fn season_count_mismatch_is_a_load_error() {
        let mut bad = serial("S1");
        bad.number_of_seasons = 3;
        let input = Input {
            serials: vec![bad],
            ..empty_input()
        };
        assert!(matches!(
            Catalog::build(&input),
            Err(CatalogError::SeasonCountMismatch { .. })
        ));
    }
}
