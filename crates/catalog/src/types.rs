//! Core domain types for the streaming catalog.
//!
//! This module defines the entities the replay engine operates on:
//! shows (movies and serials), actors, and subscriber profiles, plus the
//! closed genre/award/subscription vocabularies used by the dataset.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================
// Entities are owned by the Catalog in load order; an id is the entity's
// position in its owning list. Show ids double as the load-order tie-break
// used by queries and recommendations.

/// Index of a show in the catalog's combined load-order list
pub type ShowId = usize;

/// Index of an actor in the catalog's actor list
pub type ActorId = usize;

/// Index of a user in the catalog's user list
pub type UserId = usize;

// =============================================================================
// Vocabulary Enums
// =============================================================================

/// Genre tags carried by shows, as they appear in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Action")]
    Action,
    #[serde(rename = "Action & Adventure")]
    ActionAdventure,
    #[serde(rename = "Adventure")]
    Adventure,
    #[serde(rename = "Animation")]
    Animation,
    #[serde(rename = "Comedy")]
    Comedy,
    #[serde(rename = "Crime")]
    Crime,
    #[serde(rename = "Drama")]
    Drama,
    #[serde(rename = "Family")]
    Family,
    #[serde(rename = "Fantasy")]
    Fantasy,
    #[serde(rename = "History")]
    History,
    #[serde(rename = "Horror")]
    Horror,
    #[serde(rename = "Kids")]
    Kids,
    #[serde(rename = "Mystery")]
    Mystery,
    #[serde(rename = "Romance")]
    Romance,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    #[serde(rename = "Sci-Fi & Fantasy")]
    SciFiFantasy,
    #[serde(rename = "Thriller")]
    Thriller,
    #[serde(rename = "TV Movie")]
    TvMovie,
    #[serde(rename = "War")]
    War,
    #[serde(rename = "Western")]
    Western,
}

impl Genre {
    /// Resolve a genre from its dataset name, case-insensitively.
    ///
    /// Filter values and recommendation parameters arrive as free strings;
    /// an unknown name yields `None` and the caller treats the filter as
    /// matching nothing.
    pub fn from_name(name: &str) -> Option<Genre> {
        let lowered = name.to_lowercase();
        Self::ALL
            .iter()
            .find(|g| g.name().to_lowercase() == lowered)
            .copied()
    }

    /// The dataset spelling of this genre.
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::ActionAdventure => "Action & Adventure",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Kids => "Kids",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::SciFiFantasy => "Sci-Fi & Fantasy",
            Genre::Thriller => "Thriller",
            Genre::TvMovie => "TV Movie",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }

    const ALL: [Genre; 20] = [
        Genre::Action,
        Genre::ActionAdventure,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Kids,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::SciFiFantasy,
        Genre::Thriller,
        Genre::TvMovie,
        Genre::War,
        Genre::Western,
    ];
}

/// Award tags attached to actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Award {
    BestScreenplay,
    BestSupportingActor,
    BestDirector,
    BestPerformance,
    PeopleChoiceAward,
}

impl Award {
    /// Resolve an award tag from its dataset name (`BEST_DIRECTOR` etc).
    pub fn from_name(name: &str) -> Option<Award> {
        match name {
            "BEST_SCREENPLAY" => Some(Award::BestScreenplay),
            "BEST_SUPPORTING_ACTOR" => Some(Award::BestSupportingActor),
            "BEST_DIRECTOR" => Some(Award::BestDirector),
            "BEST_PERFORMANCE" => Some(Award::BestPerformance),
            "PEOPLE_CHOICE_AWARD" => Some(Award::PeopleChoiceAward),
            _ => None,
        }
    }
}

/// Subscription tier of a user. Premium gates three of the five
/// recommendation heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subscription {
    /// Non-premium tiers appear as both "BASIC" and "STANDARD" in datasets
    #[serde(alias = "STANDARD")]
    Basic,
    Premium,
}

// =============================================================================
// Show Types
// =============================================================================

/// One season of a serial: its runtime and the grades it has received.
#[derive(Debug, Clone)]
pub struct Season {
    /// Runtime in minutes
    pub duration: u32,
    /// One entry per valid rating action against this season
    pub grades: Vec<f64>,
}

/// Variant-specific payload of a show.
///
/// Rating average and duration have per-variant formulas, dispatched by
/// matching on this tag rather than through trait objects.
#[derive(Debug, Clone)]
pub enum ShowKind {
    Movie {
        /// Runtime in minutes, fixed at load
        duration: u32,
        /// One entry per valid rating action
        grades: Vec<f64>,
    },
    Serial {
        /// Fixed at load; the declared season count equals this list's length
        seasons: Vec<Season>,
    },
}

/// A catalog title. `title` is the identity: unique, case-sensitive, and
/// the only lookup key (there are no synthetic ids beyond the load-order
/// index).
#[derive(Debug, Clone)]
pub struct Show {
    pub title: String,
    pub year: u16,
    pub genres: Vec<Genre>,
    /// Back-references into the catalog's actor list, resolved at load
    pub cast: Vec<ActorId>,
    /// Global view counter, only ever incremented
    pub views: u32,
    /// How many users hold this show in their favorites
    pub favorite_adds: u32,
    pub kind: ShowKind,
}

impl Show {
    /// Average rating of the show.
    ///
    /// Movies average their flat grade list (0 when unrated). Serials
    /// average each season (0 for an unrated season), then divide the sum
    /// of those per-season means by the declared season count, so unrated
    /// seasons drag the average down.
    pub fn rating_average(&self) -> f64 {
        match &self.kind {
            ShowKind::Movie { grades, .. } => mean(grades),
            ShowKind::Serial { seasons } => {
                if seasons.is_empty() {
                    return 0.0;
                }
                let per_season: f64 = seasons.iter().map(|s| mean(&s.grades)).sum();
                per_season / seasons.len() as f64
            }
        }
    }

    /// Total runtime in minutes; for serials, the sum over all seasons.
    pub fn duration(&self) -> u32 {
        match &self.kind {
            ShowKind::Movie { duration, .. } => *duration,
            ShowKind::Serial { seasons } => seasons.iter().map(|s| s.duration).sum(),
        }
    }

    /// Whether this show is a movie (vs. a serial).
    pub fn is_movie(&self) -> bool {
        matches!(self.kind, ShowKind::Movie { .. })
    }
}

fn mean(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().sum::<f64>() / grades.len() as f64
}

// =============================================================================
// Actor
// =============================================================================

/// A cast member. Identity is the name; filmography holds load-order show
/// ids resolved at catalog build time (names absent from the catalog are
/// dropped there).
#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    pub career_description: String,
    pub filmography: Vec<ShowId>,
    pub awards: HashMap<Award, u32>,
}

impl Actor {
    /// Mean of the rating averages over this actor's filmography, counting
    /// only shows whose own average is non-zero. 0 if none qualify.
    ///
    /// Filmography ids index into the catalog's show list, so the caller
    /// passes that slice in.
    pub fn rating_average(&self, shows: &[Show]) -> f64 {
        let averages: Vec<f64> = self
            .filmography
            .iter()
            .filter_map(|&id| shows.get(id))
            .map(Show::rating_average)
            .filter(|&avg| avg != 0.0)
            .collect();
        mean(&averages)
    }

    /// Total number of awards across all award tags.
    pub fn award_count(&self) -> u32 {
        self.awards.values().sum()
    }
}

// =============================================================================
// User
// =============================================================================

/// A subscriber profile.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub subscription: Subscription,
    /// Per-show cumulative view count; present iff the user has seen the show
    pub history: HashMap<ShowId, u32>,
    /// Favorited shows, no duplicates, one-way transition
    pub favorites: Vec<ShowId>,
    /// (show, season) pairs already rated; season 0 stands for a movie.
    /// Keyed by the pair so seasons of one serial rate independently and a
    /// repeat on any single season is always rejected.
    pub rated: HashSet<(ShowId, u32)>,
    /// Total valid rating actions issued by this user
    pub ratings_given: u32,
}

impl User {
    pub fn new(username: String, subscription: Subscription) -> Self {
        Self {
            username,
            subscription,
            history: HashMap::new(),
            favorites: Vec::new(),
            rated: HashSet::new(),
            ratings_given: 0,
        }
    }

    /// Whether the user has viewed the given show at least once.
    pub fn has_seen(&self, show: ShowId) -> bool {
        self.history.contains_key(&show)
    }
}
