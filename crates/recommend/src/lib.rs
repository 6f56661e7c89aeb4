//! # Recommend Crate
//!
//! Five "what to watch next" heuristics over a user's unseen shows:
//!
//! - **standard**: first show in catalog load order the user hasn't seen
//! - **best_unseen**: the unseen show with the highest rating average
//! - **popular**: first unseen show of the most-viewed genre (premium only)
//! - **favorite**: most-favorited unseen show (premium only)
//! - **search**: all unseen shows of a genre, rated ascending (premium only)
//!
//! Each heuristic either produces a pick (or a list, for search) or reports
//! that it cannot be applied; that includes requests naming an unknown user
//! and premium heuristics requested by basic-tier users.

pub mod basic;
pub mod premium;

use catalog::{ActionRecord, Catalog};
use tracing::debug;

/// Outcome of a recommendation heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// A single picked title
    Title(String),
    /// An ordered title list (search only)
    Titles(Vec<String>),
    /// The heuristic has no applicable pick for this request
    CannotBeApplied,
}

/// A typed recommendation request, narrowed from a raw action record.
#[derive(Debug, Clone)]
pub enum RecRequest {
    Standard { username: String },
    BestUnseen { username: String },
    Popular { username: String },
    Favorite { username: String },
    Search { username: String, genre: String },
}

impl RecRequest {
    /// Narrow a raw record; unrecognized subtypes yield `None` and are
    /// silently skipped by the dispatcher.
    pub fn from_record(record: &ActionRecord) -> Option<RecRequest> {
        let username = record.username.clone()?;
        match record.subtype.as_deref()? {
            "standard" => Some(RecRequest::Standard { username }),
            "best_unseen" => Some(RecRequest::BestUnseen { username }),
            "popular" => Some(RecRequest::Popular { username }),
            "favorite" => Some(RecRequest::Favorite { username }),
            "search" => Some(RecRequest::Search {
                username,
                genre: record.genre.clone()?,
            }),
            _ => None,
        }
    }

    /// Display label used in the output record ("StandardRecommendation" ...).
    pub fn label(&self) -> &'static str {
        match self {
            RecRequest::Standard { .. } => "StandardRecommendation",
            RecRequest::BestUnseen { .. } => "BestRatedUnseenRecommendation",
            RecRequest::Popular { .. } => "PopularRecommendation",
            RecRequest::Favorite { .. } => "FavoriteRecommendation",
            RecRequest::Search { .. } => "SearchRecommendation",
        }
    }
}

/// Run a recommendation request against the catalog.
pub fn run(catalog: &Catalog, request: &RecRequest) -> Recommendation {
    let outcome = match request {
        RecRequest::Standard { username } => basic::standard(catalog, username),
        RecRequest::BestUnseen { username } => basic::best_unseen(catalog, username),
        RecRequest::Popular { username } => premium::popular(catalog, username),
        RecRequest::Favorite { username } => premium::favorite(catalog, username),
        RecRequest::Search { username, genre } => premium::search(catalog, username, genre),
    };
    debug!(heuristic = request.label(), applied = !matches!(outcome, Recommendation::CannotBeApplied));
    outcome
}
