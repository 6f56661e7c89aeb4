//! Input records for the JSON dataset and action log.
//!
//! The whole run is driven by a single JSON document: the full entity set
//! (movies, serials, actors, users) followed by the ordered action log.
//! These structs mirror that document; `Catalog::build` turns the entity
//! records into linked entities, and the runner consumes the action records
//! one by one.

use crate::error::{CatalogError, Result};
use crate::types::{Award, Genre, Subscription};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The fully parsed input document.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
    #[serde(default)]
    pub serials: Vec<SerialRecord>,
    #[serde(default)]
    pub actors: Vec<ActorRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

impl Input {
    /// Read and parse an input document from a file.
    pub fn from_path(path: &Path) -> Result<Input> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse an input document from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Input> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// A movie as it appears in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: u16,
    pub genres: Vec<Genre>,
    /// Runtime in minutes
    pub duration: u32,
}

/// A serial as it appears in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct SerialRecord {
    pub title: String,
    pub year: u16,
    pub genres: Vec<Genre>,
    /// Declared season count; must equal `seasons.len()`
    pub number_of_seasons: usize,
    pub seasons: Vec<SeasonRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonRecord {
    /// Runtime in minutes
    pub duration: u32,
}

/// An actor as it appears in the dataset. Filmography entries are show
/// titles; ones that match nothing in the catalog are dropped at build time.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorRecord {
    pub name: String,
    #[serde(default)]
    pub career_description: String,
    #[serde(default)]
    pub filmography: Vec<String>,
    #[serde(default)]
    pub awards: HashMap<Award, u32>,
}

/// A user as it appears in the dataset, with favorites and viewing history
/// still keyed by show title.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub subscription_type: Subscription,
    #[serde(default)]
    pub favorite_movies: Vec<String>,
    /// Show title -> cumulative view count (>= 1)
    #[serde(default)]
    pub history: HashMap<String, u32>,
}

/// One entry of the action log, still untyped.
///
/// Only `id` and `action_type` are always present; the rest depends on the
/// category and subtype. The runner narrows a record into a typed action
/// and silently skips records whose category/subtype it does not recognize.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRecord {
    pub id: u32,
    /// "command", "query" or "recommendation"
    pub action_type: String,
    /// Subtype within the category ("view", "rating", "standard", ...)
    #[serde(rename = "type", default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// 1-based season for serial ratings; 0 means the title is a movie
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub grade: Option<f64>,
    /// Query target: "movies", "shows", "users" or "actors"
    #[serde(default)]
    pub object_type: Option<String>,
    /// Query sort criterion ("ratings", "longest", "average", ...)
    #[serde(default)]
    pub criteria: Option<String>,
    /// "asc" or "desc"
    #[serde(default)]
    pub sort_type: Option<String>,
    /// Maximum number of query results
    #[serde(default)]
    pub number: Option<usize>,
    /// Genre parameter of the search recommendation
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub filters: FilterSet,
}

/// Recognized query filters. Absent keys filter nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSet {
    /// Exact release year
    #[serde(default)]
    pub year: Option<u16>,
    /// Genre membership, by dataset name
    #[serde(default)]
    pub genre: Option<String>,
    /// Whole words that must all appear in an actor's career description
    #[serde(default)]
    pub words: Vec<String>,
    /// Award tags the actor must hold
    #[serde(default)]
    pub awards: Vec<String>,
}
