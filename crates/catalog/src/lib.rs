//! # Catalog Crate
//!
//! Loads the JSON dataset and owns the in-memory catalog of shows, actors,
//! and users that the replay engine runs against.
//!
//! ## Main Components
//!
//! - **types**: domain entities and vocabularies (Show, Actor, User, Genre, ...)
//! - **input**: serde records for the dataset and the action log
//! - **catalog**: load-order entity store with resolved cross-references
//! - **error**: load-time error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Input};
//! use std::path::Path;
//!
//! let input = Input::from_path(Path::new("data/run.json"))?;
//! let catalog = Catalog::build(&input)?;
//!
//! for show in catalog.shows() {
//!     println!("{} ({})", show.title, show.rating_average());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod input;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use input::{ActionRecord, ActorRecord, FilterSet, Input, MovieRecord, SeasonRecord,
    SerialRecord, UserRecord};
pub use types::{
    // Type aliases
    ActorId,
    ShowId,
    UserId,
    // Core types
    Actor,
    Season,
    Show,
    ShowKind,
    User,
    // Enums
    Award,
    Genre,
    Subscription,
};
