//! # Queries Crate
//!
//! The generic filter → sort → limit pipeline over the catalog.
//!
//! A query names an entity kind (movies, serials, users, actors), optional
//! filters, a ranking criterion, a direction, and a result limit. Every
//! criterion also imposes a positivity filter (entities whose key is zero
//! are dropped before sorting), and every comparator breaks ties by the
//! entity's display name ascending, regardless of direction.
//!
//! ## Example Usage
//!
//! ```ignore
//! use queries::{QuerySpec, run};
//!
//! if let Some(spec) = QuerySpec::from_record(&record) {
//!     let names = run(&catalog, &spec);
//!     println!("Query result: [{}]", names.join(", "));
//! }
//! ```

pub mod actors;
pub mod pipeline;
pub mod shows;
pub mod spec;
pub mod users;

// Re-export main types
pub use spec::{ActorCriterion, ActorQuery, QuerySpec, ShowCriterion, ShowQuery, SortOrder,
    UserQuery};

use catalog::Catalog;
use tracing::debug;

/// Run any query against the catalog, returning the ordered display names.
pub fn run(catalog: &Catalog, spec: &QuerySpec) -> Vec<String> {
    let names = match spec {
        QuerySpec::Shows(q) => shows::run(catalog, q),
        QuerySpec::Users(q) => users::run(catalog, q),
        QuerySpec::Actors(q) => actors::run(catalog, q),
    };
    debug!(results = names.len(), "query executed");
    names
}
