//! Typed query specifications, narrowed from raw action records.

use catalog::ActionRecord;

/// Requested sort direction for the primary criterion. Ties are always
/// broken by display name ascending, whatever the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(s: &str) -> Option<SortOrder> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Ranking criterion for show queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCriterion {
    Ratings,
    Favorite,
    Longest,
    MostViewed,
}

impl ShowCriterion {
    fn parse(s: &str) -> Option<ShowCriterion> {
        match s {
            "ratings" => Some(ShowCriterion::Ratings),
            "favorite" => Some(ShowCriterion::Favorite),
            "longest" => Some(ShowCriterion::Longest),
            "most_viewed" => Some(ShowCriterion::MostViewed),
            _ => None,
        }
    }
}

/// Ranking criterion for actor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorCriterion {
    Average,
    Awards,
    FilterDescription,
}

impl ActorCriterion {
    fn parse(s: &str) -> Option<ActorCriterion> {
        match s {
            "average" => Some(ActorCriterion::Average),
            "awards" => Some(ActorCriterion::Awards),
            "filter_description" => Some(ActorCriterion::FilterDescription),
            _ => None,
        }
    }
}

/// A query over the show list, restricted to one kind.
#[derive(Debug, Clone)]
pub struct ShowQuery {
    /// true selects movies, false selects serials
    pub movies: bool,
    /// No criterion means load order, no positivity filter
    pub criterion: Option<ShowCriterion>,
    pub sort: SortOrder,
    pub limit: usize,
    pub year: Option<u16>,
    pub genre: Option<String>,
}

/// A query over users, ranked by ratings given.
#[derive(Debug, Clone)]
pub struct UserQuery {
    pub sort: SortOrder,
    pub limit: usize,
}

/// A query over actors.
#[derive(Debug, Clone)]
pub struct ActorQuery {
    pub criterion: Option<ActorCriterion>,
    pub sort: SortOrder,
    pub limit: usize,
    /// Award tags (dataset names) the actor must hold
    pub awards: Vec<String>,
    /// Whole words that must all appear in the career description
    pub words: Vec<String>,
}

/// A fully typed query, ready to run against the catalog.
#[derive(Debug, Clone)]
pub enum QuerySpec {
    Shows(ShowQuery),
    Users(UserQuery),
    Actors(ActorQuery),
}

impl QuerySpec {
    /// Narrow a raw action record into a query.
    ///
    /// Returns `None` for unrecognized object types, missing sort/limit
    /// fields, or a sort direction outside {asc, desc}; the dispatcher
    /// skips such records without emitting a result.
    pub fn from_record(record: &ActionRecord) -> Option<QuerySpec> {
        let sort = SortOrder::parse(record.sort_type.as_deref()?)?;
        let limit = record.number?;
        match record.object_type.as_deref()? {
            kind @ ("movies" | "shows") => Some(QuerySpec::Shows(ShowQuery {
                movies: kind == "movies",
                criterion: record.criteria.as_deref().and_then(ShowCriterion::parse),
                sort,
                limit,
                year: record.filters.year,
                genre: record.filters.genre.clone(),
            })),
            "users" => Some(QuerySpec::Users(UserQuery { sort, limit })),
            "actors" => Some(QuerySpec::Actors(ActorQuery {
                criterion: record.criteria.as_deref().and_then(ActorCriterion::parse),
                sort,
                limit,
                awards: record.filters.awards.clone(),
                words: record.filters.words.clone(),
            })),
            _ => None,
        }
    }
}
