//! Narrowing raw action records into typed actions.

use catalog::ActionRecord;
use queries::QuerySpec;
use recommend::RecRequest;

/// A fully typed action, ready to dispatch. The enum is closed, so the
/// dispatcher's match is exhaustive; anything the log contains beyond these
/// shapes never reaches it.
#[derive(Debug, Clone)]
pub enum Action {
    View {
        username: String,
        title: String,
    },
    Favorite {
        username: String,
        title: String,
    },
    Rate {
        username: String,
        title: String,
        /// 1-based season; 0 means the title is a movie
        season: u32,
        grade: f64,
    },
    Query(QuerySpec),
    Recommend(RecRequest),
}

impl Action {
    /// Narrow a raw record into a typed action.
    ///
    /// Unrecognized categories and subtypes, and records missing the fields
    /// their subtype requires, yield `None`; the dispatcher skips those
    /// silently, emitting no output record.
    pub fn from_record(record: &ActionRecord) -> Option<Action> {
        match record.action_type.as_str() {
            "command" => {
                let username = record.username.clone()?;
                let title = record.title.clone()?;
                match record.subtype.as_deref()? {
                    "view" => Some(Action::View { username, title }),
                    "favorite" => Some(Action::Favorite { username, title }),
                    "rating" => Some(Action::Rate {
                        username,
                        title,
                        season: record.season_number.unwrap_or(0),
                        grade: record.grade?,
                    }),
                    _ => None,
                }
            }
            "query" => QuerySpec::from_record(record).map(Action::Query),
            "recommendation" => RecRequest::from_record(record).map(Action::Recommend),
            _ => None,
        }
    }
}
