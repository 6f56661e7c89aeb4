//! The dispatcher: drives the action log against the catalog.

use crate::action::Action;
use crate::commands;
use crate::messages;
use crate::sink::{ActionOutput, ResultSink};
use anyhow::{Context, Result};
use catalog::{ActionRecord, Catalog};
use tracing::{debug, instrument};

/// Consumes the action log once, in order, synchronously. Every handled
/// action sees the catalog as mutated by all earlier actions and yields
/// exactly one output record; records with an unrecognized category or
/// subtype are skipped without output.
///
/// The dispatcher borrows the catalog and the sink for the whole run; there
/// is no shared state besides them.
pub struct Dispatcher<'a, S: ResultSink> {
    catalog: &'a mut Catalog,
    sink: &'a mut S,
}

impl<'a, S: ResultSink> Dispatcher<'a, S> {
    pub fn new(catalog: &'a mut Catalog, sink: &'a mut S) -> Self {
        Self { catalog, sink }
    }

    /// Replay the whole log. The only error that can surface here is an
    /// I/O fault from the sink, which aborts the run.
    pub fn run(&mut self, records: &[ActionRecord]) -> Result<()> {
        for record in records {
            match Action::from_record(record) {
                Some(action) => self.execute(record.id, action)?,
                None => debug!(id = record.id, "skipping unrecognized action"),
            }
        }
        Ok(())
    }

    #[instrument(skip(self, action))]
    fn execute(&mut self, id: u32, action: Action) -> Result<()> {
        match action {
            Action::View { username, title } => {
                if let Some(message) = commands::view(self.catalog, &username, &title) {
                    self.emit(id, message)?;
                }
            }
            Action::Favorite { username, title } => {
                if let Some(message) = commands::favorite(self.catalog, &username, &title) {
                    self.emit(id, message)?;
                }
            }
            Action::Rate {
                username,
                title,
                season,
                grade,
            } => {
                if let Some(message) =
                    commands::rate(self.catalog, &username, &title, season, grade)
                {
                    self.emit(id, message)?;
                }
            }
            Action::Query(spec) => {
                let names = queries::run(self.catalog, &spec);
                self.emit(id, messages::query_result(&names))?;
            }
            Action::Recommend(request) => {
                let outcome = recommend::run(self.catalog, &request);
                self.emit(id, messages::recommendation(request.label(), &outcome))?;
            }
        }
        Ok(())
    }

    fn emit(&mut self, id: u32, message: String) -> Result<()> {
        self.sink
            .emit(ActionOutput { id, message })
            .with_context(|| format!("failed to emit result for action {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::VecSink;
    use catalog::{FilterSet, Genre, Input, MovieRecord, Subscription, UserRecord};
    use std::collections::HashMap;

    fn command(id: u32, subtype: &str, username: &str, title: &str) -> ActionRecord {
        ActionRecord {
            id,
            action_type: "command".to_string(),
            subtype: Some(subtype.to_string()),
            username: Some(username.to_string()),
            title: Some(title.to_string()),
            season_number: None,
            grade: None,
            object_type: None,
            criteria: None,
            sort_type: None,
            number: None,
            genre: None,
            filters: FilterSet::default(),
        }
    }

    fn sample_catalog() -> Catalog {
        let input = Input {
            movies: vec![MovieRecord {
                title: "A".to_string(),
                year: 2010,
                genres: vec![Genre::Drama],
                duration: 100,
            }],
            serials: vec![],
            actors: vec![],
            users: vec![UserRecord {
                username: "u1".to_string(),
                subscription_type: Subscription::Basic,
                favorite_movies: vec![],
                history: HashMap::new(),
            }],
            actions: vec![],
        };
        Catalog::build(&input).unwrap()
    }

    #[test]
    fn outputs_preserve_action_order() {
        let mut catalog = sample_catalog();
        let mut sink = VecSink::new();
        let records = vec![
            command(1, "view", "u1", "A"),
            command(2, "favorite", "u1", "A"),
        ];
        Dispatcher::new(&mut catalog, &mut sink)
            .run(&records)
            .unwrap();
        let ids: Vec<u32> = sink.outputs.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn unrecognized_records_produce_no_output() {
        let mut catalog = sample_catalog();
        let mut sink = VecSink::new();
        let records = vec![
            command(1, "teleport", "u1", "A"),
            command(2, "view", "u1", "A"),
        ];
        Dispatcher::new(&mut catalog, &mut sink)
            .run(&records)
            .unwrap();
        assert_eq!(sink.outputs.len(), 1);
        assert_eq!(sink.outputs[0].id, 2);
    }

    #[test]
    fn later_actions_observe_earlier_mutations() {
        let mut catalog = sample_catalog();
        let mut sink = VecSink::new();
        let records = vec![
            command(1, "favorite", "u1", "A"), // not seen yet
            command(2, "view", "u1", "A"),
            command(3, "favorite", "u1", "A"), // now succeeds
        ];
        Dispatcher::new(&mut catalog, &mut sink)
            .run(&records)
            .unwrap();
        assert_eq!(sink.outputs[0].message, "error -> A is not seen");
        assert_eq!(sink.outputs[2].message, "success -> A was added as favourite");
    }
}
