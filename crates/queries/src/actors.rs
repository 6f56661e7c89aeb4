//! Actor queries: award/description filters and criterion ranking.

use crate::pipeline::{rank_by_key, rank_by_name};
use crate::spec::{ActorCriterion, ActorQuery};
use catalog::{Actor, Award, Catalog};

/// Run an actor query and return the ordered name list.
pub fn run(catalog: &Catalog, query: &ActorQuery) -> Vec<String> {
    let mut selected: Vec<&Actor> = catalog.actors().iter().collect();

    if !query.awards.is_empty() {
        let mut wanted = Vec::with_capacity(query.awards.len());
        for name in &query.awards {
            // An unrecognized award tag matches no actor
            let Some(award) = Award::from_name(name) else {
                return Vec::new();
            };
            wanted.push(award);
        }
        selected.retain(|actor| wanted.iter().all(|award| actor.awards.contains_key(award)));
    }

    if !query.words.is_empty() {
        selected.retain(|actor| {
            query
                .words
                .iter()
                .all(|word| description_contains_word(&actor.career_description, word))
        });
    }

    match query.criterion {
        None => selected
            .into_iter()
            .take(query.limit)
            .map(|actor| actor.name.clone())
            .collect(),
        Some(ActorCriterion::Average) => {
            let shows = catalog.shows();
            let entries: Vec<(String, f64)> = selected
                .into_iter()
                .map(|actor| (actor.name.clone(), actor.rating_average(shows)))
                .filter(|(_, avg)| *avg > 0.0)
                .collect();
            rank_by_key(entries, query.sort, query.limit)
        }
        Some(ActorCriterion::Awards) => {
            let entries: Vec<(String, f64)> = selected
                .into_iter()
                .map(|actor| (actor.name.clone(), actor.award_count() as f64))
                .filter(|(_, count)| *count > 0.0)
                .collect();
            rank_by_key(entries, query.sort, query.limit)
        }
        Some(ActorCriterion::FilterDescription) => {
            let names: Vec<String> = selected
                .into_iter()
                .map(|actor| actor.name.clone())
                .collect();
            rank_by_name(names, query.sort, query.limit)
        }
    }
}

/// Case-insensitive whole-word match: the description is tokenized on
/// non-alphanumeric boundaries, so "act" does not match "actor".
fn description_contains_word(description: &str, word: &str) -> bool {
    let needle = word.to_lowercase();
    description
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SortOrder;
    use catalog::{ActorRecord, Input};
    use std::collections::HashMap;

    fn actor(name: &str, description: &str, awards: &[(Award, u32)]) -> ActorRecord {
        ActorRecord {
            name: name.to_string(),
            career_description: description.to_string(),
            filmography: vec![],
            awards: awards.iter().copied().collect::<HashMap<_, _>>(),
        }
    }

    fn sample_catalog() -> Catalog {
        let input = Input {
            movies: vec![],
            serials: vec![],
            actors: vec![
                actor(
                    "Ann",
                    "An award-winning actor of stage and screen.",
                    &[(Award::BestDirector, 2)],
                ),
                actor(
                    "Bob",
                    "Stage presence, no awards yet.",
                    &[],
                ),
                actor(
                    "Cyd",
                    "Veteran of screen comedies.",
                    &[(Award::BestDirector, 1), (Award::PeopleChoiceAward, 1)],
                ),
            ],
            users: vec![],
            actions: vec![],
        };
        Catalog::build(&input).unwrap()
    }

    fn query(criterion: Option<ActorCriterion>) -> ActorQuery {
        ActorQuery {
            criterion,
            sort: SortOrder::Asc,
            limit: 10,
            awards: vec![],
            words: vec![],
        }
    }

    #[test]
    fn awards_criterion_ranks_by_total_count() {
        let catalog = sample_catalog();
        let names = run(&catalog, &query(Some(ActorCriterion::Awards)));
        // Bob has zero awards and is dropped by the positivity filter
        assert_eq!(names, vec!["Cyd", "Ann"]);
    }

    #[test]
    fn award_filter_requires_every_tag() {
        let catalog = sample_catalog();
        let names = run(
            &catalog,
            &ActorQuery {
                awards: vec![
                    "BEST_DIRECTOR".to_string(),
                    "PEOPLE_CHOICE_AWARD".to_string(),
                ],
                ..query(Some(ActorCriterion::Awards))
            },
        );
        assert_eq!(names, vec!["Cyd"]);
    }

    #[test]
    fn unknown_award_tag_matches_nothing() {
        let catalog = sample_catalog();
        let names = run(
            &catalog,
            &ActorQuery {
                awards: vec!["BEST_STUNT".to_string()],
                ..query(Some(ActorCriterion::Awards))
            },
        );
        assert!(names.is_empty());
    }

    #[test]
    fn word_filter_matches_whole_words_only() {
        let catalog = sample_catalog();
        let names = run(
            &catalog,
            &ActorQuery {
                words: vec!["stage".to_string()],
                ..query(Some(ActorCriterion::FilterDescription))
            },
        );
        assert_eq!(names, vec!["Ann", "Bob"]);

        // "screen" appears in "screen" (Ann, Cyd) but "scree" is not a word
        let none = run(
            &catalog,
            &ActorQuery {
                words: vec!["scree".to_string()],
                ..query(Some(ActorCriterion::FilterDescription))
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn description_criterion_sorts_names_by_direction() {
        let catalog = sample_catalog();
        let names = run(
            &catalog,
            &ActorQuery {
                sort: SortOrder::Desc,
                ..query(Some(ActorCriterion::FilterDescription))
            },
        );
        assert_eq!(names, vec!["Cyd", "Bob", "Ann"]);
    }

    #[test]
    fn word_match_is_case_insensitive_across_punctuation() {
        assert!(description_contains_word("An award-winning actor.", "AWARD"));
        assert!(!description_contains_word("An award-winning actor.", "win"));
    }
}
