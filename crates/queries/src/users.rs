//! User queries: ranking by number of ratings given.

use crate::pipeline::rank_by_key;
use crate::spec::UserQuery;
use catalog::Catalog;

/// Rank users by how many ratings they have issued. Users who have rated
/// nothing are dropped before sorting.
pub fn run(catalog: &Catalog, query: &UserQuery) -> Vec<String> {
    let entries: Vec<(String, f64)> = catalog
        .users()
        .iter()
        .filter(|user| user.ratings_given > 0)
        .map(|user| (user.username.clone(), user.ratings_given as f64))
        .collect();
    rank_by_key(entries, query.sort, query.limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SortOrder;
    use catalog::{Input, Subscription, UserRecord};
    use std::collections::HashMap;

    fn sample_catalog(counts: &[(&str, u32)]) -> Catalog {
        let input = Input {
            movies: vec![],
            serials: vec![],
            actors: vec![],
            users: counts
                .iter()
                .map(|(name, _)| UserRecord {
                    username: name.to_string(),
                    subscription_type: Subscription::Basic,
                    favorite_movies: vec![],
                    history: HashMap::new(),
                })
                .collect(),
            actions: vec![],
        };
        let mut catalog = Catalog::build(&input).unwrap();
        for (name, ratings) in counts {
            let id = catalog.user_by_name(name).unwrap();
            catalog.user_mut(id).ratings_given = *ratings;
        }
        catalog
    }

    #[test]
    fn drops_users_without_ratings_and_sorts() {
        let catalog = sample_catalog(&[("u1", 2), ("u2", 0), ("u3", 5)]);
        let query = UserQuery {
            sort: SortOrder::Desc,
            limit: 10,
        };
        assert_eq!(run(&catalog, &query), vec!["u3", "u1"]);
    }

    #[test]
    fn equal_counts_order_by_username() {
        let catalog = sample_catalog(&[("zoe", 3), ("amy", 3)]);
        let query = UserQuery {
            sort: SortOrder::Desc,
            limit: 10,
        };
        assert_eq!(run(&catalog, &query), vec!["amy", "zoe"]);
    }
}
