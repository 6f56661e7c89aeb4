//! Heuristics available to every subscription tier.

use crate::Recommendation;
use catalog::Catalog;
use tracing::instrument;

/// First show in catalog load order absent from the user's history.
#[instrument(skip(catalog))]
pub fn standard(catalog: &Catalog, username: &str) -> Recommendation {
    let Some(user_id) = catalog.user_by_name(username) else {
        return Recommendation::CannotBeApplied;
    };
    let user = catalog.user(user_id);
    catalog
        .shows()
        .iter()
        .enumerate()
        .find(|(id, _)| !user.has_seen(*id))
        .map(|(_, show)| Recommendation::Title(show.title.clone()))
        .unwrap_or(Recommendation::CannotBeApplied)
}

/// The unseen show with the highest rating average. Ties keep catalog load
/// order: only a strictly greater average replaces the current pick.
#[instrument(skip(catalog))]
pub fn best_unseen(catalog: &Catalog, username: &str) -> Recommendation {
    let Some(user_id) = catalog.user_by_name(username) else {
        return Recommendation::CannotBeApplied;
    };
    let user = catalog.user(user_id);

    let mut best: Option<(&str, f64)> = None;
    for (id, show) in catalog.shows().iter().enumerate() {
        if user.has_seen(id) {
            continue;
        }
        let average = show.rating_average();
        match best {
            Some((_, current)) if average <= current => {}
            _ => best = Some((&show.title, average)),
        }
    }

    best.map(|(title, _)| Recommendation::Title(title.to_string()))
        .unwrap_or(Recommendation::CannotBeApplied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_catalog;
    use catalog::Subscription;

    #[test]
    fn standard_picks_first_unseen_in_load_order() {
        let catalog = sample_catalog(
            &[("A", &[]), ("B", &[]), ("C", &[])],
            &[("u1", Subscription::Basic, &["A"])],
        );
        assert_eq!(
            standard(&catalog, "u1"),
            Recommendation::Title("B".to_string())
        );
    }

    #[test]
    fn standard_with_everything_seen_cannot_be_applied() {
        let catalog = sample_catalog(
            &[("A", &[])],
            &[("u1", Subscription::Basic, &["A"])],
        );
        assert_eq!(standard(&catalog, "u1"), Recommendation::CannotBeApplied);
    }

    #[test]
    fn unknown_user_cannot_be_applied() {
        let catalog = sample_catalog(&[("A", &[])], &[]);
        assert_eq!(standard(&catalog, "ghost"), Recommendation::CannotBeApplied);
        assert_eq!(best_unseen(&catalog, "ghost"), Recommendation::CannotBeApplied);
    }

    #[test]
    fn best_unseen_prefers_higher_average() {
        let mut catalog = sample_catalog(
            &[("A", &[]), ("B", &[]), ("C", &[])],
            &[("u1", Subscription::Basic, &[])],
        );
        rate(&mut catalog, "B", 5.0);
        rate(&mut catalog, "C", 3.0);
        assert_eq!(
            best_unseen(&catalog, "u1"),
            Recommendation::Title("B".to_string())
        );
    }

    #[test]
    fn best_unseen_tie_keeps_load_order() {
        // All averages equal (zero): the first unseen show wins
        let catalog = sample_catalog(
            &[("A", &[]), ("B", &[]), ("C", &[])],
            &[("u1", Subscription::Basic, &[])],
        );
        assert_eq!(
            best_unseen(&catalog, "u1"),
            Recommendation::Title("A".to_string())
        );
    }

    fn rate(catalog: &mut catalog::Catalog, title: &str, grade: f64) {
        let id = catalog.show_by_title(title).unwrap();
        if let catalog::ShowKind::Movie { grades, .. } = &mut catalog.show_mut(id).kind {
            grades.push(grade);
        }
    }
}
