//! Shared ranking stage of the query pipeline.
//!
//! Every criterion reduces to a (display name, numeric key) pair per
//! entity; this module sorts those pairs and truncates to the requested
//! count. The primary key honors the requested direction, ties always fall
//! back to the display name ascending.

use crate::spec::SortOrder;

/// Sort keyed entries and return at most `limit` display names.
pub(crate) fn rank_by_key(
    mut entries: Vec<(String, f64)>,
    sort: SortOrder,
    limit: usize,
) -> Vec<String> {
    entries.sort_by(|a, b| {
        let primary = match sort {
            SortOrder::Asc => a.1.total_cmp(&b.1),
            SortOrder::Desc => b.1.total_cmp(&a.1),
        };
        primary.then_with(|| a.0.cmp(&b.0))
    });
    entries.truncate(limit);
    entries.into_iter().map(|(name, _)| name).collect()
}

/// Sort names directly (for criteria whose key is the name itself).
pub(crate) fn rank_by_name(mut names: Vec<String>, sort: SortOrder, limit: usize) -> Vec<String> {
    names.sort_by(|a, b| match sort {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });
    names.truncate(limit);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(String, f64)> {
        vec![
            ("b".to_string(), 2.0),
            ("c".to_string(), 1.0),
            ("a".to_string(), 2.0),
        ]
    }

    #[test]
    fn ascending_sorts_by_key_then_name() {
        assert_eq!(rank_by_key(entries(), SortOrder::Asc, 10), vec!["c", "a", "b"]);
    }

    #[test]
    fn descending_keeps_name_tie_break_ascending() {
        // Only the key direction flips; equal keys stay name-ascending
        assert_eq!(rank_by_key(entries(), SortOrder::Desc, 10), vec!["a", "b", "c"]);
    }

    #[test]
    fn truncates_to_limit() {
        assert_eq!(rank_by_key(entries(), SortOrder::Asc, 1), vec!["c"]);
        assert!(rank_by_key(vec![], SortOrder::Asc, 5).is_empty());
    }
}
