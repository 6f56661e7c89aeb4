//! Output message formatting.
//!
//! One function per message shape, so the exact wording lives in a single
//! place. Successes and domain errors travel as the same kind of record,
//! distinguished only by their `success ->` / `error ->` prefix.

use recommend::Recommendation;

pub fn viewed(title: &str, total_views: u32) -> String {
    format!("success -> {title} was viewed with total views of {total_views}")
}

pub fn not_seen(title: &str) -> String {
    format!("error -> {title} is not seen")
}

pub fn already_favorite(title: &str) -> String {
    format!("error -> {title} is already in favourite list")
}

pub fn added_favorite(title: &str) -> String {
    format!("success -> {title} was added as favourite")
}

pub fn already_rated(title: &str) -> String {
    format!("error -> {title} has been already rated")
}

pub fn rated(title: &str, grade: f64, username: &str) -> String {
    format!("success -> {title} was rated with {grade} by {username}")
}

pub fn query_result(names: &[String]) -> String {
    format!("Query result: {}", format_list(names))
}

pub fn recommendation(label: &str, outcome: &Recommendation) -> String {
    match outcome {
        Recommendation::Title(title) => format!("{label} result: {title}"),
        Recommendation::Titles(titles) => format!("{label} result: {}", format_list(titles)),
        Recommendation::CannotBeApplied => format!("{label} cannot be applied!"),
    }
}

fn format_list(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_formatting_matches_reported_shape() {
        assert_eq!(query_result(&[]), "Query result: []");
        assert_eq!(
            query_result(&["A".to_string(), "B".to_string()]),
            "Query result: [A, B]"
        );
    }

    #[test]
    fn recommendation_messages_cover_all_outcomes() {
        assert_eq!(
            recommendation("StandardRecommendation", &Recommendation::Title("A".to_string())),
            "StandardRecommendation result: A"
        );
        assert_eq!(
            recommendation(
                "SearchRecommendation",
                &Recommendation::Titles(vec!["A".to_string(), "B".to_string()])
            ),
            "SearchRecommendation result: [A, B]"
        );
        assert_eq!(
            recommendation("PopularRecommendation", &Recommendation::CannotBeApplied),
            "PopularRecommendation cannot be applied!"
        );
    }
}
