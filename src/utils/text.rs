//! Text formatting for poll announcements.

/// Join labels with `" and "` between every consecutive pair.
///
/// Survey announcements read like speech, not like a list: two selections
/// become "Good and Great", three become "Good and Really good and
/// Fantastic". There is no comma variant.
pub fn join_with_and(labels: &[String]) -> String {
    labels.join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn joins_two_labels() {
        assert_eq!(join_with_and(&labels(&["Good", "Great"])), "Good and Great");
    }

    #[test]
    fn joins_three_labels_without_commas() {
        assert_eq!(
            join_with_and(&labels(&["Good", "Really good", "Fantastic"])),
            "Good and Really good and Fantastic"
        );
    }

    #[test]
    fn single_and_empty_inputs() {
        assert_eq!(join_with_and(&labels(&["Good"])), "Good");
        assert_eq!(join_with_and(&[]), "");
    }
}
