//! Small string helpers shared by filters, forms, and tables.

/// Case-insensitive substring test over an optional field.
///
/// An empty `term` matches everything, including a missing field. A missing
/// field never matches a non-empty term.
#[must_use]
pub fn contains_ci(field: Option<&str>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    field.is_some_and(|value| value.to_lowercase().contains(&term.to_lowercase()))
}

/// True when any of `fields` contains `term` (see [`contains_ci`]).
#[must_use]
pub fn any_contains_ci(fields: &[Option<&str>], term: &str) -> bool {
    term.is_empty() || fields.iter().any(|field| contains_ci(*field, term))
}

/// `None` for missing or whitespace-only text, the trimmed value otherwise.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Label for a project enrollment's `team_size` value.
#[must_use]
pub fn team_size_label(team_size: Option<&str>) -> String {
    match non_blank(team_size) {
        None => "Not specified".to_string(),
        Some("1") => "Individual".to_string(),
        Some("5+") => "5+ members".to_string(),
        Some(n) => format!("Team of {n}"),
    }
}

// ---------------------------------------------------------------------------
// List fields (features, skills, perks, technologies, ...)
// ---------------------------------------------------------------------------

/// Push the trimmed `item` unless it is blank. Returns whether it was added.
pub fn push_item(list: &mut Vec<String>, item: &str) -> bool {
    let item = item.trim();
    if item.is_empty() {
        return false;
    }
    list.push(item.to_string());
    true
}

/// Remove the item at `index`, ignoring out-of-range indices.
pub fn remove_item(list: &mut Vec<String>, index: usize) -> Option<String> {
    (index < list.len()).then(|| list.remove(index))
}

/// Split newline-separated text into trimmed, non-empty items.
#[must_use]
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Web Development"), "web", true)]
    #[case(Some("Web Development"), "DEVELOP", true)]
    #[case(Some("Web Development"), "data", false)]
    #[case(None, "web", false)]
    #[case(None, "", true)]
    #[case(Some(""), "", true)]
    fn contains_ci_cases(#[case] field: Option<&str>, #[case] term: &str, #[case] expected: bool) {
        assert_eq!(contains_ci(field, term), expected);
    }

    #[rstest]
    #[case(Some("1"), "Individual")]
    #[case(Some("5+"), "5+ members")]
    #[case(Some("3"), "Team of 3")]
    #[case(None, "Not specified")]
    #[case(Some("  "), "Not specified")]
    fn team_size_labels(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(team_size_label(raw), expected);
    }

    #[test]
    fn push_item_trims_and_skips_blank() {
        let mut list = vec!["Live projects".to_string()];
        assert!(push_item(&mut list, "  Certificate  "));
        assert!(!push_item(&mut list, "   "));
        assert_eq!(list, vec!["Live projects", "Certificate"]);
    }

    #[test]
    fn remove_item_out_of_range_is_noop() {
        let mut list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(remove_item(&mut list, 5), None);
        assert_eq!(remove_item(&mut list, 0).as_deref(), Some("a"));
        assert_eq!(list, vec!["b"]);
    }

    #[test]
    fn parse_lines_drops_blank_lines() {
        assert_eq!(
            parse_lines("Rust\n\n  Tokio \n"),
            vec!["Rust".to_string(), "Tokio".to_string()]
        );
    }
}
