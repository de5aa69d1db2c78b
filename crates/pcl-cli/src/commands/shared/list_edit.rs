use std::path::Path;

use anyhow::Context;
use pcl_core::text::{parse_lines, push_item, remove_item};

/// Apply list edits from the command line: replace from a file, then remove
/// the 1-based positions, then append.
///
/// Removals run from the highest position down so earlier positions keep
/// their meaning. Out-of-range positions are ignored with a warning.
pub fn edit_list(
    list: &mut Vec<String>,
    add: &[String],
    remove: &[usize],
    replace_from: Option<&Path>,
) -> anyhow::Result<()> {
    if let Some(path) = replace_from {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        *list = parse_lines(&text);
    }

    let mut positions = remove.to_vec();
    positions.sort_unstable_by(|a, b| b.cmp(a));
    positions.dedup();
    for position in positions {
        let removed = position
            .checked_sub(1)
            .and_then(|index| remove_item(list, index));
        if removed.is_none() {
            tracing::warn!(position, len = list.len(), "no list item at position");
        }
    }

    for item in add {
        push_item(list, item);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::io::Write;

    use super::edit_list;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn removes_by_position_then_appends() {
        let mut list = items(&["Live projects", "Certificate", "Placement"]);
        edit_list(&mut list, &items(&["Mentoring", "  "]), &[1, 3], None).unwrap();
        assert_eq!(list, items(&["Certificate", "Mentoring"]));
    }

    #[test]
    fn out_of_range_and_zero_positions_are_ignored() {
        let mut list = items(&["Rust"]);
        edit_list(&mut list, &[], &[0, 5], None).unwrap();
        assert_eq!(list, items(&["Rust"]));
    }

    #[test]
    fn file_replaces_existing_items() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "React\n\n  Node.js  \nPostgreSQL").unwrap();

        let mut list = items(&["Old"]);
        edit_list(&mut list, &items(&["Docker"]), &[], Some(file.path())).unwrap();
        assert_eq!(list, items(&["React", "Node.js", "PostgreSQL", "Docker"]));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut list = Vec::new();
        let err = edit_list(&mut list, &[], &[], Some(std::path::Path::new("/nonexistent/x.txt")))
            .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
