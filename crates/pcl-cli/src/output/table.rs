//! Aligned plain-text tables for `--format table`.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render `rows` under `headers`, shrinking the widest columns to fit
/// `max_width` and right-aligning numeric cells.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(display_width(header_line.trim_end()));

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let clipped = clip(cell, *width);
                let padded = pad(&clipped, *width, looks_numeric(&clipped));
                if options.color {
                    colorize_status(&padded, &clipped)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_width(headers[*index]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn clip(value: &str, width: usize) -> String {
    let value = value.replace(['\n', '\r'], " ");
    if display_width(&value) <= width {
        return value;
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.' | ','))
}

/// Color status words: settled green, waiting yellow, refused red.
fn colorize_status(padded: &str, value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "completed" | "approved" | "true" | "active" => "32",
        "pending" => "33",
        "failed" | "rejected" | "false" | "inactive" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(value, &format!("\u{1b}[{code}m{value}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_and_numbers_right_align() {
        let rows = vec![
            vec!["1".to_string(), "Python".to_string()],
            vec!["120".to_string(), "Power BI".to_string()],
        ];
        let table = render_entity_table(&["id", "title"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id   title");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "  1  Python");
        assert_eq!(lines[3], "120  Power BI");
    }

    #[test]
    fn wide_columns_shrink_with_ellipsis() {
        let rows = vec![vec![
            "7".to_string(),
            "A very long course title that will not fit".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(24),
            color: false,
        };
        let table = render_entity_table(&["id", "title"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert!(row.ends_with('…'));
        assert!(display_width(row) <= 24);
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_entity_table(&["a", "b"], &[vec!["x".to_string()]], PLAIN);
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn status_words_are_colored() {
        assert_eq!(colorize_status("pending  ", "pending"), "\u{1b}[33mpending\u{1b}[0m  ");
        assert_eq!(colorize_status("Python", "Python"), "Python");
    }
}
