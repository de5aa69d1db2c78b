use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

mod rows;
pub mod table;

pub use rows::TableRow;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render records: full JSON for `json`/`raw`, curated columns for `table`.
pub fn render_list<T: Serialize + TableRow>(
    items: &[&T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Raw => render(&items, format),
        OutputFormat::Table => {
            if items.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let rows = items.iter().map(|item| item.cells()).collect::<Vec<_>>();
            Ok(table::render_entity_table(T::HEADERS, &rows, table_options()))
        }
    }
}

/// Print records, keeping at most `limit`.
pub fn output_list<T: Serialize + TableRow>(
    items: &[&T],
    limit: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let shown = &items[..items.len().min(limit)];
    println!("{}", render_list(shown, format)?);
    if shown.len() < items.len() {
        ui::note(&format!("showing {} of {} (use --limit)", shown.len(), items.len()));
    }
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{render, render_list, value_to_cell};
    use crate::cli::OutputFormat;
    use pcl_core::entities::Payment;

    #[derive(Serialize)]
    struct Submitted {
        slug: &'static str,
        reference: Option<&'static str>,
    }

    const RECEIPT: Submitted = Submitted { slug: "java-full-stack", reference: Some("PAY_1A2B") };

    #[test]
    fn json_and_raw_carry_the_same_document() {
        let pretty = render(&RECEIPT, OutputFormat::Json).unwrap();
        let raw = render(&RECEIPT, OutputFormat::Raw).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!raw.contains('\n'));
        let pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(pretty, raw);
        assert_eq!(raw["reference"], "PAY_1A2B");
    }

    #[test]
    fn single_response_renders_as_key_value_rows() {
        let out = render(&RECEIPT, OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.lines().any(|line| line.contains("slug") && line.contains("java-full-stack")));
    }

    #[test]
    fn list_table_uses_curated_columns() {
        let payment: Payment = serde_json::from_value(json!({
            "id": 3, "payment_id": "PAY_3", "student_name": "Asha Rao",
            "course_title": "Python", "payment_status": "completed", "amount": 15000.0
        }))
        .unwrap();
        let out = render_list(&[&payment], OutputFormat::Table).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.contains("payment_id"));
        assert!(header.contains("status"));
        assert!(out.contains("Asha Rao"));

        let json = render_list(&[&payment], OutputFormat::Raw).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""payment_status":"completed""#));
    }

    #[test]
    fn string_arrays_render_as_comma_list() {
        assert_eq!(value_to_cell(&json!(["Rust", "Go"])), "Rust, Go");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }
}
