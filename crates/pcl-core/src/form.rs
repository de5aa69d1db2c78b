//! Transport-neutral multipart bodies.
//!
//! Forms and drafts build a [`MultipartPayload`]; the HTTP client turns it
//! into a real multipart request, reading file parts from disk.

use std::path::{Path, PathBuf};

/// A file part: form field name plus the local path to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileField {
    pub name: String,
    pub path: PathBuf,
}

/// Ordered text fields and file parts of a multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FileField>,
}

impl MultipartPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field as-is.
    pub fn text(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Append the trimmed value, skipping missing or blank values.
    pub fn text_if_present(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.fields.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Append a list as a JSON-encoded string field.
    pub fn json_list(&mut self, name: &str, items: &[String]) -> &mut Self {
        let encoded = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
        self.fields.push((name.to_string(), encoded));
        self
    }

    pub fn file(&mut self, name: &str, path: impl AsRef<Path>) -> &mut Self {
        self.files.push(FileField {
            name: name.to_string(),
            path: path.as_ref().to_path_buf(),
        });
        self
    }

    /// First text value for `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn has_file(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_if_present_trims_and_skips_blank() {
        let mut payload = MultipartPayload::new();
        payload
            .text_if_present("gstin", Some("   "))
            .text_if_present("district", None)
            .text_if_present("state", Some("  Kerala "));
        assert_eq!(payload.fields, vec![("state".to_string(), "Kerala".to_string())]);
    }

    #[test]
    fn json_list_encodes_strings() {
        let mut payload = MultipartPayload::new();
        payload.json_list("features", &["Live \"labs\"".to_string(), "Mentor".to_string()]);
        assert_eq!(payload.field("features"), Some(r#"["Live \"labs\"","Mentor"]"#));
    }

    #[test]
    fn file_parts_are_tracked_separately() {
        let mut payload = MultipartPayload::new();
        payload.text("name", "Asha").file("resume", "/tmp/cv.pdf");
        assert!(payload.has_file("resume"));
        assert!(!payload.has_file("image"));
        assert_eq!(payload.fields.len(), 1);
    }
}
