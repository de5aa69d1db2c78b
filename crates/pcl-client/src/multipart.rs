//! Turn a [`MultipartPayload`] into a `reqwest` multipart form.

use std::path::Path;

use pcl_core::form::MultipartPayload;
use pcl_core::validation::{UploadKind, check_upload};
use reqwest::multipart::{Form, Part};

use crate::error::ClientError;

/// Field names whose file part is a resume rather than an image.
const RESUME_FIELDS: &[&str] = &["resume", "cv"];

/// Build the form, reading each file part from disk.
///
/// Every file is checked for type and size before it is read, so an
/// oversized or mistyped upload never leaves the machine.
pub async fn build_form(payload: &MultipartPayload) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for (name, value) in &payload.fields {
        form = form.text(name.clone(), value.clone());
    }
    for file in &payload.files {
        let kind = if RESUME_FIELDS.contains(&file.name.as_str()) {
            UploadKind::Resume
        } else {
            UploadKind::Image
        };
        let metadata = tokio::fs::metadata(&file.path)
            .await
            .map_err(|e| ClientError::Upload(format!("{}: {e}", file.path.display())))?;
        check_upload(kind, &file.path, metadata.len())?;

        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| ClientError::Upload(format!("{}: {e}", file.path.display())))?;
        let file_name = file
            .path
            .file_name()
            .map_or_else(|| file.name.clone(), |n| n.to_string_lossy().into_owned());
        tracing::debug!(field = %file.name, file = %file_name, bytes = bytes.len(), "attaching file");
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(&file.path))?;
        form = form.part(file.name.clone(), part);
    }
    Ok(form)
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}
