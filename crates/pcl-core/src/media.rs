//! Resolution of stored image references to fetchable URLs.

use std::fmt;

/// Upload folder on the backend for each kind of catalog image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Courses,
    Internships,
    Projects,
    Payments,
}

impl MediaKind {
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Internships => "internships",
            Self::Projects => "projects",
            Self::Payments => "payments",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

/// Turn an `image_url` as stored by the backend into an absolute URL.
///
/// - empty or missing: `None` (caller shows a placeholder)
/// - `http://` / `https://`: unchanged
/// - `/uploads/...`: prefixed with `base_url`
/// - bare file name: `{base_url}/uploads/{kind}/{file}`
#[must_use]
pub fn resolve_media_url(base_url: &str, kind: MediaKind, image_url: Option<&str>) -> Option<String> {
    let url = image_url.map(str::trim).filter(|u| !u.is_empty())?;
    let base = base_url.trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else if url.starts_with("/uploads/") {
        Some(format!("{base}{url}"))
    } else {
        Some(format!("{base}/uploads/{}/{url}", kind.folder()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BASE: &str = "http://localhost:7000";

    #[rstest]
    #[case(None, None)]
    #[case(Some("  "), None)]
    #[case(Some("https://cdn.example.com/a.png"), Some("https://cdn.example.com/a.png"))]
    #[case(Some("/uploads/courses/a.png"), Some("http://localhost:7000/uploads/courses/a.png"))]
    #[case(Some("a.png"), Some("http://localhost:7000/uploads/projects/a.png"))]
    fn resolves_project_images(#[case] stored: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            resolve_media_url(BASE, MediaKind::Projects, stored).as_deref(),
            expected
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        assert_eq!(
            resolve_media_url("http://api.local/", MediaKind::Internships, Some("x.webp")).as_deref(),
            Some("http://api.local/uploads/internships/x.webp")
        );
    }
}
