// SPDX-License-Identifier: MPL-2.0
//! Backend base origin and relative URL resolution.

use super::error::ApiError;
use std::fmt;

/// Default backend origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Validated base origin of the image generation backend.
///
/// The backend returns image locations as relative paths (`/outputs/x.png`);
/// the client turns them into fetchable URLs by prefixing this origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    origin: String,
}

impl ApiBase {
    /// Parses and normalizes a base origin.
    ///
    /// Only `http` and `https` origins are accepted. A trailing slash is
    /// removed so that joining never produces `//`.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        let url = reqwest::Url::parse(trimmed)
            .map_err(|_| ApiError::InvalidBaseUrl(trimmed.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
        }

        Ok(Self {
            origin: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the normalized origin (no trailing slash).
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Builds the URL of an API endpoint such as `/gallery`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        self.resolve(path)
    }

    /// Resolves a backend-provided image path against the origin.
    ///
    /// Absolute `http(s)://` URLs are returned unchanged.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.origin, path.trim_start_matches('/'))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            origin: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}

/// Returns the last path segment of a URL, used as a file name.
///
/// Query strings and fragments are ignored. Returns `None` when the URL ends
/// with a slash or has no path.
#[must_use]
pub fn file_name_of(url: &str) -> Option<&str> {
    let without_suffix = url.split(['?', '#']).next().unwrap_or(url);
    let without_scheme = without_suffix
        .split_once("://")
        .map_or(without_suffix, |(_, rest)| rest);
    let (_, path) = without_scheme.split_once('/')?;
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefixes_origin() {
        let base = ApiBase::parse("http://host").unwrap();
        assert_eq!(base.resolve("/images/x.png"), "http://host/images/x.png");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let base = ApiBase::parse("http://host:8000/").unwrap();
        assert_eq!(base.origin(), "http://host:8000");
        assert_eq!(
            base.resolve("/outputs/a.png"),
            "http://host:8000/outputs/a.png"
        );
        assert_eq!(base.resolve("outputs/a.png"), "http://host:8000/outputs/a.png");
    }

    #[test]
    fn absolute_urls_are_kept() {
        let base = ApiBase::default();
        assert_eq!(
            base.resolve("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn rejects_non_http_origins() {
        assert!(ApiBase::parse("ftp://host").is_err());
        assert!(ApiBase::parse("not a url").is_err());
        assert!(ApiBase::parse("").is_err());
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiBase::default().origin(), DEFAULT_BASE_URL);
        assert_eq!(
            ApiBase::default().endpoint("/gallery"),
            "http://localhost:8000/gallery"
        );
    }

    #[test]
    fn file_name_of_extracts_last_segment() {
        assert_eq!(file_name_of("http://host/outputs/a.png"), Some("a.png"));
        assert_eq!(file_name_of("http://host/outputs/a.png?v=2"), Some("a.png"));
        assert_eq!(file_name_of("/outputs/b.png"), Some("b.png"));
        assert_eq!(file_name_of("http://host/outputs/"), None);
        assert_eq!(file_name_of("http://host"), None);
    }
}
