// SPDX-License-Identifier: MPL-2.0
//! Errors produced while talking to the generation backend.

use thiserror::Error;

/// Failure of a backend call.
///
/// The variants follow the error taxonomy of the studio: transport failures,
/// backend-reported failures (non-2xx status or `success: false`), and bodies
/// that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, DNS failure...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected JSON shape.
    #[error("could not decode backend response: {0}")]
    Decode(String),

    /// The backend answered 2xx but reported the operation as failed.
    #[error("backend rejected the request{}", detail_suffix(.0))]
    Rejected(Option<String>),

    /// The configured base origin is not a usable http(s) URL.
    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "alert-generate-unreachable",
            ApiError::Status { status, .. } if *status == 503 => "alert-generate-model-not-ready",
            ApiError::Status { .. } => "alert-generate-backend-error",
            ApiError::Decode(_) => "alert-generate-bad-response",
            ApiError::Rejected(_) => "alert-generate-rejected",
            ApiError::InvalidBaseUrl(_) => "alert-generate-invalid-url",
        }
    }

    /// Returns the backend-supplied detail message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } | ApiError::Rejected(detail) => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                detail: None,
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_detail() {
        let err = ApiError::Status {
            status: 500,
            detail: Some("CUDA out of memory".into()),
        };
        assert_eq!(err.to_string(), "backend returned HTTP 500: CUDA out of memory");
        assert_eq!(err.detail(), Some("CUDA out of memory"));
    }

    #[test]
    fn status_display_without_detail() {
        let err = ApiError::Status {
            status: 404,
            detail: None,
        };
        assert_eq!(err.to_string(), "backend returned HTTP 404");
    }

    #[test]
    fn model_not_ready_has_dedicated_key() {
        let err = ApiError::Status {
            status: 503,
            detail: None,
        };
        assert_eq!(err.i18n_key(), "alert-generate-model-not-ready");
    }

    #[test]
    fn i18n_keys_are_distinct_per_category() {
        let keys = [
            ApiError::Transport(String::new()).i18n_key(),
            ApiError::Status {
                status: 500,
                detail: None,
            }
            .i18n_key(),
            ApiError::Decode(String::new()).i18n_key(),
            ApiError::Rejected(None).i18n_key(),
            ApiError::InvalidBaseUrl(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
