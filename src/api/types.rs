// SPDX-License-Identifier: MPL-2.0
//! Wire types of the generation backend.

use serde::{Deserialize, Serialize};

/// JSON body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// A single generated image as listed by `GET /gallery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub filename: String,
    pub url: String,
    /// Modification time in unix seconds, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<f64>,
}

impl GalleryEntry {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
            created: None,
        }
    }
}

/// Response of `GET /gallery`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryResponse {
    #[serde(default)]
    pub images: Vec<GalleryEntry>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub device: String,
}

/// Error body emitted by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Extracts a readable detail message; structured validation errors are
    /// rendered as compact JSON.
    pub(crate) fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_uses_backend_field_names() {
        let request = GenerateRequest {
            prompt: "sunset".into(),
            negative_prompt: "blurry".into(),
            num_inference_steps: 30,
            guidance_scale: 7.5,
            width: 512,
            height: 512,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "prompt": "sunset",
                "negative_prompt": "blurry",
                "num_inference_steps": 30,
                "guidance_scale": 7.5,
                "width": 512,
                "height": 512
            })
        );
    }

    #[test]
    fn gallery_without_images_field_is_empty() {
        let parsed: GalleryResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.images.is_empty());
    }

    #[test]
    fn gallery_entry_accepts_created_timestamp() {
        let parsed: GalleryResponse = serde_json::from_str(
            r#"{"images":[{"filename":"a.png","url":"/outputs/a.png","created":1700000000.5}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.images.len(), 1);
        assert_eq!(parsed.images[0].filename, "a.png");
        assert_eq!(parsed.images[0].created, Some(1_700_000_000.5));
    }

    #[test]
    fn generate_response_defaults_to_failure() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
        assert!(parsed.image_url.is_none());
    }

    #[test]
    fn error_body_detail_variants() {
        let text: ErrorBody = serde_json::from_str(r#"{"detail":"Model not loaded"}"#).unwrap();
        assert_eq!(text.into_detail().as_deref(), Some("Model not loaded"));

        let structured: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","prompt"]}]}"#).unwrap();
        assert!(structured.into_detail().unwrap().contains("prompt"));

        let missing: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(missing.into_detail().is_none());
    }
}
