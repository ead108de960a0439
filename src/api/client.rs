// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the generation backend.

use super::base::ApiBase;
use super::error::ApiError;
use super::types::{
    ErrorBody, GalleryEntry, GalleryResponse, GenerateRequest, GenerateResponse, HealthResponse,
};
use std::time::Duration;

/// Default timeout for a single request. Generation on CPU can take minutes.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Short timeout for the health probe so an offline backend is reported quickly.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Cheap-to-clone handle to the backend.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: ApiBase,
}

/// Successful generation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Backend-relative path of the new image.
    pub image_url: String,
    pub filename: Option<String>,
}

impl Client {
    /// Builds a client for `base` with the given per-request timeout.
    pub fn new(base: ApiBase, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("GIXIO/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, base })
    }

    #[must_use]
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// `GET /gallery`
    pub async fn gallery(&self) -> Result<Vec<GalleryEntry>, ApiError> {
        let response = self.http.get(self.base.endpoint("/gallery")).send().await?;
        let response = ensure_success(response).await?;
        let body: GalleryResponse = response.json().await?;
        Ok(body.images)
    }

    /// `POST /generate`
    ///
    /// A 2xx answer that does not report success, or that omits the image
    /// path, is turned into [`ApiError::Rejected`].
    pub async fn generate(&self, request: &GenerateRequest) -> Result<Generated, ApiError> {
        let response = self
            .http
            .post(self.base.endpoint("/generate"))
            .json(request)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body: GenerateResponse = response.json().await?;

        match body {
            GenerateResponse {
                success: true,
                image_url: Some(image_url),
                filename,
            } => Ok(Generated {
                image_url,
                filename,
            }),
            _ => Err(ApiError::Rejected(None)),
        }
    }

    /// `DELETE /delete/{filename}`
    ///
    /// Only HTTP completion is reported; callers ignore the outcome beyond
    /// logging.
    pub async fn delete(&self, filename: &str) -> Result<(), ApiError> {
        let path = format!("/delete/{}", urlencoding::encode(filename));
        let response = self.http.delete(self.base.endpoint(&path)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let response = self
            .http
            .get(self.base.endpoint("/health"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Downloads raw image bytes from an already resolved URL.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Turns non-2xx responses into [`ApiError::Status`], keeping the backend's
/// `detail` message when the body carries one.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_detail);

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}
