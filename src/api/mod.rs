// SPDX-License-Identifier: MPL-2.0
//! Client side of the image generation backend.
//!
//! The backend exposes a small JSON API:
//!
//! - `GET /gallery` lists previously generated images
//! - `POST /generate` runs a text-to-image generation
//! - `DELETE /delete/{filename}` removes an image
//! - `GET /health` reports whether the model is loaded
//!
//! Image locations are returned as paths relative to the backend origin and
//! are resolved through [`ApiBase::resolve`].

mod base;
mod client;
mod error;
mod types;

pub use base::{file_name_of, ApiBase, DEFAULT_BASE_URL};
pub use client::{Client, Generated, DEFAULT_REQUEST_TIMEOUT};
pub use error::ApiError;
pub use types::{GalleryEntry, GalleryResponse, GenerateRequest, GenerateResponse, HealthResponse};
