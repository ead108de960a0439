// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiError, GalleryEntry, Generated, HealthResponse};
use crate::studio::{AttemptId, Timer};
use crate::ui::{alert, create, gallery, header, notifications};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Create(create::Message),
    Gallery(gallery::Message),
    Alert(alert::Message),
    Notification(notifications::NotificationMessage),
    GalleryLoaded(Result<Vec<GalleryEntry>, ApiError>),
    Generated(AttemptId, Result<Generated, ApiError>),
    Deleted(String, Result<(), ApiError>),
    HealthChecked(Result<HealthResponse, ApiError>),
    TimerElapsed(Timer),
    /// Image bytes for a resolved URL arrived.
    PreviewLoaded(String, Result<Vec<u8>, ApiError>),
    /// Progress animation tick.
    Tick,
    /// Periodic tick for notification auto-dismiss.
    NotificationTick(Instant),
    /// Ctrl+Enter outside the prompt editor.
    GenerateShortcut,
    /// Result from the Save As dialog of a download.
    DownloadTarget {
        url: String,
        path: Option<PathBuf>,
    },
    /// Result of writing a downloaded image to disk.
    Downloaded {
        filename: String,
        result: Result<PathBuf, String>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend origin. Takes precedence over `GIXIO_API_URL` and
    /// the config file.
    pub api_url: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `GIXIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GIXIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
