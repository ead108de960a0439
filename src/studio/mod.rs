// SPDX-License-Identifier: MPL-2.0
//! Studio view state: the prompt form, the generation lifecycle and the
//! gallery mirror.
//!
//! [`Studio`] never performs I/O. Every operation mutates the state and
//! returns the [`Effect`]s the caller must carry out (HTTP requests, delayed
//! timers). Results come back through [`Studio::generation_finished`],
//! [`Studio::gallery_loaded`], [`Studio::delete_finished`] and
//! [`Studio::timer_elapsed`].
//!
//! # Generation lifecycle
//!
//! ```text
//! Idle ──generate──▶ Submitting ──success──▶ Settling ──SETTLE_DELAY──▶ Done
//!                        │
//!                        └──failure──▶ Failed (alert)
//! ```
//!
//! `loading` stays true from `generate` until [`LOADING_CLEAR_DELAY`] after
//! the response, whatever the outcome. Each attempt gets a fresh
//! [`AttemptId`]; responses and timers tagged with another id are ignored.

pub mod progress;
pub mod settings;


pub use progress::Progress;
pub use settings::GenerationSettings;

use crate::api::{self, ApiBase, ApiError, GalleryEntry, GenerateRequest, HealthResponse};
use std::time::Duration;

/// Delay between the success response and the result being displayed.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Delay between any response and `loading` being cleared.
pub const LOADING_CLEAR_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Create,
    Gallery,
}

/// Identifies one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// Delayed events scheduled by the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// The settle delay after a success response elapsed.
    Settled(AttemptId),
    /// The delay before clearing `loading` elapsed.
    LoadingCleared(AttemptId),
}

/// Side effects requested by the studio.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `GET /gallery`, then [`Studio::gallery_loaded`].
    FetchGallery,
    /// `GET /health`, then [`Studio::health_checked`].
    CheckHealth,
    /// `POST /generate`, then [`Studio::generation_finished`].
    Submit {
        attempt: AttemptId,
        request: GenerateRequest,
    },
    /// `DELETE /delete/{filename}`, then [`Studio::delete_finished`].
    Delete(String),
    /// Deliver `timer` to [`Studio::timer_elapsed`] after `delay`.
    Schedule { delay: Duration, timer: Timer },
}

/// Where the current attempt is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Settling {
        image_url: String,
    },
    Done,
    Failed,
}

/// Blocking message shown after a failed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// i18n key of the message.
    pub key: &'static str,
    /// Backend-supplied detail, shown verbatim under the message.
    pub detail: Option<String>,
}

impl From<&ApiError> for Alert {
    fn from(err: &ApiError) -> Self {
        Self {
            key: err.i18n_key(),
            detail: err.detail().map(str::to_string),
        }
    }
}

/// Last known backend health.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online {
        model_loaded: bool,
        device: String,
    },
    Offline,
}

/// Root state of the studio view.
#[derive(Debug, Clone)]
pub struct Studio {
    base: ApiBase,
    tab: Tab,
    prompt: String,
    negative_prompt: String,
    settings: GenerationSettings,
    show_advanced: bool,
    loading: bool,
    progress: Progress,
    phase: Phase,
    attempt: Option<AttemptId>,
    next_attempt: u64,
    /// Resolved URL of the displayed image.
    displayed: Option<String>,
    /// Display to restore if the in-flight attempt fails.
    restore_on_failure: Option<String>,
    gallery: Vec<GalleryEntry>,
    alert: Option<Alert>,
    backend: BackendStatus,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(ApiBase::default(), GenerationSettings::default(), String::new())
    }
}

impl Studio {
    #[must_use]
    pub fn new(base: ApiBase, settings: GenerationSettings, negative_prompt: String) -> Self {
        Self {
            base,
            tab: Tab::default(),
            prompt: String::new(),
            negative_prompt,
            settings,
            show_advanced: false,
            loading: false,
            progress: Progress::default(),
            phase: Phase::default(),
            attempt: None,
            next_attempt: 0,
            displayed: None,
            restore_on_failure: None,
            gallery: Vec::new(),
            alert: None,
            backend: BackendStatus::default(),
        }
    }

    /// Effects to run when the view is first shown.
    #[must_use]
    pub fn mount(&self) -> Vec<Effect> {
        vec![Effect::FetchGallery, Effect::CheckHealth]
    }

    // ------------------------------------------------------------------
    // Form state
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_negative_prompt(&mut self, negative_prompt: impl Into<String>) {
        self.negative_prompt = negative_prompt.into();
    }

    pub fn set_steps(&mut self, steps: u32) {
        self.settings.set_steps(steps);
    }

    pub fn set_guidance(&mut self, guidance: f32) {
        self.settings.set_guidance(guidance);
    }

    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
    }

    /// Whether the generate trigger is enabled.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    /// Starts a generation attempt. No-op when the prompt is blank or an
    /// attempt is already in progress.
    pub fn generate(&mut self) -> Vec<Effect> {
        if !self.can_generate() {
            return Vec::new();
        }

        let attempt = AttemptId(self.next_attempt);
        self.next_attempt += 1;

        self.loading = true;
        self.attempt = Some(attempt);
        self.phase = Phase::Submitting;
        self.progress.reset();
        self.restore_on_failure = self.displayed.take();

        log::info!("submitting generation {attempt:?}");
        vec![Effect::Submit {
            attempt,
            request: self.settings.to_request(&self.prompt, &self.negative_prompt),
        }]
    }

    /// Applies the backend answer to a generation request.
    pub fn generation_finished(
        &mut self,
        attempt: AttemptId,
        result: Result<api::Generated, ApiError>,
    ) -> Vec<Effect> {
        if !self.is_current(attempt) || self.phase != Phase::Submitting {
            log::debug!("ignoring response of stale attempt {attempt:?}");
            return Vec::new();
        }

        match result {
            Ok(generated) => {
                log::info!("generation {attempt:?} produced {}", generated.image_url);
                self.progress.complete();
                self.restore_on_failure = None;
                self.phase = Phase::Settling {
                    image_url: generated.image_url,
                };
                vec![
                    Effect::Schedule {
                        delay: SETTLE_DELAY,
                        timer: Timer::Settled(attempt),
                    },
                    Effect::Schedule {
                        delay: LOADING_CLEAR_DELAY,
                        timer: Timer::LoadingCleared(attempt),
                    },
                ]
            }
            Err(err) => {
                log::warn!("generation {attempt:?} failed: {err}");
                self.alert = Some(Alert::from(&err));
                self.displayed = self.restore_on_failure.take();
                self.phase = Phase::Failed;
                vec![Effect::Schedule {
                    delay: LOADING_CLEAR_DELAY,
                    timer: Timer::LoadingCleared(attempt),
                }]
            }
        }
    }

    /// Advances the simulated progress. Only meaningful while
    /// [`Studio::is_ticking`].
    pub fn tick(&mut self) {
        if self.is_ticking() {
            self.progress.tick();
        }
    }

    /// Whether the progress simulation should be running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.loading && self.phase == Phase::Submitting
    }

    pub fn timer_elapsed(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::Settled(attempt) => {
                if !self.is_current(attempt) {
                    log::debug!("dropping stale settle timer {attempt:?}");
                    return Vec::new();
                }
                self.settle()
            }
            Timer::LoadingCleared(attempt) => {
                if !self.is_current(attempt) {
                    log::debug!("dropping stale clear timer {attempt:?}");
                    return Vec::new();
                }
                // The clear delay is longer than the settle delay, but never
                // drop a result if the timers arrive out of order.
                let effects = self.settle();
                self.loading = false;
                self.progress.reset();
                self.attempt = None;
                self.phase = Phase::Idle;
                effects
            }
        }
    }

    fn settle(&mut self) -> Vec<Effect> {
        let Phase::Settling { image_url } = std::mem::take(&mut self.phase) else {
            return Vec::new();
        };
        self.displayed = Some(self.base.resolve(&image_url));
        self.phase = Phase::Done;
        vec![Effect::FetchGallery]
    }

    fn is_current(&self, attempt: AttemptId) -> bool {
        self.attempt == Some(attempt)
    }

    // ------------------------------------------------------------------
    // Gallery
    // ------------------------------------------------------------------

    /// Replaces the gallery mirror. Failures keep the previous list.
    pub fn gallery_loaded(&mut self, result: Result<Vec<GalleryEntry>, ApiError>) {
        match result {
            Ok(entries) => self.gallery = entries,
            Err(err) => log::warn!("failed to fetch gallery: {err}"),
        }
    }

    /// Shows a gallery entry on the Create tab.
    ///
    /// While an attempt is submitting, the selection becomes the image
    /// restored if that attempt fails. Once the response is in, it is shown
    /// directly.
    pub fn view_entry(&mut self, filename: &str) {
        let Some(entry) = self.gallery.iter().find(|e| e.filename == filename) else {
            return;
        };
        let url = self.base.resolve(&entry.url);
        if self.phase == Phase::Submitting {
            self.restore_on_failure = Some(url);
        } else {
            self.displayed = Some(url);
        }
        self.tab = Tab::Create;
    }

    /// Requests deletion of `filename`.
    #[must_use]
    pub fn delete(&self, filename: &str) -> Vec<Effect> {
        vec![Effect::Delete(filename.to_string())]
    }

    /// Handles completion of a delete request, whatever its outcome.
    pub fn delete_finished(&mut self, filename: &str, result: Result<(), ApiError>) -> Vec<Effect> {
        if let Err(err) = result {
            log::warn!("failed to delete {filename}: {err}");
        }

        let shows = |url: &Option<String>| {
            url.as_deref().and_then(api::file_name_of) == Some(filename)
        };
        if shows(&self.displayed) {
            self.displayed = None;
        }
        if shows(&self.restore_on_failure) {
            self.restore_on_failure = None;
        }

        vec![Effect::FetchGallery]
    }

    // ------------------------------------------------------------------
    // Alert and health
    // ------------------------------------------------------------------

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    #[must_use]
    pub fn check_health(&mut self) -> Vec<Effect> {
        self.backend = BackendStatus::Unknown;
        vec![Effect::CheckHealth]
    }

    pub fn health_checked(&mut self, result: Result<HealthResponse, ApiError>) {
        self.backend = match result {
            Ok(health) => BackendStatus::Online {
                model_loaded: health.model_loaded,
                device: health.device,
            },
            Err(err) => {
                log::warn!("backend health check failed: {err}");
                BackendStatus::Offline
            }
        };
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn negative_prompt(&self) -> &str {
        &self.negative_prompt
    }

    #[must_use]
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    #[must_use]
    pub fn show_advanced(&self) -> bool {
        self.show_advanced
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Progress value in `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Resolved URL of the displayed image.
    #[must_use]
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    #[must_use]
    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn backend(&self) -> &BackendStatus {
        &self.backend
    }
}
