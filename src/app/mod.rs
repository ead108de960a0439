// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the studio, the backend
//! client and the screens.
//!
//! The `App` struct owns the [`Studio`] state machine and turns the effects
//! it requests into asynchronous tasks. Everything that needs a runtime
//! (network, timers, file dialogs, disk writes) lives here; the studio stays
//! pure.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ApiBase, ApiError, Client};
use crate::i18n::I18n;
use crate::studio::Studio;
use crate::ui::create;
use crate::ui::notifications;
use crate::ui::previews::Previews;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Environment variable holding the backend origin.
pub const ENV_API_URL: &str = "GIXIO_API_URL";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    studio: Studio,
    create: create::State,
    previews: Previews,
    /// Backend client, or the error that prevented building it.
    client: Result<Client, ApiError>,
    /// Abort handle of the in-flight generation request.
    generation: Option<task::Handle>,
    /// Theme resolved once at startup.
    theme: Theme,
    /// Persisted application state (last download directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tab", &self.studio.tab())
            .field("phase", self.studio.phase())
            .field("gallery_len", &self.studio.gallery().len())
            .finish()
    }
}

/// Builds the window settings.
///
/// Close requests are handled by the application so an in-flight
/// generation can be aborted before exiting.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the backend origin from the first candidate that parses.
///
/// Candidates are given highest priority first; `None` entries are skipped.
/// Returns the chosen origin and every rejected value.
pub fn resolve_api_base<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> (ApiBase, Vec<String>) {
    let mut rejected = Vec::new();
    for raw in candidates.into_iter().flatten() {
        match ApiBase::parse(raw) {
            Ok(base) => return (base, rejected),
            Err(err) => {
                log::warn!("ignoring backend URL {raw:?}: {err}");
                rejected.push(raw.to_string());
            }
        }
    }
    (ApiBase::default(), rejected)
}

impl App {
    /// Loads config and state, builds the client and kicks off the initial
    /// gallery and health requests.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.as_deref().map(Path::new),
            &config,
        );

        let env_url = std::env::var(ENV_API_URL)
            .ok()
            .filter(|value| !value.trim().is_empty());
        let (base, rejected_urls) = resolve_api_base([
            flags.api_url.as_deref(),
            env_url.as_deref(),
            config.backend.base_url.as_deref(),
        ]);
        log::info!("using backend at {}", base.origin());

        let client = Client::new(base.clone(), config.backend.request_timeout());
        if let Err(err) = &client {
            log::error!("failed to build HTTP client: {err}");
        }

        let studio = Studio::new(
            base,
            config.generation.settings(),
            config.generation.negative_prompt.clone().unwrap_or_default(),
        );

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            create: create::State::new(studio.prompt()),
            studio,
            previews: Previews::new(),
            client,
            generation: None,
            theme: config.general.theme_mode.theme(),
            app_state,
            notifications: notifications::Manager::new(),
        };

        // Show warnings for config/state loading issues
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        for url in rejected_urls {
            app.notifications.push(
                notifications::Notification::warning("notification-invalid-api-url")
                    .with_arg("url", url),
            );
        }

        let effects = app.studio.mount();
        let task = update::run_effects(&mut app.update_context(), effects);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_progress_subscription(self.studio.is_ticking()),
            subscription::create_notification_subscription(
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            studio: &mut self.studio,
            create: &mut self.create,
            previews: &mut self.previews,
            client: &self.client,
            generation: &mut self.generation,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let refresh_previews = update::changes_shown_images(&message);
        let mut ctx = self.update_context();
        let task = update::update(&mut ctx, message);
        if !refresh_previews {
            return task;
        }
        let previews = update::request_previews(&mut ctx);
        Task::batch([task, previews])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            studio: &self.studio,
            create: &self.create,
            previews: &self.previews,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_valid_candidate_wins() {
        let (base, rejected) =
            resolve_api_base([Some("http://cli:1"), Some("http://env:2"), None]);
        assert_eq!(base.origin(), "http://cli:1");
        assert!(rejected.is_empty());
    }

    #[test]
    fn invalid_candidates_fall_through_and_are_reported() {
        let (base, rejected) =
            resolve_api_base([Some("not a url"), None, Some("http://config:3")]);
        assert_eq!(base.origin(), "http://config:3");
        assert_eq!(rejected, vec!["not a url".to_string()]);
    }

    #[test]
    fn no_candidate_uses_default_origin() {
        let (base, rejected) = resolve_api_base([None, None, None]);
        assert_eq!(base, ApiBase::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn window_close_is_intercepted() {
        assert!(!window_settings().exit_on_close_request);
    }
}
