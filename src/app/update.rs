// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen messages are applied to the [`Studio`], and the effects it returns
//! are turned into iced tasks by [`run_effects`].

use super::persisted_state::AppState;
use super::Message;
use crate::api::{file_name_of, ApiError, Client};
use crate::studio::{Effect, Studio, Tab};
use crate::ui::create::{self, Event as CreateEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::previews::Previews;
use crate::ui::{alert, gallery, header};
use iced::{task, Task};
use std::path::PathBuf;

/// File name suggested when a URL has no usable last segment.
const FALLBACK_FILE_NAME: &str = "image.png";

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub studio: &'a mut Studio,
    pub create: &'a mut create::State,
    pub previews: &'a mut Previews,
    pub client: &'a Result<Client, ApiError>,
    pub generation: &'a mut Option<task::Handle>,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    // The alert is modal: screen input waits until it is dismissed
    if ctx.studio.alert().is_some()
        && matches!(
            message,
            Message::Header(_) | Message::Create(_) | Message::Gallery(_) | Message::GenerateShortcut
        )
    {
        return Task::none();
    }

    match message {
        Message::Header(message) => handle_header_message(ctx, message),
        Message::Create(message) => handle_create_message(ctx, message),
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Alert(alert::Message::Dismiss) => {
            ctx.studio.dismiss_alert();
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::GalleryLoaded(result) => {
            ctx.studio.gallery_loaded(result);
            prune_previews(ctx);
            Task::none()
        }
        Message::Generated(attempt, result) => {
            *ctx.generation = None;
            let effects = ctx.studio.generation_finished(attempt, result);
            run_effects(ctx, effects)
        }
        Message::Deleted(filename, result) => {
            let effects = ctx.studio.delete_finished(&filename, result);
            run_effects(ctx, effects)
        }
        Message::HealthChecked(result) => {
            ctx.studio.health_checked(result);
            Task::none()
        }
        Message::TimerElapsed(timer) => {
            let effects = ctx.studio.timer_elapsed(timer);
            run_effects(ctx, effects)
        }
        Message::PreviewLoaded(url, result) => {
            ctx.previews.loaded(&url, result);
            Task::none()
        }
        Message::Tick => {
            ctx.studio.tick();
            Task::none()
        }
        Message::NotificationTick(now) => {
            ctx.notifications.tick(now);
            Task::none()
        }
        Message::GenerateShortcut => {
            if ctx.studio.tab() == Tab::Create {
                let effects = ctx.studio.generate();
                run_effects(ctx, effects)
            } else {
                Task::none()
            }
        }
        Message::DownloadTarget { url, path } => match path {
            Some(path) => handle_download_target(ctx, url, path),
            None => Task::none(),
        },
        Message::Downloaded { filename, result } => {
            handle_downloaded(ctx, &filename, result);
            Task::none()
        }
        Message::WindowCloseRequested(_id) => {
            if let Some(handle) = ctx.generation.take() {
                log::info!("aborting in-flight generation on exit");
                handle.abort();
            }
            iced::exit()
        }
    }
}

/// Turns studio effects into tasks.
pub fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| run_effect(ctx, effect))
        .collect();
    Task::batch(tasks)
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    let client = match ctx.client {
        Ok(client) => client.clone(),
        Err(err) => return fail_effect(effect, err.clone()),
    };

    match effect {
        Effect::FetchGallery => Task::perform(
            async move { client.gallery().await },
            Message::GalleryLoaded,
        ),
        Effect::CheckHealth => Task::perform(
            async move { client.health().await },
            Message::HealthChecked,
        ),
        Effect::Submit { attempt, request } => {
            let (task, handle) = Task::perform(
                async move { client.generate(&request).await },
                move |result| Message::Generated(attempt, result),
            )
            .abortable();
            *ctx.generation = Some(handle);
            task
        }
        Effect::Delete(filename) => {
            let name = filename.clone();
            Task::perform(
                async move { client.delete(&name).await },
                move |result| Message::Deleted(filename.clone(), result),
            )
        }
        Effect::Schedule { delay, timer } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::TimerElapsed(timer),
        ),
    }
}

/// Completes a network effect immediately with `err` when no client exists.
fn fail_effect(effect: Effect, err: ApiError) -> Task<Message> {
    match effect {
        Effect::FetchGallery => Task::done(Message::GalleryLoaded(Err(err))),
        Effect::CheckHealth => Task::done(Message::HealthChecked(Err(err))),
        Effect::Submit { attempt, .. } => Task::done(Message::Generated(attempt, Err(err))),
        Effect::Delete(filename) => Task::done(Message::Deleted(filename, Err(err))),
        Effect::Schedule { delay, timer } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::TimerElapsed(timer),
        ),
    }
}

fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match message {
        header::Message::SelectTab(tab) => {
            ctx.studio.select_tab(tab);
            Task::none()
        }
        header::Message::RecheckBackend => {
            let effects = ctx.studio.check_health();
            run_effects(ctx, effects)
        }
    }
}

fn handle_create_message(ctx: &mut UpdateContext<'_>, message: create::Message) -> Task<Message> {
    match create::update(ctx.create, message) {
        CreateEvent::None => Task::none(),
        CreateEvent::PromptChanged(prompt) => {
            ctx.studio.set_prompt(prompt);
            Task::none()
        }
        CreateEvent::NegativePromptChanged(value) => {
            ctx.studio.set_negative_prompt(value);
            Task::none()
        }
        CreateEvent::StepsChanged(steps) => {
            ctx.studio.set_steps(steps);
            Task::none()
        }
        CreateEvent::GuidanceChanged(guidance) => {
            ctx.studio.set_guidance(guidance);
            Task::none()
        }
        CreateEvent::ToggleAdvanced => {
            ctx.studio.toggle_advanced();
            Task::none()
        }
        CreateEvent::Generate => {
            let effects = ctx.studio.generate();
            run_effects(ctx, effects)
        }
        CreateEvent::Download => match ctx.studio.displayed() {
            Some(url) => start_download(url.to_string(), ctx.app_state.last_download_directory.clone()),
            None => Task::none(),
        },
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::View(filename) => {
            ctx.studio.view_entry(&filename);
            Task::none()
        }
        gallery::Message::Download(url) => {
            start_download(url, ctx.app_state.last_download_directory.clone())
        }
        gallery::Message::Delete(filename) => {
            let effects = ctx.studio.delete(&filename);
            run_effects(ctx, effects)
        }
        gallery::Message::StartCreating => {
            ctx.studio.select_tab(Tab::Create);
            Task::none()
        }
        gallery::Message::Refresh => run_effects(ctx, vec![Effect::FetchGallery]),
    }
}

/// Opens the Save As dialog for a resolved image URL.
fn start_download(url: String, last_directory: Option<PathBuf>) -> Task<Message> {
    let file_name = file_name_of(&url).unwrap_or(FALLBACK_FILE_NAME).to_string();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&file_name);

            // Use last download directory if available
            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::DownloadTarget {
            url: url.clone(),
            path,
        },
    )
}

/// Fetches the image and writes it to the path chosen by the user.
fn handle_download_target(ctx: &mut UpdateContext<'_>, url: String, path: PathBuf) -> Task<Message> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .or_else(|| file_name_of(&url))
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string();

    let client = match ctx.client {
        Ok(client) => client.clone(),
        Err(err) => {
            return Task::done(Message::Downloaded {
                filename,
                result: Err(err.to_string()),
            })
        }
    };

    Task::perform(
        async move {
            let bytes = client.fetch_image(&url).await.map_err(|e| e.to_string())?;
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|e| e.to_string())?;
            Ok::<PathBuf, String>(path)
        },
        move |result| Message::Downloaded {
            filename: filename.clone(),
            result,
        },
    )
}

fn handle_downloaded(ctx: &mut UpdateContext<'_>, filename: &str, result: Result<PathBuf, String>) {
    match result {
        Ok(path) => {
            log::info!("saved {}", path.display());
            ctx.notifications.push(
                Notification::success("notification-download-success").with_arg("filename", filename),
            );

            // Remember the download directory for next time
            ctx.app_state.set_last_download_directory_from_file(&path);
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications.push(Notification::warning(key));
            }
        }
        Err(err) => {
            log::warn!("download of {filename} failed: {err}");
            ctx.notifications.push(
                Notification::error("notification-download-error")
                    .with_arg("filename", filename)
                    .with_detail(err),
            );
        }
    }
}

/// URLs whose previews are worth keeping: the gallery plus the display.
fn wanted_urls(studio: &Studio) -> Vec<String> {
    let base = studio.base();
    studio
        .gallery()
        .iter()
        .map(|entry| base.resolve(&entry.url))
        .chain(studio.displayed().map(str::to_string))
        .collect()
}

/// Drops previews of entries that left the gallery.
fn prune_previews(ctx: &mut UpdateContext<'_>) {
    let wanted = wanted_urls(ctx.studio);
    ctx.previews.retain(wanted.iter().map(String::as_str));
}

/// Whether handling `message` can change the gallery or the displayed image.
pub fn changes_shown_images(message: &Message) -> bool {
    matches!(
        message,
        Message::GalleryLoaded(_)
            | Message::Generated(..)
            | Message::TimerElapsed(_)
            | Message::Deleted(..)
            | Message::Gallery(_)
    )
}

/// Starts fetching every wanted image that has no preview yet.
pub fn request_previews(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let wanted = wanted_urls(ctx.studio);
    let missing = ctx.previews.request(wanted.iter().map(String::as_str));
    if missing.is_empty() {
        return Task::none();
    }

    let tasks: Vec<Task<Message>> = missing
        .into_iter()
        .map(|url| match ctx.client {
            Ok(client) => {
                let client = client.clone();
                let target = url.clone();
                Task::perform(
                    async move { client.fetch_image(&target).await },
                    move |result| Message::PreviewLoaded(url.clone(), result),
                )
            }
            Err(err) => Task::done(Message::PreviewLoaded(url, Err(err.clone()))),
        })
        .collect();
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiBase, GalleryEntry};
    use crate::studio::GenerationSettings;

    #[test]
    fn timer_ticks_do_not_touch_previews() {
        assert!(!changes_shown_images(&Message::Tick));
        assert!(!changes_shown_images(&Message::NotificationTick(
            std::time::Instant::now()
        )));
        assert!(!changes_shown_images(&Message::GenerateShortcut));
        assert!(changes_shown_images(&Message::GalleryLoaded(Ok(Vec::new()))));
        assert!(changes_shown_images(&Message::Gallery(gallery::Message::Refresh)));
    }

    #[test]
    fn wanted_urls_cover_gallery_and_display() {
        let base = ApiBase::parse("http://host").expect("valid base");
        let mut studio = Studio::new(base, GenerationSettings::default(), String::new());
        studio.gallery_loaded(Ok(vec![
            GalleryEntry::new("a.png", "/images/a.png"),
            GalleryEntry::new("b.png", "/images/b.png"),
        ]));
        studio.view_entry("b.png");

        assert_eq!(
            wanted_urls(&studio),
            vec![
                "http://host/images/a.png".to_string(),
                "http://host/images/b.png".to_string(),
                "http://host/images/b.png".to_string(),
            ]
        );
    }
}
