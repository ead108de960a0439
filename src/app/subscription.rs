// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::studio::progress::TICK_INTERVAL;
use iced::keyboard::{self, key, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Refresh rate of the notification auto-dismiss check.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes window close requests and the global generate shortcut.
///
/// Ctrl+Enter typed inside the prompt editor is captured by the editor's own
/// key binding; this only sees the shortcut when no widget handled it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Enter),
            modifiers,
            ..
        }) if status == event::Status::Ignored
            && (modifiers.control() || modifiers.command()) =>
        {
            Some(Message::GenerateShortcut)
        }
        _ => None,
    })
}

/// Drives the simulated progress. The subscription only exists while a
/// request is outstanding, so dropping it stops the ticks.
pub fn create_progress_subscription(is_ticking: bool) -> Subscription<Message> {
    if is_ticking {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::NotificationTick)
    } else {
        Subscription::none()
    }
}
