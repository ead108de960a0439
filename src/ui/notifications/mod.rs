// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback (downloads, settings and
//! state warnings).
//!
//! Generation failures use the blocking alert instead, see
//! [`crate::ui::alert`].
//!
//! - Success/info toasts disappear after 3s, warnings after 5s, errors stay
//!   until dismissed
//! - At most three toasts are visible, the rest are queued
//! - Toasts stack in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
