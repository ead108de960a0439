// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Screens
//!
//! - [`header`] - Logo, tab switcher and backend health badge
//! - [`create`] - Prompt form and result panel
//! - [`gallery`] - Grid of previously generated images
//! - [`alert`] - Blocking dialog for generation failures
//!
//! # Shared Infrastructure
//!
//! - [`previews`] - Decoded image handles keyed by URL
//! - [`widgets`] - Custom Iced widgets (progress ring)
//! - [`styles`] - Centralized styling (buttons, containers, progress)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod alert;
pub mod create;
pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod notifications;
pub mod previews;
pub mod styles;
pub mod theming;
pub mod widgets;
