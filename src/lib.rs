// SPDX-License-Identifier: MPL-2.0
//! `gixio` is a desktop studio for a text-to-image generation backend, built
//! with the Iced GUI framework.
//!
//! It collects a prompt and generation settings, submits them to the backend
//! while showing progress, and mirrors the backend's gallery of generated
//! images with view, download and delete actions.

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod studio;
pub mod ui;
