// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. An
//! external directory given with `--i18n-dir` may add locales or replace the
//! embedded ones.
//!
//! The locale is resolved from the CLI, then the config file, then the
//! operating system, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
