// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state that should survive restarts but is not a user preference
//! (those live in `settings.toml`). The studio view itself is never
//! persisted.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory an image was downloaded to.
    /// Used as the initial directory of the save dialog.
    #[serde(default)]
    pub last_download_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with the i18n key of a warning to show.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    log::warn!("failed to parse {}: {err}", path.display());
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                log::warn!("failed to open {}: {err}", path.display());
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns the i18n key of a warning if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory of a file that was just downloaded.
    ///
    /// Paths without a parent leave the state unchanged.
    pub fn set_last_download_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_download_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_last_directory() {
        assert!(AppState::default().last_download_directory.is_none());
    }

    #[test]
    fn set_last_download_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_download_directory_from_file(Path::new("/home/user/images/a.png"));
        assert_eq!(
            state.last_download_directory,
            Some(PathBuf::from("/home/user/images"))
        );
    }

    #[test]
    fn root_path_leaves_directory_unchanged() {
        let mut state = AppState::default();
        state.set_last_download_directory_from_file(Path::new("/"));
        assert!(state.last_download_directory.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let state = AppState {
            last_download_directory: Some(PathBuf::from("/tmp/downloads")),
        };

        assert!(state.save_to(Some(temp_dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().join("absent")));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_yields_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\xff not cbor")
            .expect("failed to write state");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }
}
