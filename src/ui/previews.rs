// SPDX-License-Identifier: MPL-2.0
//! Decoded image handles for the displayed result and gallery thumbnails,
//! keyed by resolved URL.

use crate::api::ApiError;
use iced::widget::image;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct Previews {
    entries: HashMap<String, Preview>,
}

impl Previews {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks unknown URLs as loading and returns them so the caller fetches
    /// their bytes. Known URLs, failed ones included, are never re-requested.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing = Vec::new();
        for url in urls {
            if !self.entries.contains_key(url) {
                self.entries.insert(url.to_string(), Preview::Loading);
                missing.push(url.to_string());
            }
        }
        missing
    }

    /// Stores the outcome of a fetch. Results for URLs that were pruned in
    /// the meantime are dropped.
    pub fn loaded(&mut self, url: &str, result: Result<Vec<u8>, ApiError>) {
        let Some(slot) = self.entries.get_mut(url) else {
            return;
        };
        *slot = match result {
            Ok(bytes) => Preview::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("failed to load image {url}: {err}");
                Preview::Failed
            }
        };
    }

    /// Drops every preview whose URL is not in `keep`.
    pub fn retain<'a>(&mut self, keep: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = keep.into_iter().collect();
        self.entries.retain(|url, _| keep.contains(url.as_str()));
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Preview> {
        self.entries.get(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "http://host/images/a.png";
    const B: &str = "http://host/images/b.png";

    #[test]
    fn request_only_returns_unknown_urls() {
        let mut previews = Previews::new();
        assert_eq!(previews.request([A, B]), vec![A.to_string(), B.to_string()]);
        assert!(previews.request([A]).is_empty());
        assert!(matches!(previews.get(A), Some(Preview::Loading)));
    }

    #[test]
    fn failed_fetch_is_not_retried() {
        let mut previews = Previews::new();
        previews.request([A]);
        previews.loaded(A, Err(ApiError::Transport("refused".into())));

        assert!(matches!(previews.get(A), Some(Preview::Failed)));
        assert!(previews.request([A]).is_empty());
    }

    #[test]
    fn successful_fetch_becomes_ready() {
        let mut previews = Previews::new();
        previews.request([A]);
        previews.loaded(A, Ok(vec![0x89, b'P', b'N', b'G']));
        assert!(matches!(previews.get(A), Some(Preview::Ready(_))));
    }

    #[test]
    fn retain_prunes_and_late_results_are_dropped() {
        let mut previews = Previews::new();
        previews.request([A, B]);
        previews.retain([A]);

        assert_eq!(previews.len(), 1);
        previews.loaded(B, Ok(vec![1, 2, 3]));
        assert!(previews.get(B).is_none());
    }
}
