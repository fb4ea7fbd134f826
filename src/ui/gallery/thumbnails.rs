// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache for the cards of the current page.

use crate::error::Error;
use iced::widget::image::Handle;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

/// Image handles keyed by the photo's image URL.
#[derive(Debug, Default)]
pub struct Thumbnails {
    entries: HashMap<String, Thumbnail>,
}

impl Thumbnails {
    /// Drops entries not used by `urls` and failed ones, then marks the
    /// unseen URLs as loading.
    ///
    /// Returns the URLs that need downloading, without duplicates.
    pub fn sync<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let wanted: Vec<&str> = urls.into_iter().filter(|u| !u.trim().is_empty()).collect();
        self.entries.retain(|url, thumb| {
            !matches!(thumb, Thumbnail::Failed) && wanted.contains(&url.as_str())
        });

        let mut missing = Vec::new();
        for url in wanted {
            if !self.entries.contains_key(url) {
                self.entries.insert(url.to_string(), Thumbnail::Loading);
                missing.push(url.to_string());
            }
        }
        missing
    }

    /// Stores the outcome of a download. Results for evicted URLs are dropped.
    pub fn finish(&mut self, url: &str, result: Result<Vec<u8>, Error>) {
        let Some(entry) = self.entries.get_mut(url) else {
            return;
        };
        *entry = match result {
            Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(url, error = %err, "thumbnail download failed");
                Thumbnail::Failed
            }
        };
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.get(url)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
