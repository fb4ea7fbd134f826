// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! A [`Photo`] is owned by the remote backend; the application only ever holds
//! the most recently fetched page of them. A [`PhotoDraft`] is the editable
//! subset of a photo, used as the payload for create and update requests.

mod newtypes;

pub use newtypes::{PageNumber, PAGE_SIZE};

use std::fmt;

/// Category assigned when none is provided.
pub const DEFAULT_CATEGORY: &str = "general";

/// Server-assigned, opaque photo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A photo as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    /// Image URL, absolute or relative to the API host.
    pub image: String,
    pub title: String,
    pub category: String,
    /// Display ordering hint; the backend sorts, the client never does.
    pub order: i64,
}

impl Photo {
    /// Returns the editable fields of this photo.
    #[must_use]
    pub fn draft(&self) -> PhotoDraft {
        PhotoDraft {
            image: self.image.clone(),
            title: self.title.clone(),
            category: if self.category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                self.category.clone()
            },
            order: self.order,
        }
    }

    /// Case-insensitive substring match on the title.
    #[must_use]
    pub fn title_matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Editable photo fields; carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDraft {
    pub image: String,
    pub title: String,
    pub category: String,
    pub order: i64,
}

impl Default for PhotoDraft {
    fn default() -> Self {
        Self {
            image: String::new(),
            title: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            order: 0,
        }
    }
}

/// One page of photos plus the page count reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPage {
    pub photos: Vec<Photo>,
    /// Total number of pages, `None` when the response carried no pagination.
    pub total_pages: Option<u32>,
}

impl PhotoPage {
    /// Total pages, defaulting to a single page.
    #[must_use]
    pub fn total_pages_or_default(&self) -> u32 {
        self.total_pages.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(title: &str) -> Photo {
        Photo {
            id: PhotoId::new("p1"),
            image: "/a.jpg".into(),
            title: title.into(),
            category: String::new(),
            order: 3,
        }
    }

    #[test]
    fn draft_defaults_empty_category_to_general() {
        let draft = photo("Sunset").draft();
        assert_eq!(draft.category, DEFAULT_CATEGORY);
        assert_eq!(draft.order, 3);
        assert_eq!(draft.image, "/a.jpg");
    }

    #[test]
    fn default_draft_matches_create_mode() {
        let draft = PhotoDraft::default();
        assert!(draft.image.is_empty());
        assert!(draft.title.is_empty());
        assert_eq!(draft.category, "general");
        assert_eq!(draft.order, 0);
    }

    #[test]
    fn title_match_ignores_case() {
        let p = photo("Summer Event");
        assert!(p.title_matches("event"));
        assert!(p.title_matches("SUMMER"));
        assert!(p.title_matches(""));
        assert!(!p.title_matches("winter"));
    }

    #[test]
    fn missing_pagination_means_one_page() {
        let page = PhotoPage {
            photos: Vec::new(),
            total_pages: None,
        };
        assert_eq!(page.total_pages_or_default(), 1);

        let zero = PhotoPage {
            photos: Vec::new(),
            total_pages: Some(0),
        };
        assert_eq!(zero.total_pages_or_default(), 1);
    }
}
