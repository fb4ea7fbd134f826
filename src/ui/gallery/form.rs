// SPDX-License-Identifier: MPL-2.0
//! Create/edit form fields and their validation.
//!
//! Fields are kept as raw text exactly as typed; they only become a
//! [`PhotoDraft`] once [`PhotoForm::validate`] accepts them.

use crate::domain::gallery::{Photo, PhotoDraft, DEFAULT_CATEGORY};

/// Raw text of the four form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoForm {
    pub image: String,
    pub title: String,
    pub category: String,
    pub order: String,
}

impl Default for PhotoForm {
    fn default() -> Self {
        Self::from_draft(&PhotoDraft::default())
    }
}

/// Reasons a form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    ImageRequired,
    TitleRequired,
    /// The order field is neither empty nor an integer.
    InvalidOrder,
}

impl FormError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FormError::ImageRequired => "form-error-image-required",
            FormError::TitleRequired => "form-error-title-required",
            FormError::InvalidOrder => "form-error-order-invalid",
        }
    }
}

impl PhotoForm {
    #[must_use]
    pub fn from_draft(draft: &PhotoDraft) -> Self {
        Self {
            image: draft.image.clone(),
            title: draft.title.clone(),
            category: draft.category.clone(),
            order: draft.order.to_string(),
        }
    }

    /// Fields of an existing photo, for edit mode.
    #[must_use]
    pub fn from_photo(photo: &Photo) -> Self {
        Self::from_draft(&photo.draft())
    }

    /// Checks the fields and builds the request payload.
    ///
    /// Image and title must be non-blank. An empty order means 0 and an empty
    /// category means [`DEFAULT_CATEGORY`].
    pub fn validate(&self) -> Result<PhotoDraft, FormError> {
        let image = self.image.trim();
        if image.is_empty() {
            return Err(FormError::ImageRequired);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        let order = parse_order(&self.order)?;
        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY,
            category => category,
        };

        Ok(PhotoDraft {
            image: image.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            order,
        })
    }
}

fn parse_order(raw: &str) -> Result<i64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<i64>().map_err(|_| FormError::InvalidOrder)
}
