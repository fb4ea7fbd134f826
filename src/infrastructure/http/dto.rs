// SPDX-License-Identifier: MPL-2.0
//! Wire formats of the gallery REST API.
//!
//! These types never leave the HTTP adapter; they are converted to domain
//! types right after decoding.

use crate::domain::gallery::{Photo, PhotoDraft, PhotoId, PhotoPage, DEFAULT_CATEGORY};
use serde::{Deserialize, Serialize};

/// Photo as sent by the server.
///
/// Mongo-style backends send `_id`, sometimes alongside an `id` virtual; `_id`
/// wins when both are present.
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawPhotoDto")]
pub(super) struct PhotoDto {
    id: String,
    image: String,
    title: String,
    category: Option<String>,
    order: Option<i64>,
}

#[derive(Deserialize)]
struct RawPhotoDto {
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    order: Option<i64>,
}

impl TryFrom<RawPhotoDto> for PhotoDto {
    type Error = &'static str;

    fn try_from(raw: RawPhotoDto) -> Result<Self, Self::Error> {
        let id = raw.mongo_id.or(raw.id).ok_or("photo without `_id` or `id`")?;
        Ok(PhotoDto {
            id,
            image: raw.image,
            title: raw.title,
            category: raw.category,
            order: raw.order,
        })
    }
}

impl From<PhotoDto> for Photo {
    fn from(dto: PhotoDto) -> Self {
        Photo {
            id: PhotoId::new(dto.id),
            image: dto.image,
            title: dto.title,
            category: dto
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            order: dto.order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PaginationDto {
    #[serde(default)]
    pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PageDto {
    #[serde(default)]
    data: Vec<PhotoDto>,
    #[serde(default)]
    pagination: Option<PaginationDto>,
}

impl From<PageDto> for PhotoPage {
    fn from(dto: PageDto) -> Self {
        PhotoPage {
            photos: dto.data.into_iter().map(Photo::from).collect(),
            total_pages: dto.pagination.and_then(|p| p.pages),
        }
    }
}

/// Single-entity responses come either bare or wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum SingleDto {
    Wrapped { data: PhotoDto },
    Bare(PhotoDto),
}

impl From<SingleDto> for Photo {
    fn from(dto: SingleDto) -> Self {
        match dto {
            SingleDto::Wrapped { data } | SingleDto::Bare(data) => data.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DraftDto<'a> {
    image: &'a str,
    title: &'a str,
    category: &'a str,
    order: i64,
}

impl<'a> From<&'a PhotoDraft> for DraftDto<'a> {
    fn from(draft: &'a PhotoDraft) -> Self {
        DraftDto {
            image: &draft.image,
            title: &draft.title,
            category: &draft.category,
            order: draft.order,
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Accepted shapes: `{"message": ".."}`, `{"error": {"message": ".."}}` and
/// `{"error": ".."}`.
pub(super) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
        })
        .or_else(|| value.get("error").and_then(serde_json::Value::as_str))?;
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}
