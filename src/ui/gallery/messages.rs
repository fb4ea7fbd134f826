// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by the gallery view and the effects it asks for.

use crate::domain::gallery::{Photo, PhotoDraft, PhotoId, PhotoPage};
use crate::error::Error;
use crate::ui::notifications::Notification;

#[derive(Debug, Clone)]
pub enum Message {
    /// The view was shown for the first time.
    Mounted,
    Refresh,
    PageLoaded {
        seq: u64,
        result: Result<PhotoPage, Error>,
    },
    SearchChanged(String),
    PreviousPage,
    NextPage,
    CardHovered(PhotoId),
    CardLeft(PhotoId),
    OpenCreate,
    OpenEdit(PhotoId),
    CloseModal,
    ImageChanged(String),
    TitleChanged(String),
    CategoryChanged(String),
    OrderChanged(String),
    Submit,
    Saved(Result<Photo, Error>),
    RequestDelete(PhotoId),
    ConfirmDelete,
    CancelDelete,
    Deleted(Result<(), Error>),
    OpenPreview(PhotoId),
    ClosePreview,
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    EscapePressed,
}

/// Parameters of one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number; only the response to the latest one is applied.
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
}

/// A call to the remote photo service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Fetch(FetchRequest),
    Create(PhotoDraft),
    Update(PhotoId, PhotoDraft),
    Delete(PhotoId),
    Thumbnail(String),
}

/// Work the view hands back to the application after a transition.
#[derive(Debug, Clone)]
pub enum Effect {
    Remote(Request),
    Notify(Notification),
}
