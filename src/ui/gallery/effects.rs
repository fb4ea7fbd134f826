// SPDX-License-Identifier: MPL-2.0
//! Runs the remote requests emitted by the gallery view.

use super::messages::{FetchRequest, Message, Request};
use crate::application::port::gallery::PhotoService;
use std::sync::Arc;

/// Executes one request and turns its outcome into the completion message.
pub async fn perform(service: Arc<dyn PhotoService>, request: Request) -> Message {
    match request {
        Request::Fetch(FetchRequest { seq, page, limit }) => Message::PageLoaded {
            seq,
            result: service.list(page, limit).await,
        },
        Request::Create(draft) => Message::Saved(service.create(&draft).await),
        Request::Update(id, draft) => Message::Saved(service.update(&id, &draft).await),
        Request::Delete(id) => Message::Deleted(service.delete(&id).await),
        Request::Thumbnail(url) => {
            let result = service.fetch_image(&url).await;
            Message::ThumbnailLoaded { url, result }
        }
    }
}
