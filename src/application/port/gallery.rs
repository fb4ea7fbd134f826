// SPDX-License-Identifier: MPL-2.0
//! Remote photo gallery port.
//!
//! This module defines the [`PhotoService`] trait: the CRUD collaborator the
//! gallery screen talks to. The HTTP adapter lives in
//! [`crate::infrastructure::http`]; tests substitute recording fakes.
//!
//! # Design Notes
//!
//! - Methods are `async` because every call is a network round trip; callers
//!   wrap them in Iced `Task`s
//! - The trait is `Send + Sync` so one instance can be shared behind an `Arc`
//!   by all in-flight tasks
//! - Errors carry the server-provided message when one exists

use crate::domain::gallery::{Photo, PhotoDraft, PhotoId, PhotoPage};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PhotoService: Send + Sync {
    /// Fetches one page (1-based) of at most `limit` photos.
    async fn list(&self, page: u32, limit: u32) -> Result<PhotoPage>;

    /// Creates a photo; the backend assigns its identifier.
    async fn create(&self, draft: &PhotoDraft) -> Result<Photo>;

    /// Replaces the editable fields of an existing photo.
    async fn update(&self, id: &PhotoId, draft: &PhotoDraft) -> Result<Photo>;

    async fn delete(&self, id: &PhotoId) -> Result<()>;

    /// Downloads raw image bytes for a thumbnail.
    ///
    /// Relative URLs are resolved by the implementation.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
