// SPDX-License-Identifier: MPL-2.0
//! REST adapter implementing [`PhotoService`] with `reqwest`.
//!
//! Endpoints, relative to the configured base URL:
//!
//! | Operation | Request                           |
//! |-----------|-----------------------------------|
//! | list      | `GET gallery?page={p}&limit={l}`  |
//! | create    | `POST gallery`                    |
//! | update    | `PUT gallery/{id}`                |
//! | delete    | `DELETE gallery/{id}`             |

mod dto;

use crate::application::port::PhotoService;
use crate::domain::gallery::{Photo, PhotoDraft, PhotoId, PhotoPage};
use crate::error::{Error, Result};
use async_trait::async_trait;
use dto::{DraftDto, PageDto, SingleDto};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("GalleryAdmin/", env!("CARGO_PKG_VERSION"));
const COLLECTION: &str = "gallery";

/// HTTP client for the gallery API.
#[derive(Debug, Clone)]
pub struct HttpPhotoService {
    client: reqwest::Client,
    base: Url,
}

impl HttpPhotoService {
    /// Builds a client for `base_url` with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] for an unparsable base URL and
    /// [`Error::Transport`] if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base: normalize_base(base_url)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn collection_url(&self) -> Result<Url> {
        Ok(self.base.join(COLLECTION)?)
    }

    fn item_url(&self, id: &PhotoId) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| Error::Url(format!("cannot append to {}", self.base)))?
            .push(id.as_str());
        Ok(url)
    }

    /// Resolves an image reference against the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] when the reference cannot be joined.
    pub fn resolve_image_url(&self, image: &str) -> Result<Url> {
        Ok(self.base.join(image)?)
    }
}

/// Parses the base URL and makes sure relative joins append to its path.
fn normalize_base(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)?;
    if url.cannot_be_a_base() {
        return Err(Error::Url(format!("{trimmed} cannot be used as a base URL")));
    }
    Ok(url)
}

/// Turns a non-success response into [`Error::Api`], keeping the server message.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message: dto::error_message(&body),
    })
}

#[async_trait]
impl PhotoService for HttpPhotoService {
    async fn list(&self, page: u32, limit: u32) -> Result<PhotoPage> {
        let url = self.collection_url()?;
        let response = self
            .client
            .get(url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        let page: PageDto = ensure_success(response).await?.json().await?;
        Ok(page.into())
    }

    async fn create(&self, draft: &PhotoDraft) -> Result<Photo> {
        let url = self.collection_url()?;
        let response = self
            .client
            .post(url)
            .json(&DraftDto::from(draft))
            .send()
            .await?;
        let photo: SingleDto = ensure_success(response).await?.json().await?;
        Ok(photo.into())
    }

    async fn update(&self, id: &PhotoId, draft: &PhotoDraft) -> Result<Photo> {
        let url = self.item_url(id)?;
        let response = self
            .client
            .put(url)
            .json(&DraftDto::from(draft))
            .send()
            .await?;
        let photo: SingleDto = ensure_success(response).await?.json().await?;
        Ok(photo.into())
    }

    async fn delete(&self, id: &PhotoId) -> Result<()> {
        let url = self.item_url(id)?;
        let response = self.client.delete(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let url = self.resolve_image_url(url)?;
        let response = self.client.get(url).send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
