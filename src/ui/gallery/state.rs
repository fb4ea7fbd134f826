// SPDX-License-Identifier: MPL-2.0
//! Gallery view state and its transitions.
//!
//! [`State::update`] is the only way the state changes. It never performs
//! I/O: remote calls and toasts come back as [`Effect`]s for the caller to
//! run, and their outcomes return as messages.

use super::form::{FormError, PhotoForm};
use super::messages::{Effect, FetchRequest, Message, Request};
use super::thumbnails::{Thumbnail, Thumbnails};
use crate::application::query::search::filter_by_title;
use crate::domain::gallery::{PageNumber, Photo, PhotoId, PhotoPage, PAGE_SIZE};
use crate::error::Error;
use crate::ui::notifications::Notification;

/// The photo currently being created or edited.
#[derive(Debug, Default)]
pub struct Modal {
    /// `Some` in edit mode.
    pub editing: Option<PhotoId>,
    pub form: PhotoForm,
    pub error: Option<FormError>,
    /// A create/update request is in flight.
    pub saving: bool,
}

impl Modal {
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }
}

#[derive(Debug)]
pub struct State {
    photos: Vec<Photo>,
    loading: bool,
    search: String,
    page: PageNumber,
    total_pages: u32,
    modal: Option<Modal>,
    pending_delete: Option<PhotoId>,
    preview: Option<PhotoId>,
    hovered: Option<PhotoId>,
    /// Sequence number of the latest page request.
    latest_fetch: u64,
    thumbnails: Thumbnails,
}

impl Default for State {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            loading: false,
            search: String::new(),
            page: PageNumber::FIRST,
            total_pages: 1,
            modal: None,
            pending_delete: None,
            preview: None,
            hovered: None,
            latest_fetch: 0,
            thumbnails: Thumbnails::default(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Mounted | Message::Refresh => vec![self.fetch()],
            Message::PageLoaded { seq, result } => self.on_page_loaded(seq, result),
            Message::SearchChanged(term) => {
                self.search = term;
                Vec::new()
            }
            Message::PreviousPage => self.go_to(self.page.previous()),
            Message::NextPage => self.go_to(self.page.next(self.total_pages)),
            Message::CardHovered(id) => {
                self.hovered = Some(id);
                Vec::new()
            }
            Message::CardLeft(id) => {
                if self.hovered.as_ref() == Some(&id) {
                    self.hovered = None;
                }
                Vec::new()
            }
            Message::OpenCreate => {
                if !self.is_saving() {
                    self.modal = Some(Modal::default());
                }
                Vec::new()
            }
            Message::OpenEdit(id) => {
                if self.is_saving() {
                    return Vec::new();
                }
                match self.photo(&id).map(PhotoForm::from_photo) {
                    Some(form) => {
                        self.modal = Some(Modal {
                            editing: Some(id),
                            form,
                            ..Modal::default()
                        });
                    }
                    None => tracing::warn!(%id, "edit requested for a photo not on this page"),
                }
                Vec::new()
            }
            Message::CloseModal => {
                self.close_modal();
                Vec::new()
            }
            Message::ImageChanged(value) => self.edit_form(|form| form.image = value),
            Message::TitleChanged(value) => self.edit_form(|form| form.title = value),
            Message::CategoryChanged(value) => self.edit_form(|form| form.category = value),
            Message::OrderChanged(value) => self.edit_form(|form| form.order = value),
            Message::Submit => self.submit(),
            Message::Saved(result) => self.on_saved(result),
            Message::RequestDelete(id) => {
                if self.photo(&id).is_some() {
                    self.pending_delete = Some(id);
                }
                Vec::new()
            }
            Message::ConfirmDelete => match self.pending_delete.take() {
                Some(id) => vec![Effect::Remote(Request::Delete(id))],
                None => Vec::new(),
            },
            Message::CancelDelete => {
                self.pending_delete = None;
                Vec::new()
            }
            Message::Deleted(result) => self.on_deleted(result),
            Message::OpenPreview(id) => {
                if self.photo(&id).is_some() {
                    self.preview = Some(id);
                }
                Vec::new()
            }
            Message::ClosePreview => {
                self.preview = None;
                Vec::new()
            }
            Message::ThumbnailLoaded { url, result } => {
                self.thumbnails.finish(&url, result);
                Vec::new()
            }
            Message::EscapePressed => {
                if self.pending_delete.is_some() {
                    self.pending_delete = None;
                } else if self.preview.is_some() {
                    self.preview = None;
                } else {
                    self.close_modal();
                }
                Vec::new()
            }
        }
    }

    fn fetch(&mut self) -> Effect {
        self.latest_fetch += 1;
        self.loading = true;
        Effect::Remote(Request::Fetch(FetchRequest {
            seq: self.latest_fetch,
            page: self.page.value(),
            limit: PAGE_SIZE,
        }))
    }

    fn go_to(&mut self, page: PageNumber) -> Vec<Effect> {
        if page == self.page {
            return Vec::new();
        }
        self.page = page;
        vec![self.fetch()]
    }

    fn on_page_loaded(&mut self, seq: u64, result: Result<PhotoPage, Error>) -> Vec<Effect> {
        if seq != self.latest_fetch {
            tracing::debug!(seq, latest = self.latest_fetch, "discarding stale page response");
            return Vec::new();
        }
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(page = self.page.value(), error = %err, "failed to load photos");
                return vec![Effect::Notify(Notification::error("notification-load-error"))];
            }
        };

        let total_pages = page.total_pages_or_default();
        self.total_pages = total_pages;

        // The last page emptied out (e.g. after a delete): step back to the new last page.
        if page.photos.is_empty() && self.page.value() > total_pages {
            self.page = PageNumber::new(total_pages);
            return vec![self.fetch()];
        }

        self.photos = page.photos;
        self.forget_missing_photos();

        self.thumbnails
            .sync(self.photos.iter().map(|p| p.image.as_str()))
            .into_iter()
            .map(|url| Effect::Remote(Request::Thumbnail(url)))
            .collect()
    }

    fn forget_missing_photos(&mut self) {
        let photos = &self.photos;
        let present = |id: &Option<PhotoId>| {
            id.as_ref()
                .is_some_and(|id| photos.iter().any(|p| &p.id == id))
        };
        if !present(&self.preview) {
            self.preview = None;
        }
        if !present(&self.hovered) {
            self.hovered = None;
        }
        if !present(&self.pending_delete) {
            self.pending_delete = None;
        }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut PhotoForm)) -> Vec<Effect> {
        if let Some(modal) = self.modal.as_mut() {
            edit(&mut modal.form);
            modal.error = None;
        }
        Vec::new()
    }

    /// An in-flight save owns the modal until it answers.
    fn is_saving(&self) -> bool {
        self.modal.as_ref().is_some_and(|m| m.saving)
    }

    fn close_modal(&mut self) {
        if !self.is_saving() {
            self.modal = None;
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        let Some(modal) = self.modal.as_mut() else {
            return Vec::new();
        };
        if modal.saving {
            return Vec::new();
        }
        match modal.form.validate() {
            Ok(draft) => {
                modal.error = None;
                modal.saving = true;
                let request = match &modal.editing {
                    Some(id) => Request::Update(id.clone(), draft),
                    None => Request::Create(draft),
                };
                vec![Effect::Remote(request)]
            }
            Err(err) => {
                modal.error = Some(err);
                Vec::new()
            }
        }
    }

    fn on_saved(&mut self, result: Result<Photo, Error>) -> Vec<Effect> {
        let was_edit = self.modal.as_ref().is_some_and(Modal::is_edit);
        if let Some(modal) = self.modal.as_mut() {
            modal.saving = false;
        }

        match result {
            Ok(photo) => {
                tracing::info!(id = %photo.id, updated = was_edit, "photo saved");
                self.modal = None;
                let key = if was_edit {
                    "notification-update-success"
                } else {
                    "notification-create-success"
                };
                vec![Effect::Notify(Notification::success(key)), self.fetch()]
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save photo");
                vec![Effect::Notify(Notification::from_error(
                    "notification-save-error",
                    &err,
                ))]
            }
        }
    }

    fn on_deleted(&mut self, result: Result<(), Error>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                tracing::info!("photo deleted");
                vec![
                    Effect::Notify(Notification::success("notification-delete-success")),
                    self.fetch(),
                ]
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to delete photo");
                vec![Effect::Notify(Notification::error(
                    "notification-delete-error",
                ))]
            }
        }
    }

    fn photo(&self, id: &PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| &p.id == id)
    }

    /// Photos of the current page matching the search term.
    #[must_use]
    pub fn visible_photos(&self) -> Vec<&Photo> {
        filter_by_title(&self.photos, &self.search)
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&Photo> {
        self.pending_delete.as_ref().and_then(|id| self.photo(id))
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Photo> {
        self.preview.as_ref().and_then(|id| self.photo(id))
    }

    #[must_use]
    pub fn is_hovered(&self, id: &PhotoId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    #[must_use]
    pub fn thumbnail(&self, url: &str) -> Option<&Thumbnail> {
        self.thumbnails.get(url)
    }
}
