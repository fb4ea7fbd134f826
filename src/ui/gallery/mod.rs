// SPDX-License-Identifier: MPL-2.0
//! Gallery administration screen.
//!
//! Lists one page of photos as cards, filters them by title, and offers
//! create, edit, preview and delete. The state is driven by [`State::update`];
//! the [`Request`]s it emits are executed by [`effects::perform`].

pub mod effects;
pub mod form;
mod messages;
mod state;
pub mod thumbnails;
mod view;

pub use form::{FormError, PhotoForm};
pub use messages::{Effect, FetchRequest, Message, Request};
pub use state::{Modal, State};
pub use view::{columns_for_width, view, ViewContext};
