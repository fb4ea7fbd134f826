// SPDX-License-Identifier: MPL-2.0
//! `gallery_admin` is a desktop administration panel for a remote photo
//! gallery, built with the Iced GUI framework.
//!
//! It lists the gallery page by page, searches titles, and creates, edits and
//! deletes photos through the gallery's REST API. Preferences live in a TOML
//! file and the interface is localized with Fluent.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
