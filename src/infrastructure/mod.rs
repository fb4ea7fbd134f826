// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing `application::port` traits.
//!
//! - [`http`]: REST client for the gallery backend (implements [`PhotoService`])
//!
//! [`PhotoService`]: crate::application::port::PhotoService

pub mod http;

pub use http::HttpPhotoService;
