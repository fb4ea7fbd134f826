// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the presentation layer
//! only ever talks to them through `Arc<dyn ...>`.
//!
//! # Available Ports
//!
//! - [`gallery`]: remote photo CRUD service ([`PhotoService`])
//!
//! # Example
//!
//! ```ignore
//! use gallery_admin::application::port::PhotoService;
//!
//! async fn count_first_page(service: &dyn PhotoService) -> usize {
//!     service.list(1, 12).await.map(|page| page.photos.len()).unwrap_or(0)
//! }
//! ```

pub mod gallery;

pub use gallery::PhotoService;
