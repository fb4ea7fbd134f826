// SPDX-License-Identifier: MPL-2.0
//! Query services (read side).
//!
//! Read-only helpers over domain data. They never change state.
//!
//! - [`search`]: title search over the loaded page

pub mod search;

pub use search::filter_by_title;
