// SPDX-License-Identifier: MPL-2.0
//! Domain layer: plain data types and rules, no I/O and no GUI types.
//!
//! - [`gallery`]: photos, drafts and pagination

pub mod gallery;
