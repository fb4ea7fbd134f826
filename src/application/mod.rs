// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports and read-side queries.
//!
//! - [`port`]: traits implemented by infrastructure adapters
//! - [`query`]: read-only operations on domain data
//!
//! The application layer depends on the domain layer only; infrastructure
//! implements its ports and the UI consumes both.

pub mod port;
pub mod query;
