// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": components own their state, emit
//! messages from their views and return effects from their updates.
//!
//! - [`gallery`] - Photo gallery administration screen
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Widget style functions (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
