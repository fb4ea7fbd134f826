// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded so there is a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
    /// Switch to the next theme mode and remember it.
    CycleTheme,
    /// Switch to the next bundled language and remember it.
    CycleLanguage,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. "fr").
    pub lang: Option<String>,
    /// Optional gallery API base URL, taking precedence over env and config.
    pub api_url: Option<String>,
}
