// SPDX-License-Identifier: MPL-2.0
//! Notification data: what to say, how loud, and for how long.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// i18n key used to relay a message written by the server.
pub const SERVER_MESSAGE_KEY: &str = "notification-server-error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Lingers longest but still expires, so failures cannot pin every slot.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// `None` means manual dismiss. Every toast can also be closed by hand.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => Some(Duration::from_secs(8)),
        }
    }
}

/// A transient message shown as a toast.
///
/// The text is an i18n key resolved at render time, so switching language
/// also re-labels toasts already on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Error toast for a failed remote call.
    ///
    /// Shows the server's own message when it sent one, `fallback_key`
    /// otherwise.
    pub fn from_error(fallback_key: &str, err: &Error) -> Self {
        match err.server_message() {
            Some(message) => Self::error(SERVER_MESSAGE_KEY).with_arg("message", message),
            None => Self::error(fallback_key),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Restarts the display clock when a queued toast finally gets a slot.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = now;
    }

    /// Whether the notification has outlived its severity's display time at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.shown_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(Notification::info("a").id(), Notification::info("a").id());
    }

    #[test]
    fn from_error_prefers_server_message() {
        let err = Error::Api {
            status: 422,
            message: Some("Image URL unreachable".into()),
        };
        let n = Notification::from_error("notification-save-error", &err);
        assert_eq!(n.severity(), Severity::Error);
        assert_eq!(n.message_key(), SERVER_MESSAGE_KEY);
        assert_eq!(
            n.message_args(),
            &[("message".to_string(), "Image URL unreachable".to_string())]
        );
    }

    #[test]
    fn from_error_falls_back_to_generic_key() {
        let err = Error::Transport("connection refused".into());
        let n = Notification::from_error("notification-delete-error", &err);
        assert_eq!(n.message_key(), "notification-delete-error");
        assert!(n.message_args().is_empty());
    }

    #[test]
    fn errors_expire_after_the_longest_duration() {
        let n = Notification::error("x");
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(5)));
        assert!(n.is_expired_at(Instant::now() + Duration::from_secs(8)));
    }

    #[test]
    fn success_expires_after_its_duration() {
        let n = Notification::success("x");
        assert!(!n.is_expired_at(Instant::now()));
        assert!(n.is_expired_at(Instant::now() + Duration::from_secs(3)));
    }

    #[test]
    fn warning_outlasts_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        let error = Severity::Error.auto_dismiss_duration().unwrap();
        assert!(warning > success);
        assert!(error > warning);
    }
}
