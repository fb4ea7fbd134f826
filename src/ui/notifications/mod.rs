// SPDX-License-Identifier: MPL-2.0
//! Toast notifications reporting the outcome of gallery operations.
//!
//! Success and info toasts vanish after about 3 seconds, warnings after 5
//! and errors after 8. At most three are visible; the rest wait in a queue
//! and get their full display time once a slot frees up.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-delete-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, SERVER_MESSAGE_KEY};
pub use toast::Toast;
