// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Toasts are checked for expiry at this rate.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes Escape to the gallery, which closes its topmost layer.
///
/// Escape is handled even when a text input captured it, so it also closes
/// the form while a field has focus.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Gallery(gallery::Message::EscapePressed)),
        _ => None,
    })
}

/// Ticks only while toasts are on screen or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
