// SPDX-License-Identifier: MPL-2.0
//! Message routing and effect execution.

use super::{config, App, Message};
use crate::ui::gallery::{effects, Effect};
use crate::ui::notifications::Notification;
use iced::Task;
use std::sync::Arc;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => {
            let effects = app.gallery.update(message);
            run_effects(app, effects)
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            Task::none()
        }
        Message::CycleTheme => {
            app.theme_mode = app.theme_mode.next();
            app.config.general.theme_mode = app.theme_mode;
            persist_preferences(app);
            Task::none()
        }
        Message::CycleLanguage => {
            if let Some(locale) = app.i18n.next_locale() {
                app.config.general.language = Some(locale.to_string());
                app.i18n.set_locale(locale);
                persist_preferences(app);
            }
            Task::none()
        }
    }
}

/// Pushes toasts right away and turns remote requests into tasks whose
/// completions come back as gallery messages.
fn run_effects(app: &mut App, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::new();
    for effect in effects {
        match effect {
            Effect::Notify(notification) => app.notifications.push(notification),
            Effect::Remote(request) => {
                let service = Arc::clone(&app.service);
                tasks.push(
                    Task::perform(effects::perform(service, request), Message::Gallery),
                );
            }
        }
    }
    Task::batch(tasks)
}

fn persist_preferences(app: &mut App) {
    if let Err(err) = config::save(&app.config) {
        tracing::warn!(error = %err, "failed to save preferences");
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
