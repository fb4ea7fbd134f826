// SPDX-License-Identifier: MPL-2.0
//! Application root: boots the gallery screen, routes messages and runs the
//! effects components hand back.
//!
//! The `App` struct owns the cross-cutting pieces (localization, preferences,
//! toasts, the remote service handle) so screen components stay free of I/O.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::PhotoService;
use crate::domain::gallery::{Photo, PhotoDraft, PhotoId, PhotoPage};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpPhotoService;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use async_trait::async_trait;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    gallery: gallery::State,
    notifications: notifications::Manager,
    service: Arc<dyn PhotoService>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("theme_mode", &self.theme_mode)
            .field("photos", &self.gallery.photos().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires an `Fn` boot closure; every call builds from the same flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Stand-in service used when the configured API URL is unusable, so the
/// window still opens and every call reports the configuration problem.
struct UnavailableService {
    reason: Error,
}

#[async_trait]
impl PhotoService for UnavailableService {
    async fn list(&self, _page: u32, _limit: u32) -> Result<PhotoPage> {
        Err(self.reason.clone())
    }

    async fn create(&self, _draft: &PhotoDraft) -> Result<Photo> {
        Err(self.reason.clone())
    }

    async fn update(&self, _id: &PhotoId, _draft: &PhotoDraft) -> Result<Photo> {
        Err(self.reason.clone())
    }

    async fn delete(&self, _id: &PhotoId) -> Result<()> {
        Err(self.reason.clone())
    }

    async fn fetch_image(&self, _url: &str) -> Result<Vec<u8>> {
        Err(self.reason.clone())
    }
}

impl App {
    /// Loads preferences, connects the service and mounts the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let base_url = config.service.resolve_base_url(flags.api_url.as_deref());
        let mut startup_notices = Vec::new();
        let service: Arc<dyn PhotoService> =
            match HttpPhotoService::new(&base_url, config.service.timeout()) {
                Ok(service) => {
                    tracing::info!(%base_url, "gallery service configured");
                    Arc::new(service)
                }
                Err(err) => {
                    tracing::error!(%base_url, error = %err, "unusable gallery API URL");
                    startup_notices.push(
                        Notification::error("notification-service-url-invalid")
                            .with_arg("url", base_url.as_str()),
                    );
                    Arc::new(UnavailableService { reason: err })
                }
            };

        let mut app = Self::with_service(config, i18n, service);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        for notice in startup_notices {
            app.notifications.push(notice);
        }

        let task = app.update(Message::Gallery(gallery::Message::Mounted));
        (app, task)
    }

    /// Builds the application around an already constructed service.
    pub fn with_service(config: Config, i18n: I18n, service: Arc<dyn PhotoService>) -> Self {
        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            gallery: gallery::State::new(),
            notifications: notifications::Manager::new(),
            service,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
