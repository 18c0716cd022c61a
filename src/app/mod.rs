// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and toasts.
//!
//! The `App` struct loads configuration, localization and the image list at
//! startup, then forwards messages to the gallery component and turns its
//! effects into user-facing notifications.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::asset_source;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, Effect};
use crate::ui::notifications::{self, Notification};
use crate::ui::state::viewport::INITIAL_WINDOW_SIZE;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.gallery().len())
            .field("selected", &self.gallery.selection().len())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: INITIAL_WINDOW_SIZE,
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(
                Gallery::default(),
                config.drag.to_drag_config(),
                resolve_assets_dir(None, &config),
            ),
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Picks the directory to scan: command line first, then config, then the
/// built-in default.
#[must_use]
pub fn resolve_assets_dir(cli: Option<PathBuf>, config: &Config) -> PathBuf {
    cli.or_else(|| config.gallery.assets_dir.clone())
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_ASSETS_DIR))
}

impl App {
    /// Initializes application state from CLI flags and the persisted config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        (Self::from_config(flags, &config, config_warning), Task::none())
    }

    fn from_config(flags: Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let assets_dir = resolve_assets_dir(flags.assets_dir, config);
        let sort_order = config.gallery.sort_order.unwrap_or_default();
        let images = match asset_source::scan(&assets_dir, sort_order) {
            Ok(images) => images,
            Err(err) => {
                tracing::warn!(
                    directory = %assets_dir.display(),
                    error = %err,
                    "cannot read assets directory"
                );
                notifications.push(
                    Notification::warning("notification-scan-dir-error")
                        .with_arg("dir", assets_dir.display()),
                );
                Vec::new()
            }
        };

        let gallery = Gallery::load(images);
        tracing::info!(
            directory = %assets_dir.display(),
            images = gallery.len(),
            "gallery loaded"
        );

        Self {
            i18n,
            gallery: gallery::State::new(gallery, config.drag.to_drag_config(), assets_dir),
            theme_mode: config.general.theme_mode,
            notifications,
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
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => match self.gallery.handle(msg) {
                Effect::Deleted(count) => {
                    self.notifications.push(
                        Notification::success("notification-deleted").with_arg("count", count),
                    );
                }
                Effect::None => {}
            },
            Message::Notification(msg) => self.notifications.handle_message(&msg),
            Message::Tick(_) => self.notifications.tick(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}
