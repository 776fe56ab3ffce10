use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the storefront home application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let window = config.home().window;
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("JF Imperadores")
    .subscription(subscriptions::subscription)
    .font(lucide_icons::lucide_font_bytes())
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(window.width, window.height),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("storefront-home".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::StorefrontTheme::theme()
}
