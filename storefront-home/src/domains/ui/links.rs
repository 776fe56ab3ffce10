//! Localized navigation links.
//!
//! Every in-store destination is written without a locale (`/store`) and
//! prefixed with the active country code when rendered (`/br/store`).
//! Activating a link emits [`Message::Navigate`]; what navigation means is
//! up to the page host.

use iced::{
    Element, Length,
    widget::{button, row, text},
};
use lucide_icons::Icon;
use storefront_model::CountryCode;

use crate::domains::ui::theme;
use crate::messages::Message;

/// Visual treatment of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Inline text link with a trailing arrow ("view all").
    Interactive,
    /// Large filled button.
    Primary,
    /// Large outlined button.
    Secondary,
}

/// Renders a navigation control for a destination path.
pub trait LinkRenderer {
    fn link<'a>(
        &self,
        destination: &str,
        label: &'a str,
        style: LinkStyle,
    ) -> Element<'a, Message>;
}

/// Prefix `path` with the country code. Absolute URLs pass through.
pub fn localize(country_code: &CountryCode, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        format!("/{country_code}")
    } else {
        format!("/{country_code}/{trimmed}")
    }
}

/// Default link renderer used by the home page.
#[derive(Debug, Clone)]
pub struct LocalizedLinks {
    country_code: CountryCode,
}

impl LocalizedLinks {
    pub fn new(country_code: CountryCode) -> Self {
        Self { country_code }
    }

    pub fn href(&self, path: &str) -> String {
        localize(&self.country_code, path)
    }
}

impl LinkRenderer for LocalizedLinks {
    fn link<'a>(
        &self,
        destination: &str,
        label: &'a str,
        style: LinkStyle,
    ) -> Element<'a, Message> {
        let on_press = Message::Navigate(self.href(destination));
        match style {
            LinkStyle::Interactive => button(
                row![
                    text(label).size(14),
                    text(Icon::ArrowUpRight.unicode().to_string())
                        .font(lucide_font())
                        .size(14),
                ]
                .spacing(4)
                .align_y(iced::Alignment::Center),
            )
            .padding(0)
            .on_press(on_press)
            .style(theme::interactive_link)
            .into(),
            LinkStyle::Primary | LinkStyle::Secondary => button(text(label).size(16))
                .padding([12, 24])
                .width(Length::Shrink)
                .on_press(on_press)
                .style(if style == LinkStyle::Primary {
                    theme::cta_primary
                } else {
                    theme::cta_secondary
                })
                .into(),
        }
    }
}

pub(crate) fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}
