use iced::{
    Background, Border, Color, Radians, Shadow, Theme, Vector, theme,
    widget::{button, container},
};

/// Light storefront theme with a violet primary and warm accents
#[derive(Debug, Clone, Copy)]
pub struct StorefrontTheme;

impl StorefrontTheme {
    // Surfaces
    pub const BACKGROUND: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const BACKGROUND_SUBTLE: Color = Color::from_rgb(0.98, 0.98, 0.98); // #FAFAFA
    pub const BORDER_BASE: Color = Color::from_rgb(0.894, 0.894, 0.906); // #E4E4E7

    // Text
    pub const TEXT_BASE: Color = Color::from_rgb(0.094, 0.094, 0.106); // #18181B
    pub const TEXT_SUBTLE: Color = Color::from_rgb(0.322, 0.322, 0.357); // #52525B
    pub const TEXT_MUTED: Color = Color::from_rgb(0.631, 0.631, 0.667); // #A1A1AA
    pub const TEXT_INTERACTIVE: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3B82F6

    // Brand
    pub const PRIMARY: Color = Color::from_rgb(0.486, 0.227, 0.929); // #7C3AED
    pub const ACCENT: Color = Color::from_rgb(0.925, 0.282, 0.600); // #EC4899
    pub const SECONDARY: Color = Color::from_rgb(0.961, 0.620, 0.043); // #F59E0B

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_BASE;
        palette.primary = Self::PRIMARY;

        Theme::custom("Storefront Light", palette)
    }
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

fn pill() -> Border {
    Border {
        radius: 9999.0.into(),
        ..Default::default()
    }
}

fn soft_shadow(blur_radius: f32) -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector::new(0.0, 4.0),
        blur_radius,
    }
}

/// Round previous/next control floating over the strip.
pub fn rail_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 1.0,
        _ => 0.9,
    };
    button::Style {
        background: Some(Background::Color(with_alpha(Color::WHITE, alpha))),
        text_color: StorefrontTheme::TEXT_BASE,
        border: pill(),
        shadow: soft_shadow(15.0),
        ..Default::default()
    }
}

/// Bare text link with an interactive color.
pub fn interactive_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => StorefrontTheme::PRIMARY,
        _ => StorefrontTheme::TEXT_INTERACTIVE,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Large filled call-to-action.
pub fn cta_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, blur) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (StorefrontTheme::TEXT_SUBTLE, 25.0)
        }
        _ => (StorefrontTheme::TEXT_BASE, 15.0),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: soft_shadow(blur),
        ..Default::default()
    }
}

/// Large outlined call-to-action.
pub fn cta_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let blur = match status {
        button::Status::Hovered | button::Status::Pressed => 25.0,
        _ => 15.0,
    };
    button::Style {
        background: Some(Background::Color(StorefrontTheme::BACKGROUND)),
        text_color: StorefrontTheme::TEXT_BASE,
        border: Border {
            color: StorefrontTheme::BORDER_BASE,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: soft_shadow(blur),
        ..Default::default()
    }
}

/// Whole-card button around a product preview; no chrome of its own.
pub fn card_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: StorefrontTheme::TEXT_BASE,
        ..Default::default()
    }
}

pub fn thumbnail(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(StorefrontTheme::BACKGROUND_SUBTLE)),
        border: Border {
            color: StorefrontTheme::BORDER_BASE,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Diagonal wash behind the hero: primary/10 → background → accent/10.
pub fn hero_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(Radians(3.0 * std::f32::consts::FRAC_PI_4))
                .add_stop(0.0, with_alpha(StorefrontTheme::PRIMARY, 0.10))
                .add_stop(0.5, StorefrontTheme::BACKGROUND)
                .add_stop(1.0, with_alpha(StorefrontTheme::ACCENT, 0.10))
                .into(),
        )),
        border: Border {
            color: StorefrontTheme::BORDER_BASE,
            width: 0.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Translucent circle used by the hero's decorative blobs.
pub fn blob(color: Color, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(with_alpha(color, 0.20 * opacity))),
        border: pill(),
        ..Default::default()
    }
}

/// Thin divider under the hero.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(StorefrontTheme::BORDER_BASE)),
        ..Default::default()
    }
}
