//! Configuration models as read from `storefront.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use storefront_model::CountryCode;

/// Fully resolved configuration for the home application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HomeConfig {
    /// Locale and data settings.
    pub storefront: StorefrontSettings,
    /// Initial window geometry.
    pub window: WindowSettings,
    /// Product rail scrolling behaviour.
    pub rail: RailSettings,
}

/// Locale and catalog fixture settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorefrontSettings {
    /// Country prefix applied to every navigation link (`/br/store`).
    pub country_code: CountryCode,
    /// JSON catalog to load at boot. The embedded sample catalog is used
    /// when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            catalog_path: None,
        }
    }
}

/// Two-letter default prefix; the sample storefront sells in Brazil.
pub const DEFAULT_COUNTRY_CODE: &str = "br";

fn default_country_code() -> CountryCode {
    match CountryCode::parse(DEFAULT_COUNTRY_CODE) {
        Ok(code) => code,
        Err(_) => unreachable!("DEFAULT_COUNTRY_CODE is two ASCII letters"),
    }
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Easing curve used by the smooth scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollEasing {
    /// Constant velocity.
    Linear,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    #[default]
    EaseOut,
    /// Quadratic acceleration then deceleration.
    EaseInOut,
}

/// Product rail navigation settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RailSettings {
    /// Distance in pixels a single previous/next activation moves the strip.
    pub scroll_step: f32,
    /// Duration of the smooth scroll transition.
    pub smooth_scroll_ms: u64,
    /// Easing curve of the smooth scroll transition.
    pub easing: ScrollEasing,
}

impl RailSettings {
    /// Default step of one previous/next activation.
    pub const DEFAULT_SCROLL_STEP: f32 = 400.0;
    /// Default smooth scroll duration in milliseconds.
    pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 300;

    /// Smooth scroll duration as a [`Duration`].
    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }
}

impl Default for RailSettings {
    fn default() -> Self {
        Self {
            scroll_step: Self::DEFAULT_SCROLL_STEP,
            smooth_scroll_ms: Self::DEFAULT_SMOOTH_SCROLL_MS,
            easing: ScrollEasing::EaseOut,
        }
    }
}
