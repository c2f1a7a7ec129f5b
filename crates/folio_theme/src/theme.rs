//! Light/dark theme pair
//!
//! Palettes are derived from the Catppuccin Latte (light) and Mocha (dark)
//! color sets, matching the documentation site's prose styling.

use crate::tokens::{ColorToken, ColorTokens};
use folio_core::Color;
use serde::{Deserialize, Serialize};

/// The current theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The complementary mode
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// A single resolved theme: a mode plus its token values
#[derive(Clone, Debug)]
pub struct Theme {
    mode: ThemeMode,
    colors: ColorTokens,
}

impl Theme {
    pub fn new(mode: ThemeMode, colors: ColorTokens) -> Self {
        Self { mode, colors }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }
}

/// A light/dark theme pair
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    pub fn new(light: ColorTokens, dark: ColorTokens) -> Self {
        Self {
            light: Theme::new(ThemeMode::Light, light),
            dark: Theme::new(ThemeMode::Dark, dark),
        }
    }

    /// Get the theme for a mode
    pub fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// The built-in documentation-site bundle
    pub fn docs_default() -> Self {
        Self::new(light_colors(), dark_colors())
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::docs_default()
    }
}

/// Light palette (Catppuccin Latte)
pub fn light_colors() -> ColorTokens {
    ColorTokens {
        background: Color::from_hex(0xEFF1F5),
        surface: Color::WHITE,
        text_primary: Color::from_hex(0x4C4F69),
        text_secondary: Color::from_hex(0x6C6F85),
        text_tertiary: Color::from_hex(0x9CA0B0),
        border: Color::from_hex(0xCCD0DA),
        border_hover: Color::from_hex(0xBCC0CC),
        accent: Color::from_hex(0x1E66F5),
        accent_subtle: Color::from_hex(0x1E66F5).with_alpha(0.1),
    }
}

/// Dark palette (Catppuccin Mocha)
pub fn dark_colors() -> ColorTokens {
    ColorTokens {
        background: Color::from_hex(0x1E1E2E),
        surface: Color::from_hex(0x313244),
        text_primary: Color::from_hex(0xCDD6F4),
        text_secondary: Color::from_hex(0xA6ADC8),
        text_tertiary: Color::from_hex(0x7F849C),
        border: Color::from_hex(0x45475A),
        border_hover: Color::from_hex(0x585B70),
        accent: Color::from_hex(0x89B4FA),
        accent_subtle: Color::from_hex(0x89B4FA).with_alpha(0.1),
    }
}
