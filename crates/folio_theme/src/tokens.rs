//! Color tokens for theming
//!
//! The widget layer decides which token applies to which state; the
//! concrete values live in the palettes in [`crate::theme`].

use folio_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surface colors
    Background,
    Surface,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextTertiary,

    // Border colors
    Border,
    BorderHover,

    // Accent
    Accent,
    AccentSubtle,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub border: Color,
    pub border_hover: Color,
    pub accent: Color,
    pub accent_subtle: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::Border => self.border,
            ColorToken::BorderHover => self.border_hover,
            ColorToken::Accent => self.accent,
            ColorToken::AccentSubtle => self.accent_subtle,
        }
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            surface: Color::lerp(&from.surface, &to.surface, t),
            text_primary: Color::lerp(&from.text_primary, &to.text_primary, t),
            text_secondary: Color::lerp(&from.text_secondary, &to.text_secondary, t),
            text_tertiary: Color::lerp(&from.text_tertiary, &to.text_tertiary, t),
            border: Color::lerp(&from.border, &to.border, t),
            border_hover: Color::lerp(&from.border_hover, &to.border_hover, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            accent_subtle: Color::lerp(&from.accent_subtle, &to.accent_subtle, t),
        }
    }

    /// All token keys, in declaration order
    pub fn all_tokens() -> [ColorToken; 9] {
        [
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::TextPrimary,
            ColorToken::TextSecondary,
            ColorToken::TextTertiary,
            ColorToken::Border,
            ColorToken::BorderHover,
            ColorToken::Accent,
            ColorToken::AccentSubtle,
        ]
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        crate::theme::light_colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_matches_fields() {
        let tokens = ColorTokens::default();
        assert_eq!(tokens.get(ColorToken::Accent), tokens.accent);
        assert_eq!(tokens.get(ColorToken::TextPrimary), tokens.text_primary);
    }

    #[test]
    fn test_lerp_midpoint_between_palettes() {
        let light = crate::theme::light_colors();
        let dark = crate::theme::dark_colors();
        let mid = ColorTokens::lerp(&light, &dark, 0.5);

        let expected = Color::lerp(&light.background, &dark.background, 0.5);
        assert_eq!(mid.background, expected);
    }
}
