//! The two static palettes

use crate::color::Color;
use crate::mode::PaletteName;
use std::collections::HashMap;

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Surfaces
    Background,
    Card,
    CardAlt,
    Border,

    // Text
    Text,
    TextSecondary,
    TextMuted,

    // Brand
    Accent,
    AccentLight,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Background,
        ColorRole::Card,
        ColorRole::CardAlt,
        ColorRole::Border,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::TextMuted,
        ColorRole::Accent,
        ColorRole::AccentLight,
    ];

    /// Role name as the presentation layer spells it (`cardAlt`, `textMuted`, ...)
    pub fn id(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Card => "card",
            Self::CardAlt => "cardAlt",
            Self::Border => "border",
            Self::Text => "text",
            Self::TextSecondary => "textSecondary",
            Self::TextMuted => "textMuted",
            Self::Accent => "accent",
            Self::AccentLight => "accentLight",
        }
    }

    /// CSS variable name without the `--` prefix
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Card => "card",
            Self::CardAlt => "card-alt",
            Self::Border => "border",
            Self::Text => "text",
            Self::TextSecondary => "text-secondary",
            Self::TextMuted => "text-muted",
            Self::Accent => "accent",
            Self::AccentLight => "accent-light",
        }
    }
}

/// Complete set of role colors for one palette
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    pub name: PaletteName,

    // Surfaces
    pub background: Color,
    pub card: Color,
    pub card_alt: Color,
    pub border: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand
    pub accent: Color,
    pub accent_light: Color,
}

/// Archery red
const ACCENT: Color = Color::from_hex(0x8B0000);

pub static DARK_PALETTE: Palette = Palette {
    name: PaletteName::Dark,
    background: Color::from_hex(0x000000),
    card: Color::from_hex(0x111111),
    card_alt: Color::from_hex(0x1A1A1A),
    border: Color::from_hex(0x222222),
    text: Color::from_hex(0xFFFFFF),
    text_secondary: Color::from_hex(0x888888),
    text_muted: Color::from_hex(0x666666),
    accent: ACCENT,
    accent_light: Color::from_hex(0x2A1A1A),
};

pub static LIGHT_PALETTE: Palette = Palette {
    name: PaletteName::Light,
    background: Color::from_hex(0xF5F5F5),
    card: Color::from_hex(0xFFFFFF),
    card_alt: Color::from_hex(0xF0F0F0),
    border: Color::from_hex(0xE0E0E0),
    text: Color::from_hex(0x000000),
    text_secondary: Color::from_hex(0x555555),
    text_muted: Color::from_hex(0x888888),
    accent: ACCENT,
    accent_light: Color::from_hex(0xFFE5E5),
};

impl Palette {
    /// The static palette for `name`
    pub fn for_name(name: PaletteName) -> &'static Palette {
        match name {
            PaletteName::Dark => &DARK_PALETTE,
            PaletteName::Light => &LIGHT_PALETTE,
        }
    }

    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Card => self.card,
            ColorRole::CardAlt => self.card_alt,
            ColorRole::Border => self.border,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextMuted => self.text_muted,
            ColorRole::Accent => self.accent,
            ColorRole::AccentLight => self.accent_light,
        }
    }

    /// Every role with its color, in [`ColorRole::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// CSS variable map keyed by [`ColorRole::css_name`].
    ///
    /// ```ignore
    /// let vars = LIGHT_PALETTE.to_css_variable_map();
    /// // vars["card-alt"] == "#f0f0f0"
    /// ```
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(role, color)| (role.css_name().to_string(), color.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palettes_are_keyed_by_their_own_name() {
        assert_eq!(Palette::for_name(PaletteName::Dark).name, PaletteName::Dark);
        assert_eq!(Palette::for_name(PaletteName::Light).name, PaletteName::Light);
    }

    #[test]
    fn accent_is_shared_and_surfaces_differ() {
        assert_eq!(DARK_PALETTE.accent, LIGHT_PALETTE.accent);
        for role in [ColorRole::Background, ColorRole::Text, ColorRole::AccentLight] {
            assert_ne!(DARK_PALETTE.get(role), LIGHT_PALETTE.get(role), "{role:?}");
        }
    }

    #[test]
    fn css_map_covers_every_role() {
        let vars = LIGHT_PALETTE.to_css_variable_map();
        assert_eq!(vars.len(), ColorRole::ALL.len());
        assert_eq!(vars["card-alt"], "#f0f0f0");
        assert_eq!(vars["accent"], "#8b0000");
        assert_eq!(DARK_PALETTE.to_css_variable_map()["background"], "#000000");
    }
}
