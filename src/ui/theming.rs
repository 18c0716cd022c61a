// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the gallery's color scheme.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the gallery draws with on top of the Iced palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Gallery card background.
    pub surface: Color,
    pub text: Color,
    /// Tile outlines, placeholder dashes and the header divider.
    pub outline: Color,
    /// Tint over a selected tile.
    pub selected_tint: Color,
    /// Tint over a hovered, unselected tile.
    pub hover_tint: Color,
    /// Delete action in the header.
    pub danger: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text: palette::GRAY_900,
            outline: Color {
                a: opacity::OUTLINE,
                ..palette::GRAY_500
            },
            selected_tint: Color {
                a: opacity::TILE_TINT,
                ..palette::WHITE
            },
            hover_tint: Color {
                a: opacity::TILE_TINT,
                ..palette::BLACK
            },
            danger: palette::ERROR_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_800,
            text: palette::WHITE,
            outline: Color {
                a: opacity::OUTLINE,
                ..palette::GRAY_400
            },
            selected_tint: Color {
                a: opacity::TILE_TINT,
                ..palette::WHITE
            },
            hover_tint: Color {
                a: opacity::TILE_TINT,
                ..palette::BLACK
            },
            danger: palette::ERROR_500,
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, asks the OS and falls back to dark if it can't tell.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::light().surface.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        assert!(ColorScheme::dark().surface.r < 0.2);
    }

    #[test]
    fn tints_differ_between_selected_and_hover() {
        let scheme = ColorScheme::light();
        assert!(scheme.selected_tint.r > scheme.hover_tint.r);
        assert_eq!(scheme.selected_tint.a, scheme.hover_tint.a);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // Depends on the OS; only check it doesn't panic.
        let _ = ThemeMode::System.is_dark();
    }
}
