// SPDX-License-Identifier: MPL-2.0
//! Container styles for the gallery surface and its tiles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Gallery card holding the header and the grid.
pub fn surface(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One-pixel rule under the header.
pub fn divider(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).outline)),
        ..Default::default()
    }
}

/// Rounded, outlined frame around a tile's image.
pub fn tile_frame(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: ColorScheme::for_theme(theme).outline,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tint laid over a tile: light when selected, dark when hovered.
pub fn tile_tint(selected: bool, hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let tint = if selected {
            Some(scheme.selected_tint)
        } else if hovered {
            Some(scheme.hover_tint)
        } else {
            None
        };

        container::Style {
            background: tint.map(Background::Color),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Floating copy of the dragged tile.
pub fn drag_overlay(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            color: scheme.outline,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..shadow::LG.color
            },
            ..shadow::LG
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_tint_prefers_selection_over_hover() {
        let theme = Theme::Light;
        let scheme = ColorScheme::light();

        let selected = tile_tint(true, true)(&theme);
        assert_eq!(
            selected.background,
            Some(Background::Color(scheme.selected_tint))
        );

        let hovered = tile_tint(false, true)(&theme);
        assert_eq!(hovered.background, Some(Background::Color(scheme.hover_tint)));

        assert!(tile_tint(false, false)(&theme).background.is_none());
    }

    #[test]
    fn tile_frame_has_outline() {
        let style = tile_frame(&Theme::Dark);
        assert_eq!(style.border.color, ColorScheme::dark().outline);
        assert!(style.background.is_none());
    }

    #[test]
    fn drag_overlay_casts_shadow() {
        let style = drag_overlay(&Theme::Light);
        assert!(style.shadow.blur_radius > 0.0);
        assert!(style.background.is_some());
    }
}
