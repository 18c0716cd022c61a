// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless icon button that only shows a background on hover.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only destructive action, like the header's "Delete Files".
/// Darkens on hover.
pub fn danger_link(theme: &Theme, status: button::Status) -> button::Style {
    let danger = ColorScheme::for_theme(theme).danger;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            r: danger.r * 0.8,
            g: danger.g * 0.8,
            b: danger.b * 0.8,
            ..danger
        },
        button::Status::Active => danger,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..danger
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_button_is_transparent_until_hovered() {
        let theme = Theme::Dark;
        assert!(ghost(&theme, button::Status::Active).background.is_none());
        assert!(ghost(&theme, button::Status::Hovered).background.is_some());
        assert_ne!(
            ghost(&theme, button::Status::Hovered).background,
            ghost(&theme, button::Status::Pressed).background
        );
    }

    #[test]
    fn danger_link_uses_scheme_danger_color() {
        let theme = Theme::Light;
        let style = danger_link(&theme, button::Status::Active);
        assert_eq!(style.text_color, ColorScheme::light().danger);
        assert!(style.background.is_none());
        assert_ne!(
            danger_link(&theme, button::Status::Hovered).text_color,
            style.text_color
        );
    }
}
