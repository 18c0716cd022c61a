// SPDX-License-Identifier: MPL-2.0
//! Checkbox styles.

use crate::ui::design_tokens::opacity;
use iced::widget::checkbox;
use iced::{Background, Color, Theme};

/// Tile selection checkbox.
///
/// A hidden checkbox keeps its layout and hit area but draws nothing, so a
/// tap on the corner of an unhovered tile still toggles it.
pub fn selection(visible: bool) -> impl Fn(&Theme, checkbox::Status) -> checkbox::Style {
    move |theme, status| {
        let style = checkbox::primary(theme, status);
        if visible {
            style
        } else {
            hidden(style)
        }
    }
}

fn hidden(style: checkbox::Style) -> checkbox::Style {
    let clear = |color: Color| Color {
        a: opacity::TRANSPARENT,
        ..color
    };
    checkbox::Style {
        background: Background::Color(Color::TRANSPARENT),
        icon_color: clear(style.icon_color),
        border: iced::Border {
            color: clear(style.border.color),
            ..style.border
        },
        text_color: style.text_color.map(clear),
    }
}
