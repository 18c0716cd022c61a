// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are SVG files from `assets/icons/`, embedded at compile time via
//! `include_bytes!`. Handles are cached using `OnceLock`, so each icon is
//! parsed once and shared afterwards.
//!
//! Outline icons drawn with `currentColor` pick up the theme's text color
//! through [`themed`]; severity icons carry their own fixed colors.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    image_plus,
    "image_plus.svg",
    "Picture frame with a plus sign."
);
define_icon!(checkmark, "checkmark.svg", "Green circled check mark.");
define_icon!(info, "info.svg", "Blue circled letter i.");
define_icon!(warning, "warning.svg", "Orange triangle with exclamation mark.");
define_icon!(cross, "cross.svg", "Two crossed strokes.");

/// Sets a square size on an icon.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an outline icon with the theme's text color.
#[must_use]
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_created_without_panicking() {
        let _ = sized(image_plus(), 24.0);
        let _ = themed(cross());
        let _ = checkmark();
        let _ = info();
        let _ = warning();
    }
}
