// SPDX-License-Identifier: MPL-2.0
//! Dashed rounded outline, drawn on a canvas since container borders are
//! always solid.

use crate::ui::theming::ColorScheme;
use crate::ui::design_tokens::{border, radius};
use iced::widget::canvas::{self, LineDash, Path, Stroke};
use iced::widget::{Canvas, Stack};
use iced::{mouse, Element, Length, Point, Rectangle, Size, Theme};

const DASH: [f32; 2] = [6.0, 4.0];

/// Outline drawn with the theme's outline color.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashedOutline {
    /// Overrides the scheme's outline alpha.
    pub alpha: Option<f32>,
}

impl<Message> canvas::Program<Message> for DashedOutline {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let mut color = ColorScheme::for_theme(theme).outline;
        if let Some(alpha) = self.alpha {
            color.a = alpha;
        }

        // Inset by half the stroke so the line stays inside the bounds.
        let inset = border::WIDTH_SM / 2.0;
        let path = Path::rounded_rectangle(
            Point::new(inset, inset),
            Size::new(
                (bounds.width - border::WIDTH_SM).max(0.0),
                (bounds.height - border::WIDTH_SM).max(0.0),
            ),
            radius::MD.into(),
        );
        frame.stroke(
            &path,
            Stroke {
                line_dash: LineDash {
                    segments: &DASH,
                    offset: 0,
                },
                ..Stroke::default()
                    .with_color(color)
                    .with_width(border::WIDTH_SM)
            },
        );

        vec![frame.into_geometry()]
    }
}

/// Lays `content` over a dashed outline filling the same area.
pub fn wrap<'a, Message: 'a>(
    outline: DashedOutline,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Stack::new()
        .push(Canvas::new(outline).width(Length::Fill).height(Length::Fill))
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

const _: () = {
    assert!(DASH[0] > 0.0 && DASH[1] > 0.0);
};
