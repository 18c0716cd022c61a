// SPDX-License-Identifier: MPL-2.0
//! Floating copy of the dragged image that follows the pointer.

use super::component::Message;
use crate::gallery::ImageRecord;
use crate::ui::styles;
use iced::widget::{image, Container, Text};
use iced::{ContentFit, Element, Length, Padding, Rectangle};

/// Draws `record` at `bounds` (window coordinates) over a full-window layer.
/// Renders an empty layer when there is nothing to show.
pub fn view(dragged: Option<(&ImageRecord, Rectangle)>) -> Element<'_, Message> {
    let Some((record, bounds)) = dragged else {
        return Container::new(Text::new("")).into();
    };

    let ghost = Container::new(
        image(record.source().handle().clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fixed(bounds.width))
    .height(Length::Fixed(bounds.height))
    .clip(true)
    .style(styles::container::drag_overlay);

    // Padding can't be negative; a ghost dragged past the window's top or
    // left edge is pinned there.
    Container::new(ghost)
        .padding(Padding {
            top: bounds.y.max(0.0),
            left: bounds.x.max(0.0),
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
