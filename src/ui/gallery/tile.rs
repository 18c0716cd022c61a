// SPDX-License-Identifier: MPL-2.0
//! A single gallery tile and the trailing "Add Images" slot.

use super::component::Message;
use crate::gallery::layout::{CHECKBOX_INSET, CHECKBOX_SIZE};
use crate::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::components::dashed_outline::{self, DashedOutline};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::touch_drag_handle;
use iced::widget::{checkbox, image, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Padding, Size};

/// Everything a tile needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct TileModel<'a> {
    pub record: &'a ImageRecord,
    pub size: Size,
    pub selected: bool,
    pub hovered: bool,
    /// This tile is the one being dragged: only its empty slot is drawn.
    pub dragging: bool,
    /// A finger press on the tile body starts a drag instead of scrolling.
    pub touch_drag: bool,
}

impl TileModel<'_> {
    /// The checkbox widget exists on every idle tile so a tap can reach it,
    /// even while it is not drawn.
    #[must_use]
    pub fn has_checkbox(&self) -> bool {
        !self.dragging
    }

    /// Checkbox is always shown once selected, otherwise only on hover.
    #[must_use]
    pub fn shows_checkbox(&self) -> bool {
        self.has_checkbox() && (self.selected || self.hovered)
    }
}

pub fn view(model: TileModel<'_>) -> Element<'_, Message> {
    let width = Length::Fixed(model.size.width);
    let height = Length::Fixed(model.size.height);

    if model.dragging {
        return Container::new(dashed_outline::wrap(
            DashedOutline {
                alpha: Some(opacity::OUTLINE_DRAGGING),
            },
            Container::new(Text::new("")),
        ))
        .width(width)
        .height(height)
        .into();
    }

    let picture = Container::new(
        image(model.record.source().handle().clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .clip(true)
    .style(styles::container::tile_frame);

    let tint = Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::tile_tint(model.selected, model.hovered));

    let mut layers = Stack::new().push(picture).push(tint);

    if model.has_checkbox() {
        let id = model.record.id();
        let selection_box = checkbox(model.selected)
            .size(CHECKBOX_SIZE)
            .style(styles::checkbox::selection(model.shows_checkbox()))
            .on_toggle(move |_| Message::ToggleSelected(id));
        layers = layers.push(Container::new(selection_box).padding(Padding {
            top: CHECKBOX_INSET,
            left: CHECKBOX_INSET,
            ..Padding::ZERO
        }));
    }

    let tile = Container::new(layers.width(Length::Fill).height(Length::Fill))
        .width(width)
        .height(height);

    touch_drag_handle(tile).enabled(model.touch_drag).into()
}

/// Decorative "Add Images" slot after the last tile.
pub fn view_add_images(i18n: &I18n, size: Size) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icons::themed(icons::sized(icons::image_plus(), sizing::ICON_MD)))
        .push(Text::new(i18n.tr("gallery-add-images")).size(typography::BODY));

    Container::new(dashed_outline::wrap(
        DashedOutline::default(),
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    ))
    .width(Length::Fixed(size.width))
    .height(Length::Fixed(size.height))
    .into()
}
