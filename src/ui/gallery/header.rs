// SPDX-License-Identifier: MPL-2.0
//! Gallery header: title or selection count, plus the delete action.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment, font, Element, Font, Length, Padding};

const TITLE_FONT: Font = Font {
    weight: font::Weight::Semibold,
    ..Font::DEFAULT
};

/// Header title for `selected` checked tiles.
#[must_use]
pub fn title(i18n: &I18n, selected: usize) -> String {
    if selected == 0 {
        i18n.tr("gallery-title")
    } else {
        let count = selected.to_string();
        i18n.tr_with_args("gallery-selected-count", &[("count", count.as_str())])
    }
}

pub fn view(i18n: &I18n, selected: usize) -> Element<'_, Message> {
    let mut row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(title(i18n, selected))
                    .size(typography::TITLE_MD)
                    .font(TITLE_FONT),
            )
            .width(Length::Fill),
        );

    if selected > 0 {
        let count = selected.to_string();
        let label = i18n.tr_with_args("gallery-delete-button", &[("count", count.as_str())]);
        row = row.push(
            button(text(label).size(typography::BODY))
                .padding(Padding::ZERO)
                .style(styles::button::danger_link)
                .on_press(Message::DeleteSelected),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::XXL])
        .align_y(alignment::Vertical::Center)
        .into()
}
