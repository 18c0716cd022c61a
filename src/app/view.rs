// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the gallery with toasts on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewEnv};
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx
        .gallery
        .view(ViewEnv { i18n: ctx.i18n })
        .map(Message::Gallery);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
