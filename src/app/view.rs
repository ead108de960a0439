// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::I18n;
use crate::studio::{Studio, Tab};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::previews::Previews;
use crate::ui::{alert, create, gallery, header, styles};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub studio: &'a Studio,
    pub create: &'a create::State,
    pub previews: &'a Previews,
    pub notifications: &'a Manager,
}

/// Renders the header, the active tab, the alert (if any) and the toasts.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let studio = ctx.studio;

    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        tab: studio.tab(),
        backend: studio.backend(),
    })
    .map(Message::Header);

    let screen: Element<'_, Message> = match studio.tab() {
        Tab::Create => create::view(create::ViewContext {
            i18n: ctx.i18n,
            state: ctx.create,
            studio,
            previews: ctx.previews,
        })
        .map(Message::Create),
        Tab::Gallery => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            entries: studio.gallery(),
            base: studio.base(),
            previews: ctx.previews,
        })
        .map(Message::Gallery),
    };

    let content: Element<'_, Message> = Container::new(
        Column::new()
            .push(header_view)
            .push(screen)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::window)
    .into();

    let content = match studio.alert() {
        Some(studio_alert) => alert::view(content, studio_alert, ctx.i18n, Message::Alert),
        None => content,
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
