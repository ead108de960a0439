// SPDX-License-Identifier: MPL-2.0
//! Blocking alert shown after a failed generation.
//!
//! The dialog is stacked over the whole window; the backdrop swallows input
//! so nothing underneath reacts until the alert is dismissed.

use crate::i18n::I18n;
use crate::studio::Alert;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, column, container, opaque, row, text, Space, Stack};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

/// Renders `base` with the alert dialog on top.
pub fn view<'a, M>(
    base: Element<'a, M>,
    alert: &'a Alert,
    i18n: &'a I18n,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let content = dialog(alert, i18n).map(on_message);
    let overlay = opaque(center(opaque(content)).style(styles::container::modal_backdrop));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}

fn dialog<'a>(alert: &'a Alert, i18n: &'a I18n) -> Element<'a, Message> {
    let mut body = column![
        text(i18n.tr("alert-title"))
            .size(typography::TITLE_MD)
            .color(palette::ERROR_500),
        text(i18n.tr(alert.key)).size(typography::BODY),
    ]
    .spacing(spacing::SM);

    if let Some(detail) = &alert.detail {
        body = body.push(
            text(i18n.tr_with_args("alert-detail", &[("detail", detail.as_str())]))
                .size(typography::CAPTION)
                .color(palette::SLATE_500),
        );
    }

    body = body.push(
        row![
            Space::new().width(Length::Fill),
            button(text(i18n.tr("alert-dismiss")).size(typography::BODY))
                .on_press(Message::Dismiss)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        ],
    );

    container(body)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}
