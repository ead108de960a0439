// SPDX-License-Identifier: MPL-2.0
//! Top bar: logo, tab switcher and backend health badge.

use crate::i18n::I18n;
use crate::studio::{BackendStatus, Tab};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, column, container, row, text, tooltip, Space};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tab: Tab,
    pub backend: &'a BackendStatus,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    RecheckBackend,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logo = container(center(text("G").size(typography::TITLE_MD)))
        .width(Length::Fixed(sizing::LOGO))
        .height(Length::Fixed(sizing::LOGO))
        .style(styles::container::logo);

    let brand = row![
        logo,
        column![
            text(ctx.i18n.tr("app-name")).size(typography::TITLE_MD),
            text(ctx.i18n.tr("app-tagline"))
                .size(typography::CAPTION)
                .color(palette::SLATE_500),
        ]
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let tabs = row![
        tab_button(ctx.i18n.tr("tab-create"), Tab::Create, ctx.tab),
        tab_button(ctx.i18n.tr("tab-gallery"), Tab::Gallery, ctx.tab),
    ]
    .spacing(spacing::XS);

    let bar = row![
        brand,
        Space::new().width(Length::Fill),
        health_badge(ctx.i18n, ctx.backend),
        tabs,
    ]
    .spacing(spacing::MD)
    .align_y(Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::container::header)
        .into()
}

fn tab_button<'a>(label: String, tab: Tab, active: Tab) -> Element<'a, Message> {
    let style = if tab == active {
        styles::button::tab_selected
    } else {
        styles::button::ghost
    };
    button(text(label).size(typography::BODY))
        .on_press(Message::SelectTab(tab))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}

/// Label key, color and optional device for the current health state.
fn badge_parts(backend: &BackendStatus) -> (&'static str, iced::Color, Option<&str>) {
    match backend {
        BackendStatus::Unknown => ("backend-checking", palette::SLATE_400, None),
        BackendStatus::Online {
            model_loaded: true,
            device,
        } => ("backend-online", palette::SUCCESS_500, Some(device)),
        BackendStatus::Online {
            model_loaded: false,
            device,
        } => ("backend-model-loading", palette::WARNING_500, Some(device)),
        BackendStatus::Offline => ("backend-offline", palette::ERROR_500, None),
    }
}

fn health_badge<'a>(i18n: &'a I18n, backend: &'a BackendStatus) -> Element<'a, Message> {
    let (key, color, device) = badge_parts(backend);
    let label = match device {
        Some(device) => i18n.tr_with_args(key, &[("device", device)]),
        None => i18n.tr(key),
    };

    let dot = container(Space::new())
        .width(Length::Fixed(sizing::STATUS_DOT))
        .height(Length::Fixed(sizing::STATUS_DOT))
        .style(styles::container::status_dot(color));

    let badge = button(
        row![dot, text(label).size(typography::CAPTION)]
            .spacing(spacing::XS)
            .align_y(Vertical::Center),
    )
    .on_press(Message::RecheckBackend)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::badge);

    tooltip(
        badge,
        container(text(i18n.tr("backend-recheck-tooltip")).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_reflects_model_state() {
        let ready = BackendStatus::Online {
            model_loaded: true,
            device: "cuda".into(),
        };
        assert_eq!(badge_parts(&ready).0, "backend-online");
        assert_eq!(badge_parts(&ready).2, Some("cuda"));

        let loading = BackendStatus::Online {
            model_loaded: false,
            device: "cpu".into(),
        };
        assert_eq!(badge_parts(&loading).0, "backend-model-loading");

        assert_eq!(badge_parts(&BackendStatus::Offline).0, "backend-offline");
        assert_eq!(badge_parts(&BackendStatus::Unknown).0, "backend-checking");
    }
}
