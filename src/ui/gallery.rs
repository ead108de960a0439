// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: grid of previously generated images.

use crate::api::{ApiBase, GalleryEntry};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::previews::{Preview, Previews};
use crate::ui::styles;
use chrono::{DateTime, TimeZone};
use iced::widget::{button, center, column, container, image, row, scrollable, text, tooltip, Column, Row, Space};
use iced::{alignment::Horizontal, alignment::Vertical, ContentFit, Element, Length};

/// Cards per grid row.
const COLUMNS: usize = 4;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [GalleryEntry],
    pub base: &'a ApiBase,
    pub previews: &'a Previews,
}

#[derive(Debug, Clone)]
pub enum Message {
    View(String),
    Download(String),
    Delete(String),
    StartCreating,
    Refresh,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = row![
        column![
            text(i18n.tr("gallery-title")).size(typography::TITLE_LG),
            text(i18n.tr_with_count("gallery-count", "count", ctx.entries.len()))
                .size(typography::CAPTION)
                .color(palette::SLATE_500),
        ],
        Space::new().width(Length::Fill),
        button(text(i18n.tr("gallery-refresh-button")).size(typography::BODY))
            .on_press(Message::Refresh)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::ghost),
    ]
    .align_y(Vertical::Center);

    let body: Element<'a, Message> = if ctx.entries.is_empty() {
        empty_state(i18n)
    } else {
        let mut grid = Column::new().spacing(spacing::MD);
        for chunk in ctx.entries.chunks(COLUMNS) {
            let mut line = Row::new().spacing(spacing::MD);
            for entry in chunk {
                line = line.push(card(&ctx, entry));
            }
            grid = grid.push(line);
        }
        scrollable(grid).height(Length::Fill).into()
    };

    column![title, body]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .height(Length::Fill)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, entry: &'a GalleryEntry) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let url = ctx.base.resolve(&entry.url);

    let thumbnail: Element<'a, Message> = match ctx.previews.get(&url) {
        Some(Preview::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(Preview::Failed) => center(text("×").size(typography::TITLE_LG).color(palette::SLATE_400)).into(),
        Some(Preview::Loading) | None => center(text("…").size(typography::TITLE_LG).color(palette::SLATE_400)).into(),
    };

    let thumbnail = button(
        container(thumbnail)
            .width(Length::Fixed(sizing::GALLERY_CARD))
            .height(Length::Fixed(sizing::GALLERY_CARD))
            .style(styles::container::image_frame),
    )
    .padding(0)
    .on_press(Message::View(entry.filename.clone()))
    .style(styles::button::ghost);

    let mut caption = column![text(&entry.filename).size(typography::BODY)].spacing(spacing::XXS);
    if let Some(date) = entry.created.and_then(|created| format_created_in(created, &chrono::Local)) {
        caption = caption.push(
            text(i18n.tr_with_args("gallery-created", &[("date", date.as_str())]))
                .size(typography::CAPTION)
                .color(palette::SLATE_500),
        );
    }

    let actions = row![
        button(text(i18n.tr("gallery-view-button")).size(typography::CAPTION))
            .on_press(Message::View(entry.filename.clone()))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::primary),
        Space::new().width(Length::Fill),
        action(i18n.tr("gallery-download-tooltip"), "↓", Message::Download(url), false),
        action(
            i18n.tr("gallery-delete-tooltip"),
            "✕",
            Message::Delete(entry.filename.clone()),
            true,
        ),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    container(column![thumbnail, caption, actions].spacing(spacing::SM))
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::GALLERY_CARD + 2.0 * spacing::SM))
        .style(styles::container::card)
        .into()
}

fn action<'a>(tip: String, glyph: &'a str, message: Message, destructive: bool) -> Element<'a, Message> {
    tooltip(
        button(text(glyph).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::image_action(destructive)),
        container(text(tip).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(container::rounded_box),
        tooltip::Position::Top,
    )
    .into()
}

fn empty_state<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let illustration = container(center(text("▦").size(typography::DISPLAY)))
        .width(Length::Fixed(sizing::EMPTY_ILLUSTRATION))
        .height(Length::Fixed(sizing::EMPTY_ILLUSTRATION))
        .style(styles::container::illustration);

    center(
        column![
            illustration,
            text(i18n.tr("gallery-empty-title")).size(typography::TITLE_MD),
            text(i18n.tr("gallery-empty-hint"))
                .size(typography::BODY)
                .color(palette::SLATE_500),
            button(text(i18n.tr("gallery-empty-cta")).size(typography::BODY_LG))
                .on_press(Message::StartCreating)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        ]
        .spacing(spacing::SM)
        .align_x(Horizontal::Center),
    )
    .into()
}

/// Formats a UNIX timestamp (seconds, possibly fractional) in `tz`.
fn format_created_in<Tz>(created: f64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !created.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = (created * 1000.0).round() as i64;
    let utc = DateTime::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string())
}
