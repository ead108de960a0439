// SPDX-License-Identifier: MPL-2.0
//! Create screen: prompt form on the left, result panel on the right.

use crate::app::config::defaults::{GUIDANCE_STEP, MAX_GUIDANCE, MAX_STEPS, MIN_GUIDANCE, MIN_STEPS};
use crate::i18n::I18n;
use crate::studio::{Phase, Studio};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::previews::{Preview, Previews};
use crate::ui::styles;
use crate::ui::widgets::ProgressRing;
use iced::keyboard::{self, key};
use iced::widget::{
    button, center, column, container, image, progress_bar, row, slider, text, text_editor,
    text_input, Space,
};
use iced::{alignment::Horizontal, alignment::Vertical, ContentFit, Element, Length};

/// Widget state owned by the screen rather than the studio.
#[derive(Debug, Default)]
pub struct State {
    prompt: text_editor::Content,
}

impl State {
    #[must_use]
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: text_editor::Content::with_text(prompt),
        }
    }

    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.prompt.text()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub studio: &'a Studio,
    pub previews: &'a Previews,
}

#[derive(Debug, Clone)]
pub enum Message {
    PromptEdited(text_editor::Action),
    NegativePromptChanged(String),
    StepsChanged(u32),
    GuidanceChanged(f32),
    ToggleAdvanced,
    Generate,
    Download,
}

/// What the application should do after a screen message.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    PromptChanged(String),
    NegativePromptChanged(String),
    StepsChanged(u32),
    GuidanceChanged(f32),
    ToggleAdvanced,
    Generate,
    Download,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::PromptEdited(action) => {
            let is_edit = action.is_edit();
            state.prompt.perform(action);
            if is_edit {
                Event::PromptChanged(state.prompt.text())
            } else {
                Event::None
            }
        }
        Message::NegativePromptChanged(value) => Event::NegativePromptChanged(value),
        Message::StepsChanged(steps) => Event::StepsChanged(steps),
        Message::GuidanceChanged(guidance) => Event::GuidanceChanged(guidance),
        Message::ToggleAdvanced => Event::ToggleAdvanced,
        Message::Generate => Event::Generate,
        Message::Download => Event::Download,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = form_card(&ctx);
    let result = result_card(&ctx);

    row![
        container(form).width(Length::Fixed(sizing::FORM_WIDTH)),
        container(result).width(Length::Fill).height(Length::Fill),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG)
    .height(Length::Fill)
    .into()
}

fn form_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let studio = ctx.studio;

    let prompt = text_editor(&ctx.state.prompt)
        .placeholder(i18n.tr("create-prompt-placeholder"))
        .on_action(Message::PromptEdited)
        .key_binding(|key_press| {
            let is_enter = matches!(key_press.key, keyboard::Key::Named(key::Named::Enter));
            if is_enter && (key_press.modifiers.control() || key_press.modifiers.command()) {
                Some(text_editor::Binding::Custom(Message::Generate))
            } else {
                text_editor::Binding::from_key_press(key_press)
            }
        })
        .height(Length::Fixed(sizing::PROMPT_HEIGHT))
        .padding(spacing::SM);

    let mut form = column![
        text(i18n.tr("create-prompt-label")).size(typography::BODY_LG),
        prompt,
        text(i18n.tr("create-shortcut-hint"))
            .size(typography::CAPTION)
            .color(palette::SLATE_500),
    ]
    .spacing(spacing::SM);

    let toggle_key = if studio.show_advanced() {
        "create-advanced-hide"
    } else {
        "create-advanced-show"
    };
    form = form.push(
        button(text(i18n.tr(toggle_key)).size(typography::BODY))
            .on_press(Message::ToggleAdvanced)
            .padding([spacing::XXS, 0.0])
            .style(styles::button::ghost),
    );

    if studio.show_advanced() {
        form = form.push(advanced_options(ctx));
    }

    let label_key = if studio.is_loading() {
        "create-generating-button"
    } else {
        "create-generate-button"
    };
    let generate = button(
        center(text(i18n.tr(label_key)).size(typography::BODY_LG))
            .height(Length::Fixed(sizing::GENERATE_BUTTON_HEIGHT)),
    )
    .width(Length::Fill)
    .on_press_maybe(studio.can_generate().then_some(Message::Generate))
    .style(styles::button::primary);

    form = form.push(Space::new().height(Length::Fixed(spacing::XS)));
    form = form.push(generate);

    container(form)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn advanced_options<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let settings = ctx.studio.settings();
    let steps = settings.steps();
    let guidance = settings.guidance();

    let negative = column![
        text(i18n.tr("create-negative-label")).size(typography::BODY),
        text_input(
            &i18n.tr("create-negative-placeholder"),
            ctx.studio.negative_prompt()
        )
        .on_input(Message::NegativePromptChanged)
        .padding(spacing::XS),
    ]
    .spacing(spacing::XXS);

    let steps_row = column![
        row![
            text(i18n.tr("create-steps-label")).size(typography::BODY),
            Space::new().width(Length::Fill),
            text(i18n.tr_with_count("create-steps-value", "steps", steps as usize))
                .size(typography::CAPTION)
                .color(palette::SLATE_500),
        ],
        slider(MIN_STEPS..=MAX_STEPS, steps, Message::StepsChanged).style(styles::progress::slider),
    ]
    .spacing(spacing::XXS);

    let guidance_row = column![
        row![
            text(i18n.tr("create-guidance-label")).size(typography::BODY),
            Space::new().width(Length::Fill),
            text(format!("{guidance:.1}"))
                .size(typography::CAPTION)
                .color(palette::SLATE_500),
        ],
        slider(MIN_GUIDANCE..=MAX_GUIDANCE, guidance, Message::GuidanceChanged)
            .step(GUIDANCE_STEP)
            .style(styles::progress::slider),
    ]
    .spacing(spacing::XXS);

    column![negative, steps_row, guidance_row]
        .spacing(spacing::MD)
        .into()
}

fn result_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let studio = ctx.studio;

    let in_flight = matches!(studio.phase(), Phase::Submitting | Phase::Settling { .. });
    let body: Element<'a, Message> = if in_flight {
        progress_panel(i18n, studio)
    } else if let Some(url) = studio.displayed() {
        displayed_image(i18n, ctx.previews, url)
    } else {
        empty_state(i18n)
    };

    container(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn progress_panel<'a>(i18n: &'a I18n, studio: &'a Studio) -> Element<'a, Message> {
    let progress = studio.progress();
    let ring = ProgressRing::new(progress.value()).into_element();
    let percent = text(format!("{}%", progress.percent())).size(typography::TITLE_LG);

    let content = column![
        ring,
        percent,
        text(i18n.tr("create-progress-caption"))
            .size(typography::CAPTION)
            .color(palette::SLATE_500),
        progress_bar(0.0..=100.0, progress.value())
            .length(Length::Fixed(sizing::PROGRESS_WIDTH))
            .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
            .style(styles::progress::bar),
        text(i18n.tr("create-progress-message")).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .align_x(Horizontal::Center);

    center(content).into()
}

fn displayed_image<'a>(i18n: &'a I18n, previews: &'a Previews, url: &str) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match previews.get(url) {
        Some(Preview::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(Preview::Failed) => center(
            text(i18n.tr("create-result-failed"))
                .size(typography::BODY)
                .color(palette::SLATE_500),
        )
        .into(),
        Some(Preview::Loading) | None => center(
            text(i18n.tr("create-result-loading"))
                .size(typography::BODY)
                .color(palette::SLATE_500),
        )
        .into(),
    };

    let header = row![
        text(i18n.tr("create-result-title")).size(typography::TITLE_MD),
        Space::new().width(Length::Fill),
        button(text(i18n.tr("create-download-button")).size(typography::BODY))
            .on_press(Message::Download)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary),
    ]
    .align_y(Vertical::Center);

    column![
        header,
        container(picture)
            .padding(spacing::XS)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::image_frame),
    ]
    .spacing(spacing::MD)
    .into()
}

fn empty_state<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let illustration = container(center(text("✦").size(typography::DISPLAY)))
        .width(Length::Fixed(sizing::EMPTY_ILLUSTRATION))
        .height(Length::Fixed(sizing::EMPTY_ILLUSTRATION))
        .style(styles::container::illustration);

    center(
        column![
            illustration,
            text(i18n.tr("create-result-empty-title")).size(typography::TITLE_MD),
            text(i18n.tr("create-result-empty-hint"))
                .size(typography::BODY)
                .color(palette::SLATE_500),
        ]
        .spacing(spacing::SM)
        .align_x(Horizontal::Center),
    )
    .into()
}
