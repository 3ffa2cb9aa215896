// SPDX-License-Identifier: MPL-2.0
//! View composition for the single-page layout.
//!
//! The page is one centered column: heading, selection surface, submit
//! control, and the outcome view for the current phase.

use super::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{outcome, styles, uploader};
use crate::workflow;
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Borrows of everything the page needs to render.
pub struct ViewContext<'a> {
    pub uploader: &'a uploader::State,
    pub workflow: &'a workflow::State,
    pub spinner_rotation: f32,
}

/// Renders the page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selection = uploader::view(
        ctx.uploader,
        &uploader::ViewEnv {
            candidate: ctx.workflow.candidate(),
            locked: ctx.workflow.is_submitting(),
        },
    )
    .map(Message::Uploader);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::CONTENT_WIDTH))
        .align_x(alignment::Horizontal::Center)
        .push(header())
        .push(selection);

    // The submit control only exists while a file is selected; during a
    // round it stays visible but parked.
    if ctx.workflow.has_candidate() {
        content = content.push(submit_control(ctx.workflow));
    }

    content = content.push(outcome::view(ctx.workflow.phase(), ctx.spinner_rotation));

    let page = Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .align_x(alignment::Horizontal::Center);

    Container::new(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

/// Application heading and tagline.
fn header() -> Element<'static, Message> {
    let title = Text::new("GeoLocator")
        .size(typography::TITLE_LG)
        .color(palette::PRIMARY_400);

    let tagline = Text::new("Upload a JPEG image to instantly extract its hidden GPS coordinates.")
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .align_x(alignment::Horizontal::Center);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(tagline)
        .into()
}

/// The submit control. Built without `on_press` whenever it must not fire,
/// which renders it in the disabled style.
fn submit_control(workflow: &workflow::State) -> Element<'_, Message> {
    let label = if workflow.is_submitting() {
        "Processing..."
    } else {
        "Find Location"
    };

    let text = Text::new(label)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut control = button(text)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if workflow.can_submit() {
        control = control.on_press(Message::SubmitRequested);
    }

    control.into()
}
