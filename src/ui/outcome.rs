// SPDX-License-Identifier: MPL-2.0
//! Outcome presenter: the loading, failure, and result views.
//!
//! A stateless selector over the workflow phase. At most one of the three
//! outcome views renders at a time; `Idle` and `Selected` render nothing.

use crate::geo::Coordinates;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, WorldMap};
use crate::workflow::Phase;
use iced::widget::{Column, Container, Space, Text};
use iced::{alignment, Element, Font, Length};

/// Renders the outcome view for the current phase.
///
/// Nothing here is interactive, so the element is generic over the message
/// type. `spinner_rotation` is the angle owned by the application and
/// advanced by the tick subscription.
pub fn view<'a, Message: 'static>(phase: &'a Phase, spinner_rotation: f32) -> Element<'a, Message> {
    match phase {
        Phase::Submitting => submitting(spinner_rotation),
        Phase::Failed(message) => failure(message),
        Phase::Succeeded(coordinates) => success(*coordinates),
        Phase::Idle | Phase::Selected => Space::new().into(),
    }
}

/// Spinner and progress label shown while the upload runs.
fn submitting<Message: 'static>(rotation: f32) -> Element<'static, Message> {
    let spinner = AnimatedSpinner::new(rotation).into_element();

    let label = Text::new("Extracting Geolocation...")
        .size(typography::BODY_LG)
        .color(palette::PRIMARY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(label);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Failure panel with the user-facing message.
fn failure<Message: 'static>(message: &str) -> Element<'_, Message> {
    let title = Text::new("An Error Occurred")
        .size(typography::TITLE_SM)
        .color(palette::ERROR_500);

    let detail = Text::new(message)
        .size(typography::BODY)
        .color(palette::GRAY_100);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(detail);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::error_panel)
        .into()
}

/// Result card: fixed-precision coordinates, the map, and the map link.
fn success<Message: 'static>(coordinates: Coordinates) -> Element<'static, Message> {
    let title = Text::new("Location Found!")
        .size(typography::TITLE_SM)
        .color(palette::SUCCESS_500);

    let latitude = Text::new(format!("Lat: {}", coordinates.latitude_fixed()))
        .size(typography::BODY)
        .font(Font::MONOSPACE)
        .color(palette::GRAY_100);

    let longitude = Text::new(format!("Lon: {}", coordinates.longitude_fixed()))
        .size(typography::BODY)
        .font(Font::MONOSPACE)
        .color(palette::GRAY_100);

    let coordinate_block = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(latitude)
            .push(longitude),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::mono_panel);

    let map = Container::new(WorldMap::new(coordinates).into_element(sizing::MAP_HEIGHT))
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::map_frame);

    let link = Text::new(coordinates.map_url())
        .size(typography::CAPTION)
        .color(palette::PRIMARY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(coordinate_block)
        .push(map)
        .push(link);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
