// SPDX-License-Identifier: MPL-2.0
//! Animated progress spinner drawn on a Canvas.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Sweep of the rotating arc (two thirds of a turn).
const ARC_SWEEP: f32 = 4.0 * PI / 3.0;

/// Line segments used to approximate the arc.
const ARC_SEGMENTS: u32 = 24;

/// Stroke width of the track and the arc.
const STROKE_WIDTH: f32 = 4.0;

/// Spinner shown while an upload is in flight.
///
/// The rotation angle is owned by the caller and advanced by the tick
/// subscription; the widget itself is stateless between frames.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
}

impl AnimatedSpinner {
    /// Creates a spinner at the given rotation angle.
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Idle track under the moving arc
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: opacity::TRACK,
                        ..palette::PRIMARY_400
                    }),
                );

                // The arc starts at the top and sweeps clockwise
                let start_angle = self.rotation - PI / 2.0;

                // Approximate the arc with short line segments
                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                #[allow(clippy::cast_precision_loss)]
                for segment in 1..=ARC_SEGMENTS {
                    let t = segment as f32 / ARC_SEGMENTS as f32;
                    let angle = start_angle + ARC_SWEEP * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(palette::PRIMARY_400)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
