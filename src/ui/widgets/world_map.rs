// SPDX-License-Identifier: MPL-2.0
//! Minimal world-map canvas that marks one coordinate on a graticule.
//!
//! This stands in for an embedded map tile view: a flat world grid with a
//! marker whose position is derived purely from the coordinate, so no
//! network or tile data is involved.

use crate::geo::Coordinates;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Spacing of graticule lines in degrees.
const GRID_STEP_DEGREES: f64 = 30.0;

/// Radius of the marker dot.
const MARKER_RADIUS: f32 = 5.0;

/// Extra radius of the halo ring around the marker.
const MARKER_HALO: f32 = 3.0;

/// Map canvas with a marker at one coordinate.
pub struct WorldMap {
    cache: Cache,
    coordinates: Coordinates,
}

impl WorldMap {
    /// Creates a map centered on the usual equirectangular layout with a
    /// marker at the given coordinates.
    #[must_use]
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            cache: Cache::default(),
            coordinates,
        }
    }

    /// Creates a Canvas widget spanning the full width at a fixed height.
    pub fn into_element<Message: 'static>(self, height: f32) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }
}

/// Projects a coordinate onto a `width` x `height` surface.
///
/// Plain equirectangular projection: longitude maps linearly to x and
/// latitude to y, with (0, 0) landing at the surface center.
#[must_use]
pub fn project(coordinates: Coordinates, width: f32, height: f32) -> Point {
    let x = (coordinates.longitude() + 180.0) / 360.0 * f64::from(width);
    let y = (90.0 - coordinates.latitude()) / 180.0 * f64::from(height);
    #[allow(clippy::cast_possible_truncation)]
    Point::new(x as f32, y as f32)
}

impl<Message> canvas::Program<Message> for WorldMap {
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
                let width = frame.width();
                let height = frame.height();

                frame.fill(
                    &Path::rectangle(Point::ORIGIN, Size::new(width, height)),
                    palette::GRAY_900,
                );

                let grid_stroke = Stroke::default().with_width(1.0).with_color(Color {
                    a: opacity::GRID_LINE,
                    ..palette::GRAY_700
                });
                let axis_stroke = Stroke::default().with_width(1.0).with_color(Color {
                    a: opacity::GRID_AXIS,
                    ..palette::GRAY_700
                });

                // Meridians every 30°; the prime meridian is emphasized
                for step in 0..=12 {
                    let longitude = -180.0 + f64::from(step) * GRID_STEP_DEGREES;
                    let x = project(Coordinates::new(0.0, longitude), width, height).x;
                    let line = Path::line(Point::new(x, 0.0), Point::new(x, height));
                    let stroke = if step == 6 { axis_stroke } else { grid_stroke };
                    frame.stroke(&line, stroke);
                }

                // Parallels every 30°; the equator is emphasized
                for step in 0..=6 {
                    let latitude = 90.0 - f64::from(step) * GRID_STEP_DEGREES;
                    let y = project(Coordinates::new(latitude, 0.0), width, height).y;
                    let line = Path::line(Point::new(0.0, y), Point::new(width, y));
                    let stroke = if step == 3 { axis_stroke } else { grid_stroke };
                    frame.stroke(&line, stroke);
                }

                // Marker: solid dot with a halo ring
                let position = project(self.coordinates, width, height);
                frame.fill(&Path::circle(position, MARKER_RADIUS), palette::ERROR_500);
                frame.stroke(
                    &Path::circle(position, MARKER_RADIUS + MARKER_HALO),
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: opacity::HALO,
                        ..palette::ERROR_500
                    }),
                );
            });

        vec![geometry]
    }
}
