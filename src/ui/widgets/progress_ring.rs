// SPDX-License-Identifier: MPL-2.0
//! Circular generation progress drawn on a canvas.

use crate::ui::design_tokens::{palette, sizing};
use crate::ui::theming::is_light;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Number of straight segments used for a full turn.
const SEGMENTS_PER_TURN: f32 = 96.0;

/// Ring filled clockwise from the top in proportion to `value` (0-100).
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    value: f32,
}

impl ProgressRing {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 100.0),
        }
    }

    /// Swept angle of the filled arc, in radians.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        self.value / 100.0 * 2.0 * PI
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::PROGRESS_RING))
            .height(Length::Fixed(sizing::PROGRESS_RING))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - sizing::PROGRESS_RING_STROKE;

        let track = if is_light(theme) {
            palette::SLATE_200
        } else {
            palette::SLATE_700
        };
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(sizing::PROGRESS_RING_STROKE)
                .with_color(track),
        );

        let sweep = self.sweep();
        if sweep > 0.0 {
            let start = -PI / 2.0;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            // sweep <= 2π, so at most SEGMENTS_PER_TURN segments
            let segments = ((sweep / (2.0 * PI)) * SEGMENTS_PER_TURN).ceil().max(1.0) as u32;

            let mut arc = canvas::path::Builder::new();
            arc.move_to(Point::new(
                center.x + radius * start.cos(),
                center.y + radius * start.sin(),
            ));
            for i in 1..=segments {
                #[allow(clippy::cast_precision_loss)]
                let angle = start + sweep * (i as f32 / segments as f32);
                arc.line_to(Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }

            frame.stroke(
                &arc.build(),
                Stroke::default()
                    .with_width(sizing::PROGRESS_RING_STROKE)
                    .with_color(palette::PRIMARY_500)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_clamped() {
        assert_eq!(ProgressRing::new(-5.0).sweep(), 0.0);
        assert!((ProgressRing::new(250.0).sweep() - 2.0 * PI).abs() < f32::EPSILON);
    }

    #[test]
    fn half_progress_sweeps_half_a_turn() {
        assert!((ProgressRing::new(50.0).sweep() - PI).abs() < 1e-6);
    }
}
