// SPDX-License-Identifier: MPL-2.0
//! Checkmark and xmark glyphs stroked up to a trim fraction.
//!
//! Strokes are defined in unit coordinates and drawn in order; `trim` is the
//! fraction of the combined path length that is visible.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

const CHECKMARK: &[&[(f32, f32)]] = &[&[(0.22, 0.54), (0.42, 0.72), (0.78, 0.32)]];

const XMARK: &[&[(f32, f32)]] = &[
    &[(0.28, 0.28), (0.72, 0.72)],
    &[(0.72, 0.28), (0.28, 0.72)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimShape {
    Checkmark,
    Xmark,
}

impl TrimShape {
    fn strokes(self) -> &'static [&'static [(f32, f32)]] {
        match self {
            TrimShape::Checkmark => CHECKMARK,
            TrimShape::Xmark => XMARK,
        }
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Cuts `strokes` down to the first `trim` fraction of their total length.
///
/// Returns the visible polylines; a partially drawn segment ends at an
/// interpolated point.
pub fn trim_strokes(strokes: &[&[(f32, f32)]], trim: f32) -> Vec<Vec<(f32, f32)>> {
    let total: f32 = strokes
        .iter()
        .flat_map(|stroke| stroke.windows(2))
        .map(|pair| distance(pair[0], pair[1]))
        .sum();
    let mut remaining = total * trim.clamp(0.0, 1.0);
    let mut visible = Vec::new();

    for stroke in strokes {
        if remaining <= 0.0 {
            break;
        }
        let Some(&first) = stroke.first() else {
            continue;
        };

        let mut points = vec![first];
        for pair in stroke.windows(2) {
            let length = distance(pair[0], pair[1]);
            if remaining >= length {
                points.push(pair[1]);
                remaining -= length;
            } else {
                let t = remaining / length;
                points.push((
                    pair[0].0 + (pair[1].0 - pair[0].0) * t,
                    pair[0].1 + (pair[1].1 - pair[0].1) * t,
                ));
                remaining = 0.0;
                break;
            }
        }
        if points.len() > 1 {
            visible.push(points);
        }
    }

    visible
}

pub struct TrimGlyph {
    cache: Cache,
    shape: TrimShape,
    color: Color,
    trim: f32,
    size: f32,
}

impl TrimGlyph {
    #[must_use]
    pub fn new(shape: TrimShape, color: Color, trim: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            shape,
            color,
            trim,
            size,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for TrimGlyph {
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
                let side = frame.width().min(frame.height());
                let to_point = |(x, y): (f32, f32)| Point::new(x * side, y * side);

                let stroke = || {
                    Stroke::default()
                        .with_width(sizing::GLYPH_STROKE * side / sizing::ICON_XXL)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round)
                        .with_line_join(canvas::LineJoin::Round)
                };

                for polyline in trim_strokes(self.shape.strokes(), self.trim) {
                    let path = Path::new(|builder| {
                        let mut points = polyline.iter().copied().map(to_point);
                        if let Some(start) = points.next() {
                            builder.move_to(start);
                        }
                        for point in points {
                            builder.line_to(point);
                        }
                    });
                    frame.stroke(&path, stroke());
                }
            });

        vec![geometry]
    }
}
