//! Drawing primitives used by shapes and the canvas overlay.
//!
//! Shapes never talk to egui directly; they issue primitives through
//! [`ShapePainter`] in canvas-local screen coordinates. [`CanvasPainter`]
//! forwards them to an `egui::Painter`, translating by the canvas origin.

use crate::constants::{CURVE_STEP, GUIDE_ALPHA, NODE_COLOR, NODE_MARKER_RADIUS, STROKE_WIDTH};
use crate::types::{Shape, ShapeKind};
use crate::view::ViewTransform;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Stroke pattern for line primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    /// Continuous stroke
    Solid,
    /// Alternating dashes and gaps
    Dashed,
}

/// The primitive operations the rendering engine offers.
///
/// All positions are canvas-local screen coordinates.
pub trait ShapePainter {
    /// Draws a straight segment.
    fn line(&mut self, from: egui::Pos2, to: egui::Pos2, color: egui::Color32, pattern: LinePattern);
    /// Draws a filled disc.
    fn fill_circle(&mut self, center: egui::Pos2, radius: f32, color: egui::Color32);
    /// Draws a circle outline.
    fn stroke_circle(&mut self, center: egui::Pos2, radius: f32, color: egui::Color32);
    /// Draws a rectangle outline.
    fn stroke_rect(&mut self, rect: egui::Rect, color: egui::Color32);
    /// Plots a single pixel-sized point.
    fn point(&mut self, pos: egui::Pos2, color: egui::Color32);
    /// Draws text with its top-left corner at `pos`.
    fn text(&mut self, pos: egui::Pos2, text: &str, size: f32, color: egui::Color32);
}

/// [`ShapePainter`] backed by an egui painter clipped to the canvas.
pub struct CanvasPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Vec2,
}

impl<'a> CanvasPainter<'a> {
    /// Wraps `painter`; local coordinates are measured from `canvas_rect.min`.
    pub fn new(painter: &'a egui::Painter, canvas_rect: egui::Rect) -> Self {
        Self {
            painter,
            origin: canvas_rect.min.to_vec2(),
        }
    }

    fn to_absolute(&self, local: egui::Pos2) -> egui::Pos2 {
        local + self.origin
    }
}

impl ShapePainter for CanvasPainter<'_> {
    fn line(&mut self, from: egui::Pos2, to: egui::Pos2, color: egui::Color32, pattern: LinePattern) {
        let points = [self.to_absolute(from), self.to_absolute(to)];
        let stroke = egui::Stroke::new(STROKE_WIDTH, color);
        match pattern {
            LinePattern::Solid => {
                self.painter.line_segment(points, stroke);
            }
            LinePattern::Dashed => {
                self.painter
                    .extend(egui::Shape::dashed_line(&points, stroke, 4.0, 4.0));
            }
        }
    }

    fn fill_circle(&mut self, center: egui::Pos2, radius: f32, color: egui::Color32) {
        self.painter
            .circle_filled(self.to_absolute(center), radius, color);
    }

    fn stroke_circle(&mut self, center: egui::Pos2, radius: f32, color: egui::Color32) {
        self.painter.circle_stroke(
            self.to_absolute(center),
            radius,
            egui::Stroke::new(STROKE_WIDTH, color),
        );
    }

    fn stroke_rect(&mut self, rect: egui::Rect, color: egui::Color32) {
        let rect = rect.translate(self.origin);
        self.painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(STROKE_WIDTH, color),
            StrokeKind::Middle,
        );
    }

    fn point(&mut self, pos: egui::Pos2, color: egui::Color32) {
        let rect = egui::Rect::from_min_size(self.to_absolute(pos), egui::vec2(1.0, 1.0));
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn text(&mut self, pos: egui::Pos2, text: &str, size: f32, color: egui::Color32) {
        self.painter.text(
            self.to_absolute(pos),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::monospace(size),
            color,
        );
    }
}

/// Point on the quadratic Bézier `p0, p1, p2` at parameter `t`.
pub fn quadratic_point(p0: egui::Pos2, p1: egui::Pos2, p2: egui::Pos2, t: f32) -> egui::Pos2 {
    let u = 1.0 - t;
    (p0.to_vec2() * (u * u) + p1.to_vec2() * (2.0 * u * t) + p2.to_vec2() * (t * t)).to_pos2()
}

/// Samples a quadratic Bézier at `t = 0, step, 2*step, ...` for `t < 1`.
pub fn sample_quadratic(p0: egui::Pos2, p1: egui::Pos2, p2: egui::Pos2, step: f32) -> Vec<egui::Pos2> {
    let count = (1.0 / step).round().max(1.0) as usize;
    (0..count)
        .map(|i| quadratic_point(p0, p1, p2, i as f32 * step))
        .collect()
}

impl Shape {
    /// Draws the shape from the nodes placed so far.
    ///
    /// A shape missing nodes draws only what those nodes define; nothing is
    /// read beyond the last placed node.
    pub fn render(&self, painter: &mut dyn ShapePainter, view: &ViewTransform) {
        let screen: Vec<egui::Pos2> = self
            .nodes()
            .iter()
            .map(|node| view.world_to_screen(node.pos))
            .collect();
        let guide = self.color.gamma_multiply(GUIDE_ALPHA);

        match (self.kind, screen.as_slice()) {
            (ShapeKind::Line, [start, end, ..]) => {
                painter.line(*start, *end, self.color, LinePattern::Solid);
            }
            (ShapeKind::Box, [a, b, ..]) => {
                painter.stroke_rect(egui::Rect::from_two_pos(*a, *b), self.color);
            }
            (ShapeKind::Circle, [center, rim, ..]) => {
                let nodes = self.nodes();
                let radius = (nodes[1].pos - nodes[0].pos).length();
                painter.line(*center, *rim, guide, LinePattern::Dashed);
                painter.stroke_circle(*center, view.world_length_to_screen(radius), self.color);
            }
            (ShapeKind::Curve, [start, control]) => {
                painter.line(*start, *control, guide, LinePattern::Dashed);
            }
            (ShapeKind::Curve, [start, control, end, ..]) => {
                painter.line(*start, *control, guide, LinePattern::Dashed);
                painter.line(*control, *end, guide, LinePattern::Dashed);

                let nodes = self.nodes();
                let samples = sample_quadratic(nodes[0].pos, nodes[1].pos, nodes[2].pos, CURVE_STEP);
                for pair in samples.windows(2) {
                    painter.line(
                        view.world_to_screen(pair[0]),
                        view.world_to_screen(pair[1]),
                        self.color,
                        LinePattern::Solid,
                    );
                }
            }
            _ => {}
        }
    }

    /// Draws a marker on every placed node.
    pub fn render_nodes(&self, painter: &mut dyn ShapePainter, view: &ViewTransform) {
        for node in self.nodes() {
            painter.fill_circle(view.world_to_screen(node.pos), NODE_MARKER_RADIUS, NODE_COLOR);
        }
    }
}

/// Primitive captured by [`RecordingPainter`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Line {
        from: egui::Pos2,
        to: egui::Pos2,
        color: egui::Color32,
        pattern: LinePattern,
    },
    FillCircle {
        center: egui::Pos2,
        radius: f32,
        color: egui::Color32,
    },
    StrokeCircle {
        center: egui::Pos2,
        radius: f32,
        color: egui::Color32,
    },
    StrokeRect {
        rect: egui::Rect,
        color: egui::Color32,
    },
    Point {
        pos: egui::Pos2,
        color: egui::Color32,
    },
    Text {
        pos: egui::Pos2,
        text: String,
        color: egui::Color32,
    },
}

/// Test painter that records every primitive in call order.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingPainter {
    pub(crate) calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingPainter {
    /// All line primitives, in call order.
    pub(crate) fn lines(&self) -> Vec<(egui::Pos2, egui::Pos2, egui::Color32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { from, to, color, .. } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl ShapePainter for RecordingPainter {
    fn line(&mut self, from: egui::Pos2, to: egui::Pos2, color: egui::Color32, pattern: LinePattern) {
        self.calls.push(DrawCall::Line { from, to, color, pattern });
    }

    fn fill_circle(&mut self, center: egui::Pos2, radius: f32, color: egui::Color32) {
        self.calls.push(DrawCall::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: egui::Pos2, radius: f32, color: egui::Color32) {
        self.calls.push(DrawCall::StrokeCircle { center, radius, color });
    }

    fn stroke_rect(&mut self, rect: egui::Rect, color: egui::Color32) {
        self.calls.push(DrawCall::StrokeRect { rect, color });
    }

    fn point(&mut self, pos: egui::Pos2, color: egui::Color32) {
        self.calls.push(DrawCall::Point { pos, color });
    }

    fn text(&mut self, pos: egui::Pos2, text: &str, _size: f32, color: egui::Color32) {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_owned(),
            color,
        });
    }
}
