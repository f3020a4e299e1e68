//! Canvas rendering for the grid, shapes, cursor and overlay text.
//!
//! Everything is drawn through [`ShapePainter`] in canvas-local coordinates.

use super::state::SketchApp;
use crate::constants::*;
use crate::render::{LinePattern, ShapePainter};
use crate::types::EditorMode;
use eframe::egui;

/// Key binding summary shown in the help overlay.
const HELP_LINES: [&str; 4] = [
    "L line   B box   C circle   S curve",
    "Left click: place node",
    "M: move node under cursor",
    "Middle drag: pan   Wheel or Q/A: zoom",
];

impl SketchApp {
    /// Renders all canvas elements for this frame.
    ///
    /// Layers, back to front: grid and axes, completed shapes in creation
    /// order, the shape being built, the snapped cursor, then the text overlay.
    pub fn render_sketch(&self, painter: &mut dyn ShapePainter, canvas_size: egui::Vec2) {
        if self.canvas.show_grid {
            self.draw_grid(painter, canvas_size);
            self.draw_axes(painter, canvas_size);
        }

        let view = &self.canvas.view;
        for shape in self.drawing.render_order() {
            shape.render(painter, view);
            shape.render_nodes(painter, view);
        }

        let cursor = view.world_to_screen(self.interaction.cursor);
        painter.stroke_circle(cursor, CURSOR_RADIUS, CURSOR_COLOR);

        self.draw_overlay(painter);
    }

    /// Draws a dot at every grid intersection inside the visible world.
    ///
    /// Skipped when zoomed out far enough that dots would merge.
    pub fn draw_grid(&self, painter: &mut dyn ShapePainter, canvas_size: egui::Vec2) {
        let view = &self.canvas.view;
        let grid = self.config.grid_spacing;
        if view.world_length_to_screen(grid) < MIN_GRID_DOT_SPACING {
            return;
        }

        let visible = view.visible_world_rect(canvas_size);
        let first_col = (visible.min.x / grid).floor() as i64;
        let last_col = (visible.max.x / grid).ceil() as i64;
        let first_row = (visible.min.y / grid).floor() as i64;
        let last_row = (visible.max.y / grid).ceil() as i64;

        for col in first_col..last_col {
            for row in first_row..last_row {
                let world = egui::pos2(col as f32 * grid, row as f32 * grid);
                painter.point(view.world_to_screen(world), GRID_DOT_COLOR);
            }
        }
    }

    /// Draws the world x and y axes as dashed lines across the canvas.
    pub fn draw_axes(&self, painter: &mut dyn ShapePainter, canvas_size: egui::Vec2) {
        let view = &self.canvas.view;
        let visible = view.visible_world_rect(canvas_size);

        painter.line(
            view.world_to_screen(egui::pos2(0.0, visible.min.y)),
            view.world_to_screen(egui::pos2(0.0, visible.max.y)),
            AXIS_COLOR,
            LinePattern::Dashed,
        );
        painter.line(
            view.world_to_screen(egui::pos2(visible.min.x, 0.0)),
            view.world_to_screen(egui::pos2(visible.max.x, 0.0)),
            AXIS_COLOR,
            LinePattern::Dashed,
        );
    }

    /// Draws the cursor readout and, if enabled, the key binding help.
    fn draw_overlay(&self, painter: &mut dyn ShapePainter) {
        let mut pos = egui::pos2(10.0, 10.0);
        painter.text(pos, &self.status_text(), HUD_FONT_SIZE, CURSOR_COLOR);

        if self.canvas.show_help {
            for line in HELP_LINES {
                pos.y += HUD_FONT_SIZE + 4.0;
                painter.text(pos, line, HUD_FONT_SIZE, AXIS_COLOR);
            }
        }
    }

    /// Cursor coordinates and the current mode, e.g. `X=2, Y=-3  [Building Curve]`.
    pub fn status_text(&self) -> String {
        let cursor = self.interaction.cursor;
        let mode = match self.mode() {
            EditorMode::Idle => "Idle".to_owned(),
            EditorMode::Building(kind) => format!("Building {kind}"),
        };
        format!("X={}, Y={}  [{}]", cursor.x, cursor.y, mode)
    }
}
