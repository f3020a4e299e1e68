//! World/screen coordinate mapping shared by every shape in a frame.
//!
//! Screen coordinates here are local to the canvas: `(0, 0)` is the top-left
//! corner of the drawing area, not of the window.

use crate::constants::{DEFAULT_GRID_SPACING, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use eframe::egui;

/// Pan offset and uniform zoom scale relating world space to screen space.
///
/// `screen = (world - offset) * scale`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// World-space point shown at the canvas origin
    pub offset: egui::Vec2,
    /// Screen pixels per world unit
    pub scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ViewTransform {
    /// Creates a transform with the given offset and scale.
    pub fn new(offset: egui::Vec2, scale: f32) -> Self {
        Self { offset, scale }
    }

    /// Converts a world-space point to canvas-local screen coordinates.
    pub fn world_to_screen(&self, world: egui::Pos2) -> egui::Pos2 {
        (world - self.offset) * self.scale
    }

    /// Converts canvas-local screen coordinates to a world-space point.
    pub fn screen_to_world(&self, screen: egui::Pos2) -> egui::Pos2 {
        screen / self.scale + self.offset
    }

    /// Converts a world-space length to screen pixels.
    pub fn world_length_to_screen(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Places the world origin at the centre of a canvas of the given size.
    pub fn center_origin(&mut self, canvas_size: egui::Vec2) {
        self.offset = -(canvas_size / 2.0) / self.scale;
    }

    /// Moves the view by a screen-space mouse delta.
    ///
    /// Dragging right moves the visible world left, so the offset decreases.
    pub fn pan_by(&mut self, screen_delta: egui::Vec2) {
        self.offset -= screen_delta / self.scale;
    }

    /// Multiplies the scale by `factor` while keeping the world point under
    /// `anchor` (canvas-local screen position) in place.
    ///
    /// The scale is clamped to `[MIN_SCALE, MAX_SCALE]`; at a bound the view
    /// is left untouched.
    pub fn zoom_at(&mut self, anchor: egui::Pos2, factor: f32) {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if new_scale == self.scale {
            return;
        }
        let before = self.screen_to_world(anchor);
        self.scale = new_scale;
        let after = self.screen_to_world(anchor);
        self.offset += before - after;
    }

    /// World-space rectangle visible in a canvas of the given size.
    pub fn visible_world_rect(&self, canvas_size: egui::Vec2) -> egui::Rect {
        egui::Rect::from_min_max(
            self.screen_to_world(egui::Pos2::ZERO),
            self.screen_to_world(canvas_size.to_pos2()),
        )
    }
}

/// Snaps a world position to the grid: each axis is offset by half a grid
/// cell and floored, so the result is the nearest grid intersection.
pub fn snap_to_grid(world: egui::Pos2, grid: f32) -> egui::Pos2 {
    let grid = if grid > 0.0 { grid } else { DEFAULT_GRID_SPACING };
    egui::pos2(
        (world.x / grid + 0.5).floor() * grid,
        (world.y / grid + 0.5).floor() * grid,
    )
}
