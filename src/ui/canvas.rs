//! Canvas interaction and navigation functionality.
//!
//! This module handles panning, zooming, cursor snapping, shape creation,
//! node placement and node dragging. Every handler works on a [`FrameInput`]
//! so a frame can be replayed without a window.

use super::input::FrameInput;
use super::state::SketchApp;
use crate::types::*;
use crate::view::snap_to_grid;
use eframe::egui;

impl SketchApp {
    /// Applies one frame of input, in the order the canvas depends on:
    /// view changes first, then the snapped cursor, then edits that use it.
    pub fn process_frame(&mut self, input: &FrameInput) {
        self.interaction.last_mouse = input.mouse;

        self.handle_canvas_panning(input);
        self.handle_canvas_zoom(input);
        self.update_cursor(input.mouse);
        self.handle_shape_keys(input);
        self.handle_select_key(input);
        self.track_selected_node();
        self.handle_primary_release(input);
    }

    /// Handles middle-button panning.
    ///
    /// The anchor follows the mouse every frame, so the offset changes by the
    /// per-frame delta rather than by the distance from the press point.
    pub fn handle_canvas_panning(&mut self, input: &FrameInput) {
        if input.pan_pressed {
            self.interaction.pan_anchor = Some(input.mouse);
        }

        if input.pan_down {
            let anchor = self.interaction.pan_anchor.unwrap_or(input.mouse);
            self.canvas.view.pan_by(input.mouse - anchor);
            self.interaction.pan_anchor = Some(input.mouse);
        } else {
            self.interaction.pan_anchor = None;
        }
    }

    /// Handles keyboard and scroll wheel zooming around the mouse position.
    ///
    /// Zoom-in and zoom-out are checked independently, so holding both keys
    /// applies both factors in the same frame.
    pub fn handle_canvas_zoom(&mut self, input: &FrameInput) {
        if input.zoom_in_held || input.scroll > 0.0 {
            self.canvas
                .view
                .zoom_at(input.mouse, self.config.zoom_in_factor);
        }
        if input.zoom_out_held || input.scroll < 0.0 {
            self.canvas
                .view
                .zoom_at(input.mouse, self.config.zoom_out_factor);
        }
    }

    /// Recomputes the grid-snapped world cursor from the mouse position.
    pub fn update_cursor(&mut self, mouse: egui::Pos2) {
        let world = self.canvas.view.screen_to_world(mouse);
        self.interaction.cursor = snap_to_grid(world, self.config.grid_spacing);
    }

    /// Starts a new shape when a creation key is pressed.
    ///
    /// The first two nodes are placed on the cursor at once and the second is
    /// selected, so it follows the mouse until the next click commits it.
    pub fn handle_shape_keys(&mut self, input: &FrameInput) {
        if let Some(kind) = input.create {
            self.begin_shape(kind);
        }
    }

    /// Creates a shape of `kind` at the cursor and selects its second node.
    pub fn begin_shape(&mut self, kind: ShapeKind) {
        let cursor = self.interaction.cursor;
        let (shape, discarded) = self.drawing.begin_shape(kind);
        let first = shape.next_node(cursor);
        let second = shape.next_node(cursor);
        self.interaction.selected_node = second.or(first);

        if let Some(old) = discarded {
            log::debug!(
                "discarded unfinished {} with {} node(s)",
                old.kind,
                old.nodes().len()
            );
        }
        log::debug!("started {} at ({}, {})", kind, cursor.x, cursor.y);
    }

    /// Selects the first completed node under the cursor when the select key
    /// is pressed. Any previous selection is dropped even if nothing is hit.
    pub fn handle_select_key(&mut self, input: &FrameInput) {
        if !input.select_pressed {
            return;
        }
        self.interaction.selected_node = self.drawing.hit_completed(self.interaction.cursor);
        if let Some(handle) = self.interaction.selected_node {
            log::debug!("picked node {} of shape {}", handle.index, handle.shape);
        }
    }

    /// Moves the selected node to the cursor.
    ///
    /// A handle that no longer resolves is cleared.
    pub fn track_selected_node(&mut self) {
        let Some(handle) = self.interaction.selected_node else {
            return;
        };
        match self.drawing.node_mut(handle) {
            Some(node) => node.pos = self.interaction.cursor,
            None => {
                log::debug!("dropping stale selection {handle:?}");
                self.interaction.selected_node = None;
            }
        }
    }

    /// Commits a node on primary release.
    ///
    /// While building, the in-progress shape receives a node at the cursor; a
    /// full shape is completed instead. While idle the release just drops the
    /// dragged node where it is.
    pub fn handle_primary_release(&mut self, input: &FrameInput) {
        if !input.primary_released {
            return;
        }
        let cursor = self.interaction.cursor;
        match self.drawing.place_node(cursor) {
            Placement::Placed(handle) => {
                log::debug!("placed node {} at ({}, {})", handle.index, cursor.x, cursor.y);
                self.interaction.selected_node = Some(handle);
            }
            Placement::Completed(id) => {
                if let Some(shape) = self.drawing.shape(id) {
                    log::info!(
                        "completed {} ({} shapes on canvas)",
                        shape.kind,
                        self.drawing.shapes.len()
                    );
                }
                self.interaction.selected_node = None;
            }
            Placement::NoShape => {
                self.interaction.selected_node = None;
            }
        }
    }
}
