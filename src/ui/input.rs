//! Per-frame snapshot of the input the canvas reacts to.

use crate::constants::{
    BOX_KEY, CIRCLE_KEY, CURVE_KEY, LINE_KEY, SELECT_KEY, ZOOM_IN_KEY, ZOOM_OUT_KEY,
};
use crate::types::ShapeKind;
use eframe::egui;

/// Input gathered once per frame, in canvas-local screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Mouse position relative to the canvas' top-left corner
    pub mouse: egui::Pos2,
    /// Primary button went up this frame
    pub primary_released: bool,
    /// Pan button (middle) went down this frame
    pub pan_pressed: bool,
    /// Pan button (middle) is held
    pub pan_down: bool,
    /// Vertical wheel movement this frame; positive scrolls up
    pub scroll: f32,
    /// Zoom-in key is held
    pub zoom_in_held: bool,
    /// Zoom-out key is held
    pub zoom_out_held: bool,
    /// Shape creation key pressed this frame, if any
    pub create: Option<ShapeKind>,
    /// Select key pressed this frame
    pub select_pressed: bool,
}

impl FrameInput {
    /// An idle frame with the mouse resting at `mouse`.
    pub fn at(mouse: egui::Pos2) -> Self {
        Self {
            mouse,
            primary_released: false,
            pan_pressed: false,
            pan_down: false,
            scroll: 0.0,
            zoom_in_held: false,
            zoom_out_held: false,
            create: None,
            select_pressed: false,
        }
    }

    /// Reads the current egui input for a canvas occupying `canvas_rect`.
    ///
    /// `fallback_mouse` is used when egui has no pointer position, e.g.
    /// before the pointer first enters the window.
    pub fn from_ui(ui: &egui::Ui, canvas_rect: egui::Rect, fallback_mouse: egui::Pos2) -> Self {
        ui.input(|i| {
            let mouse = i
                .pointer
                .latest_pos()
                .map(|pos| (pos - canvas_rect.min).to_pos2())
                .unwrap_or(fallback_mouse);
            Self {
                mouse,
                primary_released: i.pointer.button_released(egui::PointerButton::Primary),
                pan_pressed: i.pointer.button_pressed(egui::PointerButton::Middle),
                pan_down: i.pointer.middle_down(),
                scroll: i.raw_scroll_delta.y,
                zoom_in_held: i.key_down(ZOOM_IN_KEY),
                zoom_out_held: i.key_down(ZOOM_OUT_KEY),
                create: creation_key(i),
                select_pressed: i.key_pressed(SELECT_KEY),
            }
        })
    }
}

/// Key binding for each shape kind.
pub fn shape_key(kind: ShapeKind) -> egui::Key {
    match kind {
        ShapeKind::Line => LINE_KEY,
        ShapeKind::Box => BOX_KEY,
        ShapeKind::Circle => CIRCLE_KEY,
        ShapeKind::Curve => CURVE_KEY,
    }
}

fn creation_key(input: &egui::InputState) -> Option<ShapeKind> {
    ShapeKind::ALL
        .into_iter()
        .find(|kind| input.key_pressed(shape_key(*kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_key() {
        let keys: Vec<egui::Key> = ShapeKind::ALL.into_iter().map(shape_key).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "{key:?} bound twice");
            assert_ne!(*key, SELECT_KEY);
            assert_ne!(*key, ZOOM_IN_KEY);
            assert_ne!(*key, ZOOM_OUT_KEY);
        }
    }

    #[test]
    fn idle_frame_has_no_actions() {
        let input = FrameInput::at(egui::pos2(3.0, 4.0));
        assert_eq!(input.mouse, egui::pos2(3.0, 4.0));
        assert!(input.create.is_none());
        assert!(!input.primary_released && !input.pan_down && !input.select_pressed);
        assert_eq!(input.scroll, 0.0);
    }
}
