//! User interface components and canvas logic for the sketch tool.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main SketchApp
//! - `input` - Per-frame input snapshot read from egui
//! - `canvas` - Panning, zooming, snapping and node placement
//! - `rendering` - Drawing the grid, shapes, cursor and overlay

mod canvas;
mod input;
mod rendering;
mod state;


pub use input::FrameInput;
pub use state::{CanvasState, InteractionState, SketchApp};

use crate::constants::BACKGROUND_COLOR;
use crate::render::CanvasPainter;
use eframe::egui;

impl eframe::App for SketchApp {
    /// Main update function called by eframe for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BACKGROUND_COLOR))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });

        // Held zoom keys and node tracking need a fresh frame even without new events
        ctx.request_repaint();
    }
}

impl SketchApp {
    /// Allocates the canvas, applies this frame's input and renders the sketch.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;
        self.canvas.rect = canvas_rect;

        // Centre the world origin on the first frame
        if !self.canvas.initialized {
            self.canvas.view.center_origin(canvas_rect.size());
            self.canvas.initialized = true;
        }

        let input = FrameInput::from_ui(ui, canvas_rect, self.interaction.last_mouse);
        self.process_frame(&input);

        painter.rect_filled(canvas_rect, 0.0, BACKGROUND_COLOR);
        let mut canvas_painter = CanvasPainter::new(&painter, canvas_rect);
        self.render_sketch(&mut canvas_painter, canvas_rect.size());
    }
}
