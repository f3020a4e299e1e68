//! # Shape Sketch
//!
//! A small interactive vector drawing tool. Shapes are built by placing
//! nodes on a pannable, zoomable, grid-snapped canvas:
//! - **Line**: two nodes, start and end
//! - **Box**: two opposite corners
//! - **Circle**: centre and a point on the rim
//! - **Curve**: quadratic Bézier from start, control point and end
//!
//! ## Controls
//! - `L`, `B`, `C`, `S` start a line, box, circle or curve at the cursor
//! - Left click commits the node following the cursor
//! - `M` picks up the node under the cursor so it can be moved
//! - Middle drag pans; the wheel or `Q`/`A` zooms around the cursor

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
mod constants;
pub mod render;
mod types;
mod ui;
pub mod view;

// Re-export public types and functions
pub use config::{ConfigError, SketchConfig};
pub use types::*;
pub use ui::{CanvasState, FrameInput, InteractionState, SketchApp};

use eframe::egui;

/// Runs the sketch application with the given settings.
///
/// This function opens the native window and starts the main event loop.
///
/// # Example
///
/// ```no_run
/// use shape_sketch::{run_app, SketchConfig};
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app(SketchConfig::default())
/// }
/// ```
pub fn run_app(config: SketchConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Shape Sketch")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    log::info!(
        "starting Shape Sketch ({}x{}, scale {})",
        config.window_width,
        config.window_height,
        config.initial_scale
    );
    eframe::run_native(
        "Shape Sketch",
        options,
        Box::new(|_cc| Ok(Box::new(SketchApp::new(config)))),
    )
}
