//! Shared application-wide constants.
//! Centralizes fixed values used across shape geometry, rendering and input handling.

use eframe::egui;

// Node placement
/// World-space distance under which a node counts as hit by the cursor.
pub const NODE_HIT_TOLERANCE: f32 = 0.01;
/// Maximum node count for lines, boxes and circles.
pub const TWO_NODE_SHAPE_MAX: usize = 2;
/// Maximum node count for quadratic curves.
pub const CURVE_MAX_NODES: usize = 3;

// Curve sampling
/// Parametric step used when sampling a quadratic curve into a polyline.
pub const CURVE_STEP: f32 = 0.01;

// View defaults
/// Initial world-to-screen scale (pixels per world unit).
pub const DEFAULT_SCALE: f32 = 10.0;
/// Grid interval in world units used for cursor snapping and grid dots.
pub const DEFAULT_GRID_SPACING: f32 = 1.0;
/// Scale multiplier applied per frame while zooming in.
pub const ZOOM_IN_FACTOR: f32 = 1.1;
/// Scale multiplier applied per frame while zooming out.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;
/// Smallest scale zooming out can reach (pixels per world unit).
pub const MIN_SCALE: f32 = 0.05;
/// Largest scale zooming in can reach (pixels per world unit).
pub const MAX_SCALE: f32 = 1000.0;
/// Default window size in logical points.
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (800.0, 480.0);

// Rendering
/// Radius of node markers (in screen pixels).
pub const NODE_MARKER_RADIUS: f32 = 2.0;
/// Radius of the snapped cursor ring (in screen pixels).
pub const CURSOR_RADIUS: f32 = 3.0;
/// Alpha multiplier for construction guide lines.
pub const GUIDE_ALPHA: f32 = 0.4;
/// Stroke width for shapes and guides (in screen pixels).
pub const STROKE_WIDTH: f32 = 1.0;
/// Grid dots are skipped when their screen spacing falls below this many pixels.
pub const MIN_GRID_DOT_SPACING: f32 = 4.0;
/// Font size of the cursor readout and help overlay.
pub const HUD_FONT_SIZE: f32 = 14.0;

// Colors
pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 0, 64);
pub const GRID_DOT_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 0, 255);
pub const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(192, 192, 192);
pub const IN_PROGRESS_COLOR: egui::Color32 = egui::Color32::GREEN;
pub const COMPLETED_COLOR: egui::Color32 = egui::Color32::WHITE;
pub const NODE_COLOR: egui::Color32 = egui::Color32::RED;
pub const CURSOR_COLOR: egui::Color32 = egui::Color32::YELLOW;

// Key bindings
pub const ZOOM_IN_KEY: egui::Key = egui::Key::Q;
pub const ZOOM_OUT_KEY: egui::Key = egui::Key::A;
pub const LINE_KEY: egui::Key = egui::Key::L;
pub const BOX_KEY: egui::Key = egui::Key::B;
pub const CIRCLE_KEY: egui::Key = egui::Key::C;
pub const CURVE_KEY: egui::Key = egui::Key::S;
pub const SELECT_KEY: egui::Key = egui::Key::M;
