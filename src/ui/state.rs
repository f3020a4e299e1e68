//! Application state management structures.
//!
//! This module contains the state structures that track the canvas view,
//! the user's current interaction and the drawing being edited.

use crate::config::SketchConfig;
use crate::types::*;
use crate::view::ViewTransform;
use eframe::egui;

/// State related to canvas navigation and display.
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// World/screen mapping shared by every shape this frame
    pub view: ViewTransform,
    /// Screen rectangle allocated to the canvas in the last frame
    pub rect: egui::Rect,
    /// Whether the world origin has been centred on the canvas yet
    pub initialized: bool,
    /// Whether grid dots and world axes are drawn
    pub show_grid: bool,
    /// Whether the key binding overlay is drawn
    pub show_help: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            view: ViewTransform::default(),
            rect: egui::Rect::NOTHING,
            initialized: false,
            show_grid: true,
            show_help: true,
        }
    }
}

/// State related to user interactions with nodes and the canvas.
#[derive(Debug, Clone)]
pub struct InteractionState {
    /// Node currently following the cursor, if any
    pub selected_node: Option<NodeHandle>,
    /// Last mouse position seen while the pan button was held (canvas-local)
    pub pan_anchor: Option<egui::Pos2>,
    /// Grid-snapped cursor position in world space
    pub cursor: egui::Pos2,
    /// Last known mouse position (canvas-local), reused when the pointer leaves the window
    pub last_mouse: egui::Pos2,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            selected_node: None,
            pan_anchor: None,
            cursor: egui::Pos2::ZERO,
            last_mouse: egui::Pos2::ZERO,
        }
    }
}

/// The main application structure containing UI state and the drawing.
///
/// This struct implements the `eframe::App` trait and drives one
/// input-then-render pass per frame.
#[derive(Debug, Clone)]
pub struct SketchApp {
    /// Shapes on the canvas
    pub drawing: Drawing,
    /// Canvas navigation and display state
    pub canvas: CanvasState,
    /// User interaction state
    pub interaction: InteractionState,
    /// Settings the app was started with
    pub config: SketchConfig,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl SketchApp {
    /// Creates an empty sketch using the given settings.
    pub fn new(config: SketchConfig) -> Self {
        let canvas = CanvasState {
            view: ViewTransform::new(egui::Vec2::ZERO, config.initial_scale),
            show_grid: config.show_grid,
            show_help: config.show_help,
            ..CanvasState::default()
        };
        Self {
            drawing: Drawing::new(),
            canvas,
            interaction: InteractionState::default(),
            config,
        }
    }

    /// Current editing mode.
    pub fn mode(&self) -> EditorMode {
        self.drawing.mode()
    }
}
