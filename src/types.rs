//! Core data types for the sketch: nodes, shapes and the drawing that owns them.
//!
//! Shapes are built by placing nodes one at a time. Each shape kind needs a
//! fixed number of nodes; once that many have been placed the shape is
//! complete and moves into the drawing's completed list.

use crate::constants::{
    COMPLETED_COLOR, CURVE_MAX_NODES, IN_PROGRESS_COLOR, NODE_HIT_TOLERANCE, TWO_NODE_SHAPE_MAX,
};
use eframe::egui;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// A placed point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// World-space position
    pub pos: egui::Pos2,
}

/// Non-owning reference to one node of one shape.
///
/// Handles are resolved through [`Drawing::node_mut`]; a handle whose shape or
/// node no longer exists simply resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    /// Shape that owns the node
    pub shape: ShapeId,
    /// Index of the node in placement order
    pub index: usize,
}

/// The kinds of shape that can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Straight segment between two nodes
    Line,
    /// Axis-aligned rectangle spanned by two opposite corners
    Box,
    /// Circle given by its centre and a point on the rim
    Circle,
    /// Quadratic Bézier curve: start, control point, end
    Curve,
}

impl ShapeKind {
    /// Every kind, in key-binding order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Line,
        ShapeKind::Box,
        ShapeKind::Circle,
        ShapeKind::Curve,
    ];

    /// Number of nodes needed to complete a shape of this kind.
    pub fn max_nodes(self) -> usize {
        match self {
            ShapeKind::Line | ShapeKind::Box | ShapeKind::Circle => TWO_NODE_SHAPE_MAX,
            ShapeKind::Curve => CURVE_MAX_NODES,
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Box => "Box",
            ShapeKind::Circle => "Circle",
            ShapeKind::Curve => "Curve",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A shape and the nodes placed for it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Unique identifier for this shape
    pub id: ShapeId,
    /// What the nodes describe
    pub kind: ShapeKind,
    /// Placed nodes in placement order; never longer than `kind.max_nodes()`
    nodes: Vec<Node>,
    /// Display color
    pub color: egui::Color32,
}

impl Shape {
    /// Creates an empty shape of the given kind in the in-progress color.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            nodes: Vec::with_capacity(kind.max_nodes()),
            color: IN_PROGRESS_COLOR,
        }
    }

    /// Nodes placed so far.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to one placed node.
    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Number of nodes this shape needs.
    pub fn max_nodes(&self) -> usize {
        self.kind.max_nodes()
    }

    /// Whether every required node has been placed.
    pub fn is_complete(&self) -> bool {
        self.nodes.len() == self.max_nodes()
    }

    /// Places the next node at `pos`.
    ///
    /// Returns `None` when the shape already holds all of its nodes; that is
    /// the signal to finish the shape, not an error.
    pub fn next_node(&mut self, pos: egui::Pos2) -> Option<NodeHandle> {
        if self.is_complete() {
            return None;
        }
        self.nodes.push(Node { pos });
        Some(NodeHandle {
            shape: self.id,
            index: self.nodes.len() - 1,
        })
    }

    /// Index of the first node closer than the hit tolerance to `pos`.
    pub fn hit_node(&self, pos: egui::Pos2) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| (pos - node.pos).length() < NODE_HIT_TOLERANCE)
    }
}

/// Editing state derived from whether a shape is under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// No shape is being built
    Idle,
    /// A shape of this kind is accepting nodes
    Building(ShapeKind),
}

/// All shapes on the canvas: completed ones in creation order plus at most
/// one shape still accepting nodes.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Completed shapes; earlier entries are drawn first
    pub shapes: Vec<Shape>,
    /// Shape currently being placed, if any
    pub in_progress: Option<Shape>,
}

impl Drawing {
    /// Creates an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current editing mode.
    pub fn mode(&self) -> EditorMode {
        match &self.in_progress {
            Some(shape) => EditorMode::Building(shape.kind),
            None => EditorMode::Idle,
        }
    }

    /// Starts a new shape of `kind`, replacing any unfinished one.
    ///
    /// Returns the discarded shape, if there was one.
    pub fn begin_shape(&mut self, kind: ShapeKind) -> (&mut Shape, Option<Shape>) {
        let discarded = self.in_progress.take();
        (self.in_progress.insert(Shape::new(kind)), discarded)
    }

    /// Places the next node of the in-progress shape.
    ///
    /// When the shape is already full it is recolored and moved to the
    /// completed list, and [`Placement::Completed`] is returned.
    pub fn place_node(&mut self, pos: egui::Pos2) -> Placement {
        let Some(shape) = self.in_progress.as_mut() else {
            return Placement::NoShape;
        };
        if let Some(handle) = shape.next_node(pos) {
            return Placement::Placed(handle);
        }
        match self.in_progress.take() {
            Some(mut shape) => {
                shape.color = COMPLETED_COLOR;
                let id = shape.id;
                self.shapes.push(shape);
                Placement::Completed(id)
            }
            None => Placement::NoShape,
        }
    }

    /// First node of a completed shape under `pos`, scanning shapes in order.
    pub fn hit_completed(&self, pos: egui::Pos2) -> Option<NodeHandle> {
        self.shapes.iter().find_map(|shape| {
            shape.hit_node(pos).map(|index| NodeHandle {
                shape: shape.id,
                index,
            })
        })
    }

    /// Looks up a shape by id, in the in-progress slot or the completed list.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.in_progress
            .iter()
            .chain(self.shapes.iter())
            .find(|shape| shape.id == id)
    }

    /// Resolves a node handle for mutation.
    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.in_progress
            .iter_mut()
            .chain(self.shapes.iter_mut())
            .find(|shape| shape.id == handle.shape)
            .and_then(|shape| shape.node_mut(handle.index))
    }

    /// Shapes in render order: completed ones first, then the in-progress one.
    pub fn render_order(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().chain(self.in_progress.iter())
    }
}

/// Outcome of [`Drawing::place_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A node was added; the handle points at it
    Placed(NodeHandle),
    /// The shape was already full and is now completed
    Completed(ShapeId),
    /// There was no shape to place a node on
    NoShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_node_accepts_exactly_max_nodes() {
        for kind in ShapeKind::ALL {
            let mut shape = Shape::new(kind);
            for i in 0..kind.max_nodes() {
                let pos = egui::pos2(i as f32, 2.0 * i as f32);
                let handle = shape.next_node(pos).expect("node should be accepted");
                assert_eq!(handle, NodeHandle { shape: shape.id, index: i });
                assert_eq!(shape.nodes()[i].pos, pos);
            }
            assert!(shape.is_complete());
            assert_eq!(shape.next_node(egui::pos2(9.0, 9.0)), None);
            assert_eq!(shape.nodes().len(), kind.max_nodes());
        }
    }

    #[test]
    fn max_nodes_per_kind() {
        assert_eq!(ShapeKind::Line.max_nodes(), 2);
        assert_eq!(ShapeKind::Box.max_nodes(), 2);
        assert_eq!(ShapeKind::Circle.max_nodes(), 2);
        assert_eq!(ShapeKind::Curve.max_nodes(), 3);
    }

    #[test]
    fn hit_node_uses_strict_tolerance() {
        let mut shape = Shape::new(ShapeKind::Line);
        shape.next_node(egui::pos2(1.0, 1.0));
        shape.next_node(egui::pos2(5.0, 5.0));

        assert_eq!(shape.hit_node(egui::pos2(1.0, 1.0)), Some(0));
        assert_eq!(shape.hit_node(egui::pos2(5.005, 5.0)), Some(1));
        assert_eq!(shape.hit_node(egui::pos2(1.02, 1.0)), None);
        assert_eq!(shape.hit_node(egui::pos2(3.0, 3.0)), None);
    }

    #[test]
    fn hit_node_prefers_earliest_node_on_ties() {
        let mut shape = Shape::new(ShapeKind::Curve);
        shape.next_node(egui::pos2(0.0, 0.0));
        shape.next_node(egui::pos2(0.0, 0.0));
        shape.next_node(egui::pos2(0.0, 0.0));
        assert_eq!(shape.hit_node(egui::pos2(0.001, 0.0)), Some(0));
    }

    #[test]
    fn hit_node_on_empty_shape_is_none() {
        let shape = Shape::new(ShapeKind::Circle);
        assert_eq!(shape.hit_node(egui::Pos2::ZERO), None);
    }

    #[test]
    fn place_node_completes_and_moves_shape() {
        let mut drawing = Drawing::new();
        assert_eq!(drawing.place_node(egui::Pos2::ZERO), Placement::NoShape);

        let (shape, discarded) = drawing.begin_shape(ShapeKind::Line);
        assert!(discarded.is_none());
        let id = shape.id;
        assert_eq!(drawing.mode(), EditorMode::Building(ShapeKind::Line));

        assert!(matches!(drawing.place_node(egui::pos2(1.0, 0.0)), Placement::Placed(_)));
        assert!(matches!(drawing.place_node(egui::pos2(2.0, 0.0)), Placement::Placed(_)));
        assert_eq!(drawing.place_node(egui::pos2(3.0, 0.0)), Placement::Completed(id));

        assert_eq!(drawing.mode(), EditorMode::Idle);
        assert_eq!(drawing.shapes.len(), 1);
        assert_eq!(drawing.shapes[0].color, COMPLETED_COLOR);
        assert_eq!(drawing.shapes[0].nodes().len(), 2);
    }

    #[test]
    fn begin_shape_discards_unfinished_shape() {
        let mut drawing = Drawing::new();
        let first = drawing.begin_shape(ShapeKind::Box).0.id;
        let (_, discarded) = drawing.begin_shape(ShapeKind::Curve);
        assert_eq!(discarded.map(|s| s.id), Some(first));
        assert_eq!(drawing.mode(), EditorMode::Building(ShapeKind::Curve));
        assert!(drawing.shapes.is_empty());
    }

    #[test]
    fn hit_completed_scans_in_creation_order_and_skips_in_progress() {
        let mut drawing = Drawing::new();
        let mut a = Shape::new(ShapeKind::Line);
        a.next_node(egui::pos2(0.0, 0.0));
        a.next_node(egui::pos2(4.0, 4.0));
        let mut b = Shape::new(ShapeKind::Box);
        b.next_node(egui::pos2(4.0, 4.0));
        b.next_node(egui::pos2(8.0, 0.0));
        let (a_id, b_id) = (a.id, b.id);
        drawing.shapes.push(a);
        drawing.shapes.push(b);
        drawing.begin_shape(ShapeKind::Circle).0.next_node(egui::pos2(8.0, 8.0));

        assert_eq!(
            drawing.hit_completed(egui::pos2(4.0, 4.0)),
            Some(NodeHandle { shape: a_id, index: 1 })
        );
        assert_eq!(
            drawing.hit_completed(egui::pos2(8.0, 0.0)),
            Some(NodeHandle { shape: b_id, index: 1 })
        );
        assert_eq!(drawing.hit_completed(egui::pos2(8.0, 8.0)), None);
    }

    #[test]
    fn stale_handles_resolve_to_none() {
        let mut drawing = Drawing::new();
        let handle = drawing
            .begin_shape(ShapeKind::Line)
            .0
            .next_node(egui::Pos2::ZERO)
            .expect("first node");
        assert!(drawing.node_mut(handle).is_some());
        assert!(drawing
            .node_mut(NodeHandle { index: 5, ..handle })
            .is_none());

        drawing.in_progress = None;
        assert!(drawing.node_mut(handle).is_none());
        assert!(drawing.shape(handle.shape).is_none());
    }

    #[test]
    fn render_order_puts_in_progress_last() {
        let mut drawing = Drawing::new();
        let done = Shape::new(ShapeKind::Line);
        let done_id = done.id;
        drawing.shapes.push(done);
        let active_id = drawing.begin_shape(ShapeKind::Curve).0.id;
        let ids: Vec<ShapeId> = drawing.render_order().map(|s| s.id).collect();
        assert_eq!(ids, vec![done_id, active_id]);
    }
}
