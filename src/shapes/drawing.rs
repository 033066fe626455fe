//! Drawing - one generation result
//!
//! A `Drawing` bundles the generated descriptors, in z-order, with the
//! `Viewport` they were generated in. The viewport is echoed back so a
//! renderer can lay out a background grid consistent with the region the
//! shapes were confined to.

use super::descriptor::{ShapeDescriptor, ShapeKind};

/// The rectangular generation region plus the grid spacing
///
/// A `grid_step` of zero means "no grid".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub grid_step: f64,
}

impl Viewport {
    /// Create a viewport from its bounds and grid spacing
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, grid_step: f64) -> Self {
        Self { min_x, max_x, min_y, max_y, grid_step }
    }

    /// Horizontal extent of the region
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent of the region
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A generated drawing: descriptors in z-order plus their viewport
///
/// Each generation request produces a fresh `Drawing` that fully replaces
/// any previous one; nothing is updated incrementally.
#[derive(Clone, Debug)]
pub struct Drawing {
    viewport: Viewport,
    shapes: Vec<ShapeDescriptor>,
}

impl Drawing {
    /// Create a drawing from a viewport and an ordered shape list
    pub fn new(viewport: Viewport, shapes: Vec<ShapeDescriptor>) -> Self {
        Self { viewport, shapes }
    }

    /// Create a drawing with no shapes but a valid viewport
    ///
    /// Used by "clear": the grid of the previous region stays visible.
    pub fn empty(viewport: Viewport) -> Self {
        Self { viewport, shapes: Vec::new() }
    }

    /// The viewport the shapes were generated in
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The descriptors in z-order (first drawn first)
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// Total number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the drawing contains no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over the descriptors in z-order
    pub fn iter(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.shapes.iter()
    }

    /// Number of shapes of one kind
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }
}
