//! Primitive shapes - Line, Circle, Rectangle, Triangle, Parabola, Trapezoid
//!
//! These are the building blocks of a generated drawing. Each struct is a
//! plain geometry record plus its stroke color: construction happens in the
//! generator, painting happens in the render shell.

use super::color::Rgb;

/// A line segment from (x1, y1) to (x2, y2)
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Rgb,
}

impl Line {
    /// Create a new line from (x1, y1) to (x2, y2)
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) -> Self {
        Self { x1, y1, x2, y2, color }
    }
}

/// A circle centered at (cx, cy) with given radius
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    /// Center X coordinate
    pub cx: f64,
    /// Center Y coordinate
    pub cy: f64,
    /// Radius in world units
    pub radius: f64,
    pub color: Rgb,
}

impl Circle {
    /// Create a circle at a specific position
    pub fn new(cx: f64, cy: f64, radius: f64, color: Rgb) -> Self {
        Self { cx, cy, radius, color }
    }

    /// Leftmost X the circle touches
    pub fn left(&self) -> f64 {
        self.cx - self.radius
    }

    /// Rightmost X the circle touches
    pub fn right(&self) -> f64 {
        self.cx + self.radius
    }

    /// Topmost Y the circle touches (Y grows downward)
    pub fn top(&self) -> f64 {
        self.cy - self.radius
    }

    /// Bottommost Y the circle touches
    pub fn bottom(&self) -> f64 {
        self.cy + self.radius
    }
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Top-left corner X
    pub x: f64,
    /// Top-left corner Y
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Rgb) -> Self {
        Self { x, y, width, height, color }
    }

    /// X of the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y of the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A triangle given by three vertices
///
/// Vertices are sampled independently, so duplicate or collinear points
/// are possible; such triangles still render (as a point or a segment).
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [(f64, f64); 3],
    pub color: Rgb,
}

impl Triangle {
    /// Create a triangle from three vertices
    pub fn new(vertices: [(f64, f64); 3], color: Rgb) -> Self {
        Self { vertices, color }
    }

    /// Whether the vertices are duplicated or exactly collinear (zero area)
    pub fn is_degenerate(&self) -> bool {
        let [(x1, y1), (x2, y2), (x3, y3)] = self.vertices;
        // Twice the signed area via the cross product
        let area = (x2 - x1) * (y3 - y1) - (x3 - x1) * (y2 - y1);
        area == 0.0
    }
}

/// A parabolic arc across a fixed X range
///
/// ## Polynomial
/// ```text
/// f(x) = a·x² + b·x + c
/// ```
///
/// The descriptor stores the coefficients; [`Parabola::points`] discretizes
/// the curve into `STEPS` equal intervals over `[x_start, x_end]`, giving
/// `STEPS + 1` polyline points with both endpoints included.
#[derive(Clone, Debug, PartialEq)]
pub struct Parabola {
    /// Quadratic coefficient
    pub a: f64,
    /// Linear coefficient
    pub b: f64,
    /// Constant offset
    pub c: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub color: Rgb,
}

impl Parabola {
    /// Number of discretization intervals used by [`Parabola::points`]
    pub const STEPS: usize = 40;

    /// Create a parabola from its coefficients and X range
    pub fn new(a: f64, b: f64, c: f64, x_start: f64, x_end: f64, color: Rgb) -> Self {
        Self { a, b, c, x_start, x_end, color }
    }

    /// Evaluate the polynomial at `x`
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// The polyline approximating the curve: `STEPS + 1` points with X
    /// linearly spaced from `x_start` to `x_end` inclusive
    pub fn points(&self) -> Vec<(f64, f64)> {
        let steps = Self::STEPS;
        let mut points = Vec::with_capacity(steps + 1);
        for k in 0..=steps {
            let x = self.x_start + (self.x_end - self.x_start) * k as f64 / steps as f64;
            points.push((x, self.eval(x)));
        }
        points
    }
}

/// An isosceles trapezoid given by its four corners
///
/// Vertex order is bottom-left, bottom-right, top-right, top-left; the
/// bottom edge sits at the base Y and the top edge `height` above it
/// (Y grows downward, so "above" means smaller Y).
#[derive(Clone, Debug, PartialEq)]
pub struct Trapezoid {
    pub vertices: [(f64, f64); 4],
    pub color: Rgb,
}

impl Trapezoid {
    /// Build a trapezoid from its base position and dimensions
    ///
    /// The top edge is horizontally centered over the bottom edge:
    /// its left end is offset by `(bottom_width - top_width) / 2`.
    /// `top_width` may exceed `bottom_width`, in which case the shape is
    /// wider on top and the offset is negative.
    pub fn isosceles(
        base_x: f64,
        base_y: f64,
        bottom_width: f64,
        top_width: f64,
        height: f64,
        color: Rgb,
    ) -> Self {
        let top_offset = (bottom_width - top_width) / 2.0;
        let vertices = [
            (base_x, base_y),
            (base_x + bottom_width, base_y),
            (base_x + top_offset + top_width, base_y - height),
            (base_x + top_offset, base_y - height),
        ];
        Self { vertices, color }
    }
}
