//! Shape generation - turns a parameter set into a finished drawing
//!
//! Shapes are generated kind by kind in a fixed order, and that order is
//! the z-order a renderer should draw them in: lines first (bottom),
//! trapezoids last (top). Placement coordinates come from the density-biased
//! draw; dimensions come from plain uniform draws so shape sizes do not
//! shrink as the density rises.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::shapes::{
    Circle, Drawing, Line, Parabola, Rectangle, ShapeDescriptor, ShapeKind, Trapezoid, Triangle,
};

use super::params::InputParameters;
use super::sampler::Sampler;

/// Parabola coefficient `a` is drawn from `[-A_RANGE, A_RANGE)`
const PARABOLA_A_RANGE: f64 = 0.005;
/// Parabola coefficient `b` is drawn from `[-B_RANGE, B_RANGE)`
const PARABOLA_B_RANGE: f64 = 0.25;

/// Generates one drawing per request from a parameter set
///
/// A generator owns its random source and is not safe for concurrent
/// invocation; use one instance per call context or guard it externally.
pub struct ShapeGenerator<R: Rng> {
    sampler: Sampler<R>,
}

impl ShapeGenerator<ThreadRng> {
    /// Generator backed by the thread-local random source
    pub fn new() -> Self {
        Self { sampler: Sampler::new() }
    }
}

impl Default for ShapeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ShapeGenerator<R> {
    /// Generator backed by a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self { sampler: Sampler::with_rng(rng) }
    }

    /// Produce a fresh drawing for `params`
    ///
    /// Bounds and density are taken as given; run
    /// [`InputParameters::validate`] first. Each call replaces the previous
    /// drawing wholesale, there is no incremental update.
    pub fn generate(&mut self, params: &InputParameters) -> Drawing {
        log::info!(
            "Generating shapes: lines={} circles={} rectangles={} triangles={} parabolas={} trapezoids={}",
            params.line_count,
            params.circle_count,
            params.rectangle_count,
            params.triangle_count,
            params.parabola_count,
            params.trapezoid_count,
        );

        let mut shapes = Vec::with_capacity(params.total() as usize);
        for &kind in ShapeKind::all() {
            for _ in 0..params.count_for(kind) {
                shapes.push(self.random_shape(kind, params));
            }
        }

        log::info!("Total shapes created: {}", shapes.len());
        Drawing::new(params.viewport(), shapes)
    }

    fn random_shape(&mut self, kind: ShapeKind, p: &InputParameters) -> ShapeDescriptor {
        match kind {
            ShapeKind::Line => ShapeDescriptor::Line(self.random_line(p)),
            ShapeKind::Circle => ShapeDescriptor::Circle(self.random_circle(p)),
            ShapeKind::Rectangle => ShapeDescriptor::Rectangle(self.random_rectangle(p)),
            ShapeKind::Triangle => ShapeDescriptor::Triangle(self.random_triangle(p)),
            ShapeKind::Parabola => ShapeDescriptor::Parabola(self.random_parabola(p)),
            ShapeKind::Trapezoid => ShapeDescriptor::Trapezoid(self.random_trapezoid(p)),
        }
    }

    /// Both endpoints placed independently over the full region
    fn random_line(&mut self, p: &InputParameters) -> Line {
        let x1 = self.sampler.biased(p.min_x, p.max_x, p.density);
        let y1 = self.sampler.biased(p.min_y, p.max_y, p.density);
        let x2 = self.sampler.biased(p.min_x, p.max_x, p.density);
        let y2 = self.sampler.biased(p.min_y, p.max_y, p.density);
        Line::new(x1, y1, x2, y2, self.sampler.color())
    }

    /// Radius first, then a center placed so the disc fits the region
    ///
    /// When the radius exceeds half a region extent the center interval
    /// pinches shut and the biased draw falls back to its midpoint band,
    /// so an oversized circle may overflow the region.
    fn random_circle(&mut self, p: &InputParameters) -> Circle {
        let radius = self.sampler.uniform(10.0, 50.0);
        let cx = self.sampler.biased(p.min_x + radius, p.max_x - radius, p.density);
        let cy = self.sampler.biased(p.min_y + radius, p.max_y - radius, p.density);
        Circle::new(cx, cy, radius, self.sampler.color())
    }

    /// Dimensions first, then a top-left corner placed so the box fits
    fn random_rectangle(&mut self, p: &InputParameters) -> Rectangle {
        let width = self.sampler.uniform(20.0, 80.0);
        let height = self.sampler.uniform(20.0, 80.0);
        let x = self.sampler.biased(p.min_x, p.max_x - width, p.density);
        let y = self.sampler.biased(p.min_y, p.max_y - height, p.density);
        Rectangle::new(x, y, width, height, self.sampler.color())
    }

    /// Three independent vertices; degenerate triangles are allowed
    fn random_triangle(&mut self, p: &InputParameters) -> Triangle {
        let mut vertices = [(0.0, 0.0); 3];
        for vertex in &mut vertices {
            vertex.0 = self.sampler.biased(p.min_x, p.max_x, p.density);
            vertex.1 = self.sampler.biased(p.min_y, p.max_y, p.density);
        }
        Triangle::new(vertices, self.sampler.color())
    }

    /// Coefficients over fixed ranges, vertical offset biased over the region
    ///
    /// The quadratic is evaluated at absolute X coordinates, so far from the
    /// origin even a small `a` can push the curve well outside the region.
    /// Clipping is the renderer's concern.
    fn random_parabola(&mut self, p: &InputParameters) -> Parabola {
        let a = self.sampler.uniform(-PARABOLA_A_RANGE, PARABOLA_A_RANGE);
        let b = self.sampler.uniform(-PARABOLA_B_RANGE, PARABOLA_B_RANGE);
        let c = self.sampler.biased(p.min_y, p.max_y, p.density);
        Parabola::new(a, b, c, p.min_x, p.max_x, self.sampler.color())
    }

    /// Widths and height first, then the bottom-left base corner
    ///
    /// The top width is drawn up to 20 past the bottom width, so a
    /// trapezoid can come out wider on top than on the bottom.
    fn random_trapezoid(&mut self, p: &InputParameters) -> Trapezoid {
        let bottom_width = self.sampler.uniform(40.0, 100.0);
        let top_width = self.sampler.uniform(20.0, 20.0 + bottom_width);
        let height = self.sampler.uniform(20.0, 60.0);
        let base_x = self.sampler.biased(p.min_x, p.max_x - bottom_width, p.density);
        let base_y = self.sampler.biased(p.min_y + height, p.max_y, p.density);
        Trapezoid::isosceles(
            base_x,
            base_y,
            bottom_width,
            top_width,
            height,
            self.sampler.color(),
        )
    }
}
