//! doodle-rs - randomized drawing generator
//!
//! Scatters colored geometric figures over a rectangular coordinate region:
//! lines, circles, rectangles, triangles, parabolas and trapezoids. Where a
//! shape is placed is controlled by a density parameter that pulls positions
//! toward the region's center; how big it is stays uniform regardless.
//!
//! The library produces plain shape descriptors and never touches a screen,
//! so the same `Drawing` can back a GUI canvas, an image export or a test.

pub mod generator;
pub mod shapes;

pub use generator::{InputParameters, ParamsError, Sampler, ShapeGenerator};
pub use shapes::{Drawing, Rgb, ShapeDescriptor, ShapeKind, Viewport};
