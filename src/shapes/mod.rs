//! Shapes module - geometric descriptors produced by the generator
//!
//! This module provides:
//! - Primitive shapes: Line, Circle, Rectangle, Triangle, Parabola, Trapezoid
//! - `ShapeDescriptor` enum for treating them uniformly
//! - `Drawing` bundling a generated batch with its viewport

mod color;
mod descriptor;
mod drawing;
mod primitives;

pub use color::Rgb;
pub use descriptor::{ShapeDescriptor, ShapeKind};
pub use drawing::{Drawing, Viewport};
pub use primitives::{Circle, Line, Parabola, Rectangle, Trapezoid, Triangle};
