//! Shape descriptors - the tagged variants handed to a renderer
//!
//! `ShapeKind` enumerates the six kinds in their fixed generation order,
//! which is also the z-order when a drawing is painted (later kinds land
//! on top). `ShapeDescriptor` wraps the per-kind geometry records.

use super::color::Rgb;
use super::primitives::{Circle, Line, Parabola, Rectangle, Trapezoid, Triangle};

/// The six shape kinds, in generation order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Line,
    Circle,
    Rectangle,
    Triangle,
    Parabola,
    Trapezoid,
}

impl ShapeKind {
    /// All kinds in generation order: lines first, trapezoids last
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Line,
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
            ShapeKind::Parabola,
            ShapeKind::Trapezoid,
        ]
    }

    /// Display name of this kind (for UI labels)
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Parabola => "Parabola",
            ShapeKind::Trapezoid => "Trapezoid",
        }
    }
}

/// One generated shape, ready to be rendered
///
/// Descriptors are immutable records: the generator creates them once and
/// the caller owns them afterwards. Rendering is entirely up to the
/// receiver, so this enum carries geometry and color but knows nothing
/// about any graphics backend.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Parabola(Parabola),
    Trapezoid(Trapezoid),
}

impl ShapeDescriptor {
    /// The kind discriminant of this descriptor
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDescriptor::Line(_) => ShapeKind::Line,
            ShapeDescriptor::Circle(_) => ShapeKind::Circle,
            ShapeDescriptor::Rectangle(_) => ShapeKind::Rectangle,
            ShapeDescriptor::Triangle(_) => ShapeKind::Triangle,
            ShapeDescriptor::Parabola(_) => ShapeKind::Parabola,
            ShapeDescriptor::Trapezoid(_) => ShapeKind::Trapezoid,
        }
    }

    /// The stroke color of this descriptor
    pub fn color(&self) -> Rgb {
        match self {
            ShapeDescriptor::Line(s) => s.color,
            ShapeDescriptor::Circle(s) => s.color,
            ShapeDescriptor::Rectangle(s) => s.color,
            ShapeDescriptor::Triangle(s) => s.color,
            ShapeDescriptor::Parabola(s) => s.color,
            ShapeDescriptor::Trapezoid(s) => s.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order() {
        let kinds = ShapeKind::all();
        assert_eq!(kinds.len(), 6);
        assert_eq!(kinds[0], ShapeKind::Line);
        assert_eq!(kinds[5], ShapeKind::Trapezoid);
    }

    #[test]
    fn test_descriptor_kind_and_color() {
        let color = Rgb::new(1, 2, 3);
        let descriptor = ShapeDescriptor::Circle(Circle::new(0.0, 0.0, 5.0, color));
        assert_eq!(descriptor.kind(), ShapeKind::Circle);
        assert_eq!(descriptor.color(), color);
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let mut names: Vec<&str> = ShapeKind::all().iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
