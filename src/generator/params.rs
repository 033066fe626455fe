//! Generation request - shape counts, region bounds and distribution density
//!
//! The parameters are validated as a whole before generation so a caller
//! can surface every constraint violation the same way regardless of which
//! field was out of range.

use thiserror::Error;

use crate::shapes::{ShapeKind, Viewport};

/// Errors reported by [`InputParameters::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("Minimum {axis} must be less than maximum {axis} (got {min}..{max})")]
    InvalidBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Density must be between 0.0 and 1.0 (got {0})")]
    InvalidDensity(f64),

    #[error("Grid step cannot be negative (got {0})")]
    InvalidGridStep(f64),
}

/// Everything one generation request needs
///
/// Counts are unsigned so a negative request is unrepresentable. The bounds
/// and the density are validated by [`validate`](Self::validate); generation
/// itself never re-checks them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputParameters {
    /// Number of line segments
    pub line_count: u32,
    /// Number of circles
    pub circle_count: u32,
    /// Number of axis-aligned rectangles
    pub rectangle_count: u32,
    /// Number of triangles
    pub triangle_count: u32,
    /// Number of sampled parabolas
    pub parabola_count: u32,
    /// Number of isosceles trapezoids
    pub trapezoid_count: u32,

    /// Left edge of the generation region
    pub min_x: f64,
    /// Right edge of the generation region
    pub max_x: f64,
    /// Top edge of the generation region
    pub min_y: f64,
    /// Bottom edge of the generation region
    pub max_y: f64,

    /// Center bias of placement draws, 0.0 (uniform) to 1.0 (tight)
    pub density: f64,
    /// Background grid spacing in world units, 0 disables the grid
    pub grid_step: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            line_count: 5,
            circle_count: 5,
            rectangle_count: 5,
            triangle_count: 5,
            parabola_count: 5,
            trapezoid_count: 5,
            min_x: 500.0,
            max_x: 1000.0,
            min_y: 0.0,
            max_y: 500.0,
            density: 0.0,
            grid_step: 25.0,
        }
    }
}

impl InputParameters {
    /// Check the request as a whole, reporting the first violated constraint
    ///
    /// Bounds must satisfy `min < max` on both axes, density must lie in
    /// `0.0..=1.0` and the grid step must not be negative.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.min_x >= self.max_x {
            return Err(ParamsError::InvalidBounds {
                axis: "X",
                min: self.min_x,
                max: self.max_x,
            });
        }
        if self.min_y >= self.max_y {
            return Err(ParamsError::InvalidBounds {
                axis: "Y",
                min: self.min_y,
                max: self.max_y,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ParamsError::InvalidDensity(self.density));
        }
        if self.grid_step < 0.0 {
            return Err(ParamsError::InvalidGridStep(self.grid_step));
        }
        Ok(())
    }

    /// The region and grid these parameters describe
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.min_x, self.max_x, self.min_y, self.max_y, self.grid_step)
    }

    /// Requested count for one shape kind
    pub fn count_for(&self, kind: ShapeKind) -> u32 {
        match kind {
            ShapeKind::Line => self.line_count,
            ShapeKind::Circle => self.circle_count,
            ShapeKind::Rectangle => self.rectangle_count,
            ShapeKind::Triangle => self.triangle_count,
            ShapeKind::Parabola => self.parabola_count,
            ShapeKind::Trapezoid => self.trapezoid_count,
        }
    }

    /// Total number of shapes this request will produce
    pub fn total(&self) -> u32 {
        ShapeKind::all().iter().map(|&k| self.count_for(k)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = InputParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.total(), 30);
    }

    #[test]
    fn test_rejects_inverted_x_bounds() {
        let params = InputParameters {
            min_x: 1000.0,
            max_x: 500.0,
            ..Default::default()
        };
        match params.validate() {
            Err(ParamsError::InvalidBounds { axis, .. }) => assert_eq!(axis, "X"),
            other => panic!("expected X bounds error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_y_interval() {
        let params = InputParameters {
            min_y: 200.0,
            max_y: 200.0,
            ..Default::default()
        };
        match params.validate() {
            Err(ParamsError::InvalidBounds { axis, .. }) => assert_eq!(axis, "Y"),
            other => panic!("expected Y bounds error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_density() {
        for density in [-0.1, 1.5] {
            let params = InputParameters {
                density,
                ..Default::default()
            };
            assert_eq!(params.validate(), Err(ParamsError::InvalidDensity(density)));
        }
    }

    #[test]
    fn test_density_endpoints_are_valid() {
        for density in [0.0, 1.0] {
            let params = InputParameters {
                density,
                ..Default::default()
            };
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_negative_grid_step() {
        let params = InputParameters {
            grid_step: -5.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::InvalidGridStep(-5.0)));
    }

    #[test]
    fn test_zero_grid_step_disables_grid_but_is_valid() {
        let params = InputParameters {
            grid_step: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_count_for_matches_fields() {
        let params = InputParameters {
            line_count: 1,
            circle_count: 2,
            rectangle_count: 3,
            triangle_count: 4,
            parabola_count: 5,
            trapezoid_count: 6,
            ..Default::default()
        };
        assert_eq!(params.count_for(ShapeKind::Line), 1);
        assert_eq!(params.count_for(ShapeKind::Circle), 2);
        assert_eq!(params.count_for(ShapeKind::Rectangle), 3);
        assert_eq!(params.count_for(ShapeKind::Triangle), 4);
        assert_eq!(params.count_for(ShapeKind::Parabola), 5);
        assert_eq!(params.count_for(ShapeKind::Trapezoid), 6);
        assert_eq!(params.total(), 21);
    }

    #[test]
    fn test_viewport_echoes_bounds() {
        let params = InputParameters::default();
        let vp = params.viewport();
        assert_eq!(vp.min_x, 500.0);
        assert_eq!(vp.max_x, 1000.0);
        assert_eq!(vp.min_y, 0.0);
        assert_eq!(vp.max_y, 500.0);
        assert_eq!(vp.grid_step, 25.0);
    }
}
