//! Generator module - parameters, random draws and the generation engine
//!
//! This module provides:
//! - `InputParameters` describing one generation request, with validation
//! - `Sampler` wrapping the random draws every shape is built from
//! - `ShapeGenerator` turning a request into a `Drawing`

mod engine;
mod params;
mod sampler;

pub use engine::ShapeGenerator;
pub use params::{InputParameters, ParamsError};
pub use sampler::Sampler;
