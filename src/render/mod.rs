//! Render module - UI components for visualization
//!
//! This module provides:
//! - Drawing canvas widget with grid overlay

mod canvas;

pub use canvas::{Canvas, CanvasSettings};
