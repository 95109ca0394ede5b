//! Utility modules for kinematic_models

pub mod visualization;

pub use visualization::{Visualizer, PointStyle, colors};
