//! Common types, traits, and error definitions for kinematic_models
//!
//! This module provides the value types and interfaces shared by the
//! kinematic models, the sampler and the visualizer.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
