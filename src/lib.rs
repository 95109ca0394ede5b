//! kinematic_models - conversions between the canonical unicycle model
//! and physical robot geometries
//!
//! This crate maps differential drive wheel speeds and car-like
//! (bicycle) commands to and from canonical (ω, v) velocities, and
//! samples the velocity sets reachable under actuator limits.

// Core modules
pub mod common;
pub mod config;
pub mod utils;

// Model modules
pub mod kinematics;
pub mod sampling;

// Re-export common types for convenience
pub use common::{CanonicalVelocity, CarInput, Pose2D, WheelVelocities};
pub use common::{ForwardKinematics, InverseKinematics};
pub use common::{KinematicsError, KinematicsResult};
pub use config::RobotGeometry;
pub use kinematics::{
    canonical_to_car, canonical_to_diffdrive, car_to_canonical, diffdrive_to_canonical, CarLike,
    DiffDrive,
};
pub use sampling::{ActuatorRange, ReachableSetSampler};
