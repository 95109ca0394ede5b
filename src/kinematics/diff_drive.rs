//! Differential drive kinematics
//!
//! Two independently driven wheels of radius r, mounted d apart on a common
//! axle. The canonical reference point is the middle of the axle.
//!
//! Forward:  v = r (ωR + ωL) / 2,  ω = r (ωR - ωL) / d
//! Inverse:  ωL = (v - ω d / 2) / r,  ωR = (v + ω d / 2) / r

use std::fmt;

use log::debug;

use crate::common::{
    CanonicalVelocity, ForwardKinematics, InverseKinematics, KinematicsResult, WheelVelocities,
};
use crate::config::RobotGeometry;

/// Differential drive model with validated geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffDrive {
    wheel_radius: f64,
    track_width: f64,
}

impl DiffDrive {
    /// Build from the differential drive part of a geometry
    pub fn new(geometry: &RobotGeometry) -> KinematicsResult<Self> {
        geometry.validate_diff_drive()?;
        debug!(
            "DiffDrive model: r = {} m, d = {} m",
            geometry.wheel_radius, geometry.track_width
        );
        Ok(Self {
            wheel_radius: geometry.wheel_radius,
            track_width: geometry.track_width,
        })
    }

    pub fn with_defaults() -> Self {
        let g = RobotGeometry::default();
        Self {
            wheel_radius: g.wheel_radius,
            track_width: g.track_width,
        }
    }

    pub fn wheel_radius(&self) -> f64 {
        self.wheel_radius
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Wheel angular velocities to canonical (ω, v)
    pub fn wheels_to_canonical(&self, wheels: WheelVelocities) -> CanonicalVelocity {
        let r = self.wheel_radius;
        let v = r * (wheels.right + wheels.left) / 2.0;
        let omega = r * (wheels.right - wheels.left) / self.track_width;
        CanonicalVelocity::new(omega, v)
    }

    /// Canonical (ω, v) to wheel angular velocities
    pub fn canonical_to_wheels(&self, velocity: CanonicalVelocity) -> WheelVelocities {
        let half_track = self.track_width / 2.0;
        let left = (velocity.v - velocity.omega * half_track) / self.wheel_radius;
        let right = (velocity.v + velocity.omega * half_track) / self.wheel_radius;
        WheelVelocities::new(left, right)
    }
}

impl Default for DiffDrive {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ForwardKinematics for DiffDrive {
    type Input = WheelVelocities;

    fn to_canonical(&self, input: WheelVelocities) -> KinematicsResult<CanonicalVelocity> {
        Ok(self.wheels_to_canonical(input))
    }
}

impl InverseKinematics for DiffDrive {
    type Output = WheelVelocities;

    fn from_canonical(&self, velocity: CanonicalVelocity) -> KinematicsResult<WheelVelocities> {
        Ok(self.canonical_to_wheels(velocity))
    }
}

impl fmt::Display for DiffDrive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiffDrive (r: {:.3} m, d: {:.3} m)", self.wheel_radius, self.track_width)
    }
}

/// Wheel angular velocities (ωL, ωR) to canonical velocity
///
/// Fails with `ConfigurationError` if r or d is not positive.
pub fn diffdrive_to_canonical(
    w_left: f64,
    w_right: f64,
    geometry: &RobotGeometry,
) -> KinematicsResult<CanonicalVelocity> {
    let model = DiffDrive::new(geometry)?;
    Ok(model.wheels_to_canonical(WheelVelocities::new(w_left, w_right)))
}

/// Canonical velocity (ω, v) to wheel angular velocities
///
/// Fails with `ConfigurationError` if r or d is not positive.
pub fn canonical_to_diffdrive(
    omega: f64,
    v: f64,
    geometry: &RobotGeometry,
) -> KinematicsResult<WheelVelocities> {
    let model = DiffDrive::new(geometry)?;
    Ok(model.canonical_to_wheels(CanonicalVelocity::new(omega, v)))
}
