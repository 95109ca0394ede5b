//! Car-like (bicycle) kinematics
//!
//! The reference point is the middle of the rear axle; the front axle sits
//! L ahead of it and is steered by φ. The instantaneous center of rotation
//! lies on the rear axle line at distance R = L / tan(φ), so the curvature
//! is γ = tan(φ) / L and ω = γ v.

use std::fmt;

use log::{debug, warn};

use crate::common::{
    CanonicalVelocity, CarInput, ForwardKinematics, InverseKinematics, KinematicsError,
    KinematicsResult,
};
use crate::config::RobotGeometry;

/// |cos φ| below this is treated as the ±π/2 steering singularity
const STEERING_SINGULARITY_EPS: f64 = 1e-9;

/// Car-like model with validated wheel base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarLike {
    wheel_base: f64,
}

impl CarLike {
    /// Build from the car-like part of a geometry
    pub fn new(geometry: &RobotGeometry) -> KinematicsResult<Self> {
        geometry.validate_car_like()?;
        debug!("CarLike model: L = {} m", geometry.wheel_base);
        Ok(Self { wheel_base: geometry.wheel_base })
    }

    pub fn with_defaults() -> Self {
        Self { wheel_base: RobotGeometry::default().wheel_base }
    }

    pub fn wheel_base(&self) -> f64 {
        self.wheel_base
    }

    /// Rear axle velocity and steering angle to canonical (ω, v)
    ///
    /// # Errors
    /// `DomainError` when φ is at ±π/2 (tan undefined) or an input is not finite.
    pub fn car_to_canonical(&self, input: CarInput) -> KinematicsResult<CanonicalVelocity> {
        if !input.v.is_finite() || !input.phi.is_finite() {
            return Err(domain_error(format!("non-finite car input {}", input)));
        }
        if input.phi.cos().abs() < STEERING_SINGULARITY_EPS {
            return Err(domain_error(format!(
                "steering angle {} rad is at the +/-pi/2 singularity",
                input.phi
            )));
        }

        let curvature = input.phi.tan() / self.wheel_base;
        Ok(CanonicalVelocity::new(curvature * input.v, input.v))
    }

    /// Canonical (ω, v) to rear axle velocity and steering angle
    ///
    /// The steering angle stays in (-π/2, π/2) for both driving directions.
    /// A stopped robot (v = 0, ω = 0) maps to straight wheels.
    ///
    /// # Errors
    /// `DomainError` for v = 0 with ω ≠ 0 (a car cannot turn in place) or
    /// for non-finite input.
    pub fn canonical_to_car(&self, velocity: CanonicalVelocity) -> KinematicsResult<CarInput> {
        let CanonicalVelocity { omega, v } = velocity;
        if !omega.is_finite() || !v.is_finite() {
            return Err(domain_error(format!("non-finite canonical velocity {}", velocity)));
        }
        if v == 0.0 {
            if omega == 0.0 {
                return Ok(CarInput::new(0.0, 0.0));
            }
            return Err(domain_error(format!(
                "cannot rotate in place at {} rad/s with zero linear velocity",
                omega
            )));
        }

        // atan2 on |v| keeps φ on the front half plane when reversing
        let phi = (omega * self.wheel_base * v.signum()).atan2(v.abs());
        Ok(CarInput::new(v, phi))
    }
}

impl Default for CarLike {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ForwardKinematics for CarLike {
    type Input = CarInput;

    fn to_canonical(&self, input: CarInput) -> KinematicsResult<CanonicalVelocity> {
        self.car_to_canonical(input)
    }
}

impl InverseKinematics for CarLike {
    type Output = CarInput;

    fn from_canonical(&self, velocity: CanonicalVelocity) -> KinematicsResult<CarInput> {
        self.canonical_to_car(velocity)
    }
}

impl fmt::Display for CarLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarLike (L: {:.3} m)", self.wheel_base)
    }
}

fn domain_error(msg: String) -> KinematicsError {
    warn!("{}", msg);
    KinematicsError::DomainError(msg)
}

/// Rear axle velocity and steering angle (v, φ) to canonical velocity
pub fn car_to_canonical(v: f64, phi: f64, geometry: &RobotGeometry) -> KinematicsResult<CanonicalVelocity> {
    CarLike::new(geometry)?.car_to_canonical(CarInput::new(v, phi))
}

/// Canonical velocity (ω, v) to rear axle velocity and steering angle
pub fn canonical_to_car(omega: f64, v: f64, geometry: &RobotGeometry) -> KinematicsResult<CarInput> {
    CarLike::new(geometry)?.canonical_to_car(CanonicalVelocity::new(omega, v))
}
