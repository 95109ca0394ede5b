//! Common types used throughout kinematic_models

use std::f64::consts::PI;
use std::fmt;

use nalgebra::{Vector2, Vector3};

/// Left and right wheel angular velocities of a differential drive robot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelVelocities {
    pub left: f64,  // rad/s
    pub right: f64, // rad/s
}

impl WheelVelocities {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn zero() -> Self {
        Self { left: 0.0, right: 0.0 }
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.left, self.right)
    }
}

impl From<(f64, f64)> for WheelVelocities {
    fn from(tuple: (f64, f64)) -> Self {
        Self { left: tuple.0, right: tuple.1 }
    }
}

impl From<WheelVelocities> for (f64, f64) {
    fn from(w: WheelVelocities) -> Self {
        (w.left, w.right)
    }
}

impl From<Vector2<f64>> for WheelVelocities {
    fn from(v: Vector2<f64>) -> Self {
        Self { left: v[0], right: v[1] }
    }
}

impl fmt::Display for WheelVelocities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ωL: {:.3} rad/s, ωR: {:.3} rad/s)", self.left, self.right)
    }
}

/// Velocity of the canonical (unicycle) model
///
/// Tuple and vector conversions use the `(ω, v)` order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanonicalVelocity {
    pub omega: f64, // angular velocity [rad/s]
    pub v: f64,     // linear velocity [m/s]
}

impl CanonicalVelocity {
    pub fn new(omega: f64, v: f64) -> Self {
        Self { omega, v }
    }

    pub fn zero() -> Self {
        Self { omega: 0.0, v: 0.0 }
    }

    /// Path curvature γ = ω / v, `None` when the robot is not translating
    pub fn curvature(&self) -> Option<f64> {
        if self.v == 0.0 {
            None
        } else {
            Some(self.omega / self.v)
        }
    }

    /// Signed distance from the reference point to the instantaneous center
    /// of rotation, R = 1 / γ
    ///
    /// `None` for straight motion (γ = 0) and for pure rotation or rest (v = 0).
    pub fn icr_radius(&self) -> Option<f64> {
        match self.curvature() {
            Some(k) if k != 0.0 => Some(1.0 / k),
            _ => None,
        }
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.omega, self.v)
    }
}

impl From<(f64, f64)> for CanonicalVelocity {
    fn from(tuple: (f64, f64)) -> Self {
        Self { omega: tuple.0, v: tuple.1 }
    }
}

impl From<CanonicalVelocity> for (f64, f64) {
    fn from(c: CanonicalVelocity) -> Self {
        (c.omega, c.v)
    }
}

impl From<Vector2<f64>> for CanonicalVelocity {
    fn from(v: Vector2<f64>) -> Self {
        Self { omega: v[0], v: v[1] }
    }
}

impl fmt::Display for CanonicalVelocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ω: {:.3} rad/s, v: {:.3} m/s)", self.omega, self.v)
    }
}

/// Actuator command of a car-like (bicycle) robot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarInput {
    pub v: f64,   // rear axle linear velocity [m/s]
    pub phi: f64, // steering angle [rad]
}

impl CarInput {
    pub fn new(v: f64, phi: f64) -> Self {
        Self { v, phi }
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.v, self.phi)
    }
}

impl From<(f64, f64)> for CarInput {
    fn from(tuple: (f64, f64)) -> Self {
        Self { v: tuple.0, phi: tuple.1 }
    }
}

impl From<CarInput> for (f64, f64) {
    fn from(c: CarInput) -> Self {
        (c.v, c.phi)
    }
}

impl From<Vector2<f64>> for CarInput {
    fn from(v: Vector2<f64>) -> Self {
        Self { v: v[0], phi: v[1] }
    }
}

impl fmt::Display for CarInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(v: {:.3} m/s, φ: {:.3} rad)", self.v, self.phi)
    }
}

/// 2D pose (position + orientation) of the canonical model
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.yaw)
    }

    /// Integrate a constant canonical velocity over `dt` seconds
    ///
    /// Uses the exact arc solution when turning and the straight-line
    /// solution when ω is (numerically) zero. The resulting yaw is
    /// normalized to [-pi, pi].
    pub fn integrate(&self, velocity: CanonicalVelocity, dt: f64) -> Pose2D {
        let CanonicalVelocity { omega, v } = velocity;
        let yaw_next = self.yaw + omega * dt;

        let (dx, dy) = if omega.abs() < 1e-12 {
            (v * self.yaw.cos() * dt, v * self.yaw.sin() * dt)
        } else {
            let r = v / omega;
            (
                r * (yaw_next.sin() - self.yaw.sin()),
                -r * (yaw_next.cos() - self.yaw.cos()),
            )
        };

        let mut pose = Pose2D::new(self.x + dx, self.y + dy, yaw_next);
        pose.normalize_yaw();
        pose
    }

    /// Normalize yaw to [-pi, pi]
    ///
    /// A non-finite yaw becomes NaN.
    pub fn normalize_yaw(&mut self) {
        self.yaw = self.yaw.sin().atan2(self.yaw.cos());
    }
}

impl From<Vector3<f64>> for Pose2D {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v[0], y: v[1], yaw: v[2] }
    }
}
