//! Reachable velocity set sampling
//!
//! Enumerates a grid of actuator values under their limits, maps every pair
//! through a forward kinematic model and yields the resulting canonical
//! velocities. The grid is traversed row-major: the outer loop runs over the
//! first range, the inner loop over the second.

use itertools::iproduct;
use log::debug;

use crate::common::{CanonicalVelocity, ForwardKinematics, KinematicsError, KinematicsResult};

/// Inclusive, linearly spaced range of actuator values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorRange {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl ActuatorRange {
    pub fn new(min: f64, max: f64, samples: usize) -> KinematicsResult<Self> {
        let range = Self { min, max, samples };
        range.validate()?;
        Ok(range)
    }

    /// Symmetric range [-limit, limit]
    pub fn symmetric(limit: f64, samples: usize) -> KinematicsResult<Self> {
        Self::new(-limit, limit, samples)
    }

    pub fn validate(&self) -> KinematicsResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(KinematicsError::ConfigurationError(format!(
                "actuator range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(KinematicsError::ConfigurationError(format!(
                "actuator range min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn values(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.samples)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
///
/// `n == 0` gives an empty vector and `n == 1` gives `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Samples the canonical velocities reachable by a model under actuator limits
#[derive(Debug, Clone)]
pub struct ReachableSetSampler<F: ForwardKinematics> {
    model: F,
    first: ActuatorRange,
    second: ActuatorRange,
}

impl<F: ForwardKinematics> ReachableSetSampler<F> {
    pub fn new(model: F, first: ActuatorRange, second: ActuatorRange) -> KinematicsResult<Self> {
        first.validate()?;
        second.validate()?;
        Ok(Self { model, first, second })
    }

    pub fn model(&self) -> &F {
        &self.model
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.first.samples * self.second.samples
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily map every grid pair through the model
    pub fn iter(&self) -> impl Iterator<Item = KinematicsResult<CanonicalVelocity>> + '_ {
        iproduct!(self.first.values(), self.second.values())
            .map(move |(a, b)| self.model.pair_to_canonical(a, b))
    }

    /// Evaluate the whole grid, stopping at the first failed conversion
    pub fn sample(&self) -> KinematicsResult<Vec<CanonicalVelocity>> {
        let points = self.iter().collect::<KinematicsResult<Vec<_>>>()?;
        debug!("Sampled {} reachable velocities", points.len());
        Ok(points)
    }
}

/// Axis aligned bounds of a sampled velocity set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityBounds {
    pub v_min: f64,
    pub v_max: f64,
    pub omega_min: f64,
    pub omega_max: f64,
}

impl VelocityBounds {
    /// `None` for an empty set
    pub fn of(points: &[CanonicalVelocity]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            v_min: first.v,
            v_max: first.v,
            omega_min: first.omega,
            omega_max: first.omega,
        };
        Some(points.iter().fold(init, |b, p| Self {
            v_min: b.v_min.min(p.v),
            v_max: b.v_max.max(p.v),
            omega_min: b.omega_min.min(p.omega),
            omega_max: b.omega_max.max(p.omega),
        }))
    }
}
