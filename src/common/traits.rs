//! Common traits defining interfaces for robot kinematic models

use crate::common::error::KinematicsResult;
use crate::common::types::CanonicalVelocity;

/// Maps a pair of physical actuator values to a canonical velocity
pub trait ForwardKinematics {
    /// Physical input type (wheel speeds, car command, ...)
    type Input: From<(f64, f64)>;

    /// Convert a physical input into canonical (ω, v)
    fn to_canonical(&self, input: Self::Input) -> KinematicsResult<CanonicalVelocity>;

    /// Convert from an `(a, b)` actuator pair, in the order the input's
    /// tuple conversion expects
    fn pair_to_canonical(&self, a: f64, b: f64) -> KinematicsResult<CanonicalVelocity> {
        self.to_canonical(Self::Input::from((a, b)))
    }
}

/// Maps a canonical velocity back to physical actuator values
pub trait InverseKinematics {
    /// Physical output type
    type Output;

    /// Convert canonical (ω, v) into a physical command
    fn from_canonical(&self, velocity: CanonicalVelocity) -> KinematicsResult<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::WheelVelocities;

    // Averages the two wheels; just enough to exercise the default method
    struct Averaging;

    impl ForwardKinematics for Averaging {
        type Input = WheelVelocities;

        fn to_canonical(&self, input: WheelVelocities) -> KinematicsResult<CanonicalVelocity> {
            Ok(CanonicalVelocity::new(0.0, (input.left + input.right) / 2.0))
        }
    }

    #[test]
    fn test_pair_to_canonical_uses_tuple_order() {
        let c = Averaging.pair_to_canonical(1.0, 3.0).unwrap();
        assert_eq!(c, CanonicalVelocity::new(0.0, 2.0));
    }
}
