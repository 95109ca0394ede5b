//! Robot geometry configuration
//!
//! Physical constants shared by the kinematic models. Values can be
//! loaded from a TOML file; keys missing from the file keep their defaults.
//!
//! ```toml
//! wheel_radius = 0.1   # [m]
//! track_width = 0.2    # [m]
//! wheel_base = 0.5     # [m]
//! ```

use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::{KinematicsError, KinematicsResult};

/// Geometry of the supported robots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotGeometry {
    /// Differential drive wheel radius r [m]
    pub wheel_radius: f64,
    /// Differential drive distance between the wheels d [m]
    pub track_width: f64,
    /// Car-like distance between rear and front axle L [m]
    pub wheel_base: f64,
}

impl Default for RobotGeometry {
    fn default() -> Self {
        Self {
            wheel_radius: 0.1,
            track_width: 0.2,
            wheel_base: 0.5,
        }
    }
}

impl RobotGeometry {
    pub fn new(wheel_radius: f64, track_width: f64, wheel_base: f64) -> Self {
        Self { wheel_radius, track_width, wheel_base }
    }

    /// Load a geometry from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> KinematicsResult<Self> {
        let path = path.as_ref();
        let contents = read_to_string(path)?;
        let geometry = Self::from_toml_str(&contents)?;
        debug!("Loaded robot geometry from {:?}: {:?}", path, geometry);
        Ok(geometry)
    }

    /// Parse and validate a geometry from TOML text
    pub fn from_toml_str(contents: &str) -> KinematicsResult<Self> {
        let geometry: RobotGeometry = toml::from_str(contents)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check every constant is finite and strictly positive
    pub fn validate(&self) -> KinematicsResult<()> {
        self.validate_diff_drive()?;
        self.validate_car_like()
    }

    /// Check the constants used by the differential drive model
    pub fn validate_diff_drive(&self) -> KinematicsResult<()> {
        require_positive("wheel radius", self.wheel_radius)?;
        require_positive("track width", self.track_width)
    }

    /// Check the constants used by the car-like model
    pub fn validate_car_like(&self) -> KinematicsResult<()> {
        require_positive("wheel base", self.wheel_base)
    }
}

fn require_positive(name: &str, value: f64) -> KinematicsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(KinematicsError::ConfigurationError(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let g = RobotGeometry::default();
        assert_eq!(g.wheel_radius, 0.1);
        assert_eq!(g.track_width, 0.2);
        assert_eq!(g.wheel_base, 0.5);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let g = RobotGeometry::from_toml_str("wheel_base = 0.8\n").unwrap();
        assert_eq!(g.wheel_base, 0.8);
        assert_eq!(g.wheel_radius, 0.1);
        assert_eq!(g.track_width, 0.2);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let err = RobotGeometry::from_toml_str("wheel_radius = -0.1\n").unwrap_err();
        assert!(matches!(err, KinematicsError::ConfigurationError(_)));

        let g = RobotGeometry::new(0.1, 0.2, 0.0);
        assert!(g.validate_diff_drive().is_ok());
        assert!(g.validate_car_like().is_err());

        let g = RobotGeometry::new(f64::NAN, 0.2, 0.5);
        assert!(g.validate_diff_drive().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RobotGeometry::from_toml_str("wheel_radius = \"wide\"\n").unwrap_err();
        assert!(matches!(err, KinematicsError::ConfigLoadError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RobotGeometry::load("/nonexistent/geometry.toml").unwrap_err();
        assert!(matches!(err, KinematicsError::IoError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("kinematic_models_geometry_test.toml");
        std::fs::write(&path, "wheel_radius = 0.05\ntrack_width = 0.3\n").unwrap();
        let g = RobotGeometry::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(g.wheel_radius, 0.05);
        assert_eq!(g.track_width, 0.3);
        assert_eq!(g.wheel_base, 0.5);
    }
}
