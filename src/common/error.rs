//! Error types for kinematic_models

use std::fmt;

/// Main error type for kinematic conversions
#[derive(Debug)]
pub enum KinematicsError {
    /// Non-physical geometry or an invalid actuator range
    ConfigurationError(String),
    /// Input outside the domain of a conversion (steering singularity, etc.)
    DomainError(String),
    /// Geometry file could not be parsed
    ConfigLoadError(String),
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl KinematicsError {
    /// True for `DomainError`, the only failure raised by a conversion with valid geometry
    pub fn is_domain(&self) -> bool {
        matches!(self, KinematicsError::DomainError(_))
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            KinematicsError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            KinematicsError::ConfigLoadError(msg) => write!(f, "Config load error: {}", msg),
            KinematicsError::IoError(e) => write!(f, "I/O error: {}", e),
            KinematicsError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for KinematicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KinematicsError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KinematicsError {
    fn from(e: std::io::Error) -> Self {
        KinematicsError::IoError(e)
    }
}

impl From<toml::de::Error> for KinematicsError {
    fn from(e: toml::de::Error) -> Self {
        KinematicsError::ConfigLoadError(e.to_string())
    }
}

/// Result type alias for kinematic conversions
pub type KinematicsResult<T> = Result<T, KinematicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KinematicsError::DomainError("steering angle at +/-pi/2".to_string());
        assert_eq!(format!("{}", err), "Domain error: steering angle at +/-pi/2");
        assert!(err.is_domain());

        let err = KinematicsError::ConfigurationError("wheel radius must be positive".to_string());
        assert_eq!(format!("{}", err), "Configuration error: wheel radius must be positive");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KinematicsError = io_err.into();
        assert!(matches!(err, KinematicsError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_from_toml() {
        let parse: Result<toml::Value, toml::de::Error> = toml::from_str("wheel_radius = ");
        let err: KinematicsError = parse.unwrap_err().into();
        assert!(matches!(err, KinematicsError::ConfigLoadError(_)));
        assert!(!err.is_domain());
    }
}
