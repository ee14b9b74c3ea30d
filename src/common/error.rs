//! Error types for simple_dubins_path

use std::fmt;

use crate::common::types::Point2D;

/// Main error type for the path planner
#[derive(Debug)]
pub enum DubinsError {
    /// Goal lies strictly inside the selected turning circle, so no tangent line exists
    Unreachable {
        goal: Point2D,
        center: Point2D,
        turning_radius: f64,
    },
    /// Invalid parameter or input
    InvalidParameter(String),
    /// Parameter file could not be parsed
    ConfigError(String),
    /// I/O error
    IoError(std::io::Error),
}

impl fmt::Display for DubinsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DubinsError::Unreachable { goal, center, turning_radius } => write!(
                f,
                "Target ({:.3}, {:.3}) not reachable with simple Dubins path: \
                 {:.3} from turning circle center ({:.3}, {:.3}) with radius {:.3}",
                goal.x,
                goal.y,
                goal.distance(center),
                center.x,
                center.y,
                turning_radius
            ),
            DubinsError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            DubinsError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DubinsError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DubinsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DubinsError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DubinsError {
    fn from(e: std::io::Error) -> Self {
        DubinsError::IoError(e)
    }
}

impl From<toml::de::Error> for DubinsError {
    fn from(e: toml::de::Error) -> Self {
        DubinsError::ConfigError(e.to_string())
    }
}

impl DubinsError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, DubinsError::Unreachable { .. })
    }
}

/// Result type alias for planner operations
pub type DubinsResult<T> = Result<T, DubinsError>;
