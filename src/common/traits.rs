//! Common traits defining interfaces for path planners

use crate::common::error::DubinsError;
use crate::common::types::*;

/// Trait for pose-to-waypoint path planning algorithms
pub trait PathPlanner {
    /// Plan a path from the start pose to the goal point
    fn plan(&self, start: Pose2D, goal: Point2D) -> Result<Path2D, DubinsError>;
}
