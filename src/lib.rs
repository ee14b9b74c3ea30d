//! simple_dubins_path - single-turn Dubins path planning
//!
//! This crate plans a feasible path for a vehicle with a fixed minimum
//! turning radius from a start pose to a target waypoint: one circular arc
//! followed by a straight tangent line ending exactly at the target.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Path2D};
pub use common::PathPlanner;
pub use common::{DubinsError, DubinsResult};
pub use path_planning::simple_dubins::{SimpleDubinsConfig, SimpleDubinsPlanner, TurnSide};
