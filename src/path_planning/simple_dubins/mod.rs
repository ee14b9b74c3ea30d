//! Simple Dubins Path Module
//!
//! Single-turn variant of Dubins path planning for a vehicle with a fixed
//! minimum turning radius: the vehicle follows one turning circle from its
//! start pose, then drives a straight line tangent to that circle which ends
//! exactly at the target waypoint. Only the start heading is constrained;
//! the arrival heading is whatever the tangent line gives.
//!
//! # Components
//!
//! - `geometry`: turn side, turning circle and angle helpers
//! - `turning`: turn side selection and turning circle location
//! - `tangent`: tangent line solving and tangent point selection
//! - `sampler`: lazy sampling of the arc and the line into points
//! - `planner`: configuration and the planner facade
//!
//! # Example
//!
//! ```
//! use simple_dubins_path::path_planning::simple_dubins::SimpleDubinsPlanner;
//! use simple_dubins_path::common::{Point2D, Pose2D};
//!
//! let planner = SimpleDubinsPlanner::with_defaults();
//! let goal = Point2D::new(0.0, 5.0);
//!
//! let path = planner.make_path(&Pose2D::origin(), &goal).unwrap();
//! assert_eq!(path.last(), Some(&goal));
//!
//! let heading = planner.target_heading(&Pose2D::origin(), &goal).unwrap();
//! assert!(heading.is_finite());
//! ```

pub mod geometry;
pub mod turning;
pub mod tangent;
pub mod sampler;
pub mod planner;

// Re-exports
pub use geometry::{direction_sign, Circle, TurnSide};
pub use turning::{turning_center, turning_direction};
pub use tangent::{tangent_line, tangent_point, TangentPair, TANGENT_DENOMINATOR_EPSILON};
pub use sampler::{generate_path, ArcSamples, LineSamples, PathSamples};
pub use planner::{DubinsSolution, RadiusAdvisory, SimpleDubinsConfig, SimpleDubinsPlanner};
