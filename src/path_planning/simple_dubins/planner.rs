//! Simple Dubins path planner
//!
//! Plans a path made of one circular arc of fixed turning radius followed by
//! a straight line tangent to that arc, ending exactly at the target point.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::path::Path;

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::common::{DubinsError, DubinsResult, Path2D, PathPlanner, Point2D, Pose2D};
use crate::utils::params;

use super::geometry::{direction_sign, Circle, TurnSide};
use super::sampler::{generate_path, ArcSamples, LineSamples, PathSamples, DEGENERATE_SEGMENT_LENGTH};
use super::tangent::{tangent_line, tangent_point, TangentPair};
use super::turning::{circle_side, turning_center, turning_direction};

/// Configuration for the simple Dubins planner
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SimpleDubinsConfig {
    /// Minimum turning radius of the vehicle [m]
    #[serde(default = "default_turning_radius")]
    pub turning_radius: f64,
    /// Maximum spacing between consecutive path points [m]
    #[serde(default = "default_path_resolution")]
    pub path_resolution: f64,
}

fn default_turning_radius() -> f64 {
    1.5
}
fn default_path_resolution() -> f64 {
    0.05
}

impl Default for SimpleDubinsConfig {
    fn default() -> Self {
        Self {
            turning_radius: default_turning_radius(),
            path_resolution: default_path_resolution(),
        }
    }
}

impl SimpleDubinsConfig {
    /// Check both values are finite and strictly positive
    pub fn validate(&self) -> DubinsResult<()> {
        if !(self.turning_radius.is_finite() && self.turning_radius > 0.0) {
            return Err(DubinsError::InvalidParameter(format!(
                "turning_radius must be positive and finite, got {}",
                self.turning_radius
            )));
        }
        if !(self.path_resolution.is_finite() && self.path_resolution > 0.0) {
            return Err(DubinsError::InvalidParameter(format!(
                "path_resolution must be positive and finite, got {}",
                self.path_resolution
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> DubinsResult<Self> {
        let config: SimpleDubinsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML parameter file
    pub fn load<P: AsRef<Path>>(path: P) -> DubinsResult<Self> {
        let config: SimpleDubinsConfig = params::load(path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Non-fatal warning: the turning radius exceeds half the start-goal distance,
/// so the resulting path may loop far out before heading to the goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusAdvisory {
    pub turning_radius: f64,
    pub half_distance: f64,
}

impl fmt::Display for RadiusAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The desired turning radius ({:.3}) is larger than half the length between the waypoints ({:.3})",
            self.turning_radius, self.half_distance
        )
    }
}

/// Every quantity computed while solving one start/goal pair
#[derive(Debug, Clone)]
pub struct DubinsSolution {
    pub start: Pose2D,
    pub goal: Point2D,
    pub turn_side: TurnSide,
    pub circle: Circle,
    pub tangents: TangentPair,
    pub tangent_point: Point2D,
    resolution: f64,
}

impl DubinsSolution {
    /// Heading to steer along on the straight segment
    ///
    /// When the tangent point sits on the goal the segment has no direction;
    /// the direction of travel along the circle at the contact is used instead.
    pub fn target_heading(&self) -> f64 {
        if self.tangent_point.distance(&self.goal) < DEGENERATE_SEGMENT_LENGTH {
            let radial = self.circle.center.bearing_to(&self.tangent_point);
            return radial + direction_sign(self.turn_side) * FRAC_PI_2;
        }
        self.tangent_point.bearing_to(&self.goal)
    }

    /// False when the chosen circle lies on the opposite side to the turn
    pub fn is_turn_consistent(&self) -> bool {
        circle_side(&self.start, &self.circle) == self.turn_side
    }

    pub fn arc_samples(&self) -> ArcSamples {
        ArcSamples::new(
            self.circle,
            &self.start.position(),
            &self.tangent_point,
            self.turn_side,
            self.resolution,
        )
    }

    pub fn line_samples(&self) -> LineSamples {
        LineSamples::new(&self.tangent_point, &self.goal, self.resolution)
    }

    /// Lazy point sequence: arc, line, then the goal itself
    pub fn samples(&self) -> PathSamples {
        generate_path(
            &self.start,
            &self.circle,
            &self.tangent_point,
            self.turn_side,
            &self.goal,
            self.resolution,
        )
    }

    pub fn to_path(&self) -> Path2D {
        self.samples().collect()
    }
}

/// Single-turn Dubins planner
///
/// Holds only its configuration, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct SimpleDubinsPlanner {
    config: SimpleDubinsConfig,
}

impl SimpleDubinsPlanner {
    /// Create a planner, rejecting invalid configuration
    pub fn new(config: SimpleDubinsConfig) -> DubinsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: SimpleDubinsConfig::default(),
        }
    }

    pub fn config(&self) -> &SimpleDubinsConfig {
        &self.config
    }

    pub fn turning_direction(&self, pose: &Pose2D, target: &Point2D) -> TurnSide {
        turning_direction(pose, target)
    }

    pub fn turning_center(&self, pose: &Pose2D, target: &Point2D) -> Circle {
        turning_center(pose, target, self.config.turning_radius)
    }

    /// Advisory raised when the turning radius exceeds half the start-goal distance
    pub fn radius_advisory(&self, start: &Pose2D, goal: &Point2D) -> Option<RadiusAdvisory> {
        let half_distance = start.position().distance(goal) / 2.0;
        if self.config.turning_radius > half_distance {
            Some(RadiusAdvisory {
                turning_radius: self.config.turning_radius,
                half_distance,
            })
        } else {
            None
        }
    }

    /// Run turn side selection, circle location, reachability and tangent solving.
    pub fn solve(&self, start: &Pose2D, goal: &Point2D) -> DubinsResult<DubinsSolution> {
        check_inputs(start, goal)?;

        let turn_side = self.turning_direction(start, goal);
        let circle = self.turning_center(start, goal);

        if circle.contains_strictly(goal) {
            error!("Target not reachable with simple Dubins path.");
            return Err(DubinsError::Unreachable {
                goal: *goal,
                center: circle.center,
                turning_radius: circle.radius,
            });
        }

        let tangents = tangent_line(goal, &circle);
        let tangent_point = tangent_point(start, goal, &circle, &tangents, turn_side);

        let solution = DubinsSolution {
            start: *start,
            goal: *goal,
            turn_side,
            circle,
            tangents,
            tangent_point,
            resolution: self.config.path_resolution,
        };

        debug!(
            "Turning {:?} around ({:.3}, {:.3}), leaving the circle at ({:.3}, {:.3})",
            turn_side, circle.center.x, circle.center.y, tangent_point.x, tangent_point.y
        );
        if !solution.is_turn_consistent() {
            debug!("Turning circle lies on the opposite side to the {:?} turn", turn_side);
        }

        Ok(solution)
    }

    /// Plan the full sampled path from `start` to `goal`.
    ///
    /// The last point of a returned path is `goal` exactly.
    pub fn make_path(&self, start: &Pose2D, goal: &Point2D) -> DubinsResult<Path2D> {
        if let Some(advisory) = self.radius_advisory(start, goal) {
            warn!("{}", advisory);
        }
        Ok(self.solve(start, goal)?.to_path())
    }

    /// Heading from the tangent point to `goal`, without sampling the path
    pub fn target_heading(&self, start: &Pose2D, goal: &Point2D) -> DubinsResult<f64> {
        Ok(self.solve(start, goal)?.target_heading())
    }
}

impl PathPlanner for SimpleDubinsPlanner {
    fn plan(&self, start: Pose2D, goal: Point2D) -> Result<Path2D, DubinsError> {
        self.make_path(&start, &goal)
    }
}

fn check_inputs(start: &Pose2D, goal: &Point2D) -> DubinsResult<()> {
    if !start.is_finite() {
        return Err(DubinsError::InvalidParameter(format!(
            "start pose must be finite, got {:?}",
            start
        )));
    }
    if !goal.is_finite() {
        return Err(DubinsError::InvalidParameter(format!(
            "goal must be finite, got {:?}",
            goal
        )));
    }
    Ok(())
}
