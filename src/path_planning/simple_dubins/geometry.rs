//! Geometry primitives for the single-turn Dubins planner
//!
//! Turn side, turning circle and the angle helpers shared by the
//! tangent solver and the path sampler.

use std::f64::consts::PI;

use crate::common::Point2D;

/// Full turn in radians
pub const TWO_PI: f64 = 2.0 * PI;

/// Side the vehicle banks towards on the arc segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnSide {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

/// Map a turn side to its angular direction: +1 for Left (CCW), -1 for Right (CW)
pub fn direction_sign(side: TurnSide) -> f64 {
    match side {
        TurnSide::Left => 1.0,
        TurnSide::Right => -1.0,
    }
}

/// Circle the vehicle follows while turning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { center, radius }
    }

    /// Point on the circle at the given polar angle around the center
    pub fn point_at(&self, angle: f64) -> Point2D {
        Point2D::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Polar angle of `point` around the center, wrapped into [0, 2pi)
    pub fn angle_of(&self, point: &Point2D) -> f64 {
        wrap_to_2pi(self.center.bearing_to(point))
    }

    /// True when `point` lies strictly inside the circle
    pub fn contains_strictly(&self, point: &Point2D) -> bool {
        point.distance(&self.center) < self.radius
    }
}

/// Wrap an `atan2` result from [-pi, pi] into [0, 2pi)
pub fn wrap_to_2pi(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + TWO_PI
    } else {
        angle
    }
}

/// Fold a line orientation from (-pi, pi) into [0, pi)
pub fn wrap_to_pi(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + PI
    } else {
        angle
    }
}
