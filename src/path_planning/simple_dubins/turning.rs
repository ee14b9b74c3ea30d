//! Turn side selection and turning circle location

use crate::common::{Point2D, Pose2D};

use super::geometry::{Circle, TurnSide};

/// Decide which way the vehicle banks to reach `target`.
///
/// The frame is rotated by the start heading; a target on the positive
/// side of the rotated x-axis gives [`TurnSide::Left`], anything else
/// (including a target dead ahead or behind) gives [`TurnSide::Right`].
pub fn turning_direction(pose: &Pose2D, target: &Point2D) -> TurnSide {
    let lateral = -(target.x - pose.x) * pose.yaw.sin() + (target.y - pose.y) * pose.yaw.cos();
    if lateral > 0.0 {
        TurnSide::Left
    } else {
        TurnSide::Right
    }
}

/// The two circles of `radius` tangent to the heading line at the start pose,
/// returned as (right-hand circle, left-hand circle).
pub fn candidate_centers(pose: &Pose2D, radius: f64) -> (Point2D, Point2D) {
    let (sin, cos) = pose.yaw.sin_cos();
    let right = Point2D::new(pose.x + sin * radius, pose.y - cos * radius);
    let left = Point2D::new(pose.x - sin * radius, pose.y + cos * radius);
    (right, left)
}

/// Locate the turning circle: whichever candidate center is closer to `target`.
///
/// Ties go to the left-hand circle. The choice does not consult
/// [`turning_direction`], so the returned circle can lie on the opposite
/// side of the turn.
pub fn turning_center(pose: &Pose2D, target: &Point2D, radius: f64) -> Circle {
    let (right, left) = candidate_centers(pose, radius);
    let center = if target.distance_squared(&right) < target.distance_squared(&left) {
        right
    } else {
        left
    };
    Circle::new(center, radius)
}

/// Side of the heading line on which `circle` lies
pub fn circle_side(pose: &Pose2D, circle: &Circle) -> TurnSide {
    turning_direction(pose, &circle.center)
}
