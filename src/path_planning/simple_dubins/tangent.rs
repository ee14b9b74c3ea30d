//! Tangent lines from the target to the turning circle
//!
//! The orientation `beta` of a line through the target that touches the
//! circle satisfies
//!
//! ```text
//! ((cx - tx) sin(beta) + (ty - cy) cos(beta))^2 = r^2
//! ```
//!
//! which is solved through the tangent half-angle substitution
//! `t = tan(beta / 2)`. The contact point of each line is then found with the
//! circle-line intersection formula in a frame centred on the circle, and the
//! contact reached first along the turn direction is kept.

use nalgebra::Vector2;

use crate::common::{Point2D, Pose2D};

use super::geometry::{wrap_to_2pi, wrap_to_pi, Circle, TurnSide};

/// Denominators of the half-angle solution smaller than this are treated as
/// zero and the alternative root form is used instead.
pub const TANGENT_DENOMINATOR_EPSILON: f64 = f64::EPSILON;

/// Orientations of the two tangent lines, each in [0, pi)
///
/// These are line directions, not positions; both lines pass through the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPair {
    pub beta1: f64,
    pub beta2: f64,
}

/// Solve for the orientations of the lines through `target` tangent to `circle`.
///
/// The caller guarantees `target` is not strictly inside the circle; a
/// negative discriminant from rounding is clamped to zero.
pub fn tangent_line(target: &Point2D, circle: &Circle) -> TangentPair {
    let r = circle.radius;
    let a = circle.center.x - target.x;
    let b = target.y - circle.center.y;
    let root = (a * a + b * b - r * r).max(0.0).sqrt();

    let (beta1, beta2) = if (b + r).abs() < TANGENT_DENOMINATOR_EPSILON {
        // Line nearly vertical in the translated frame: b + r vanishes
        (
            2.0 * ((a - root) / (b - r)).atan(),
            2.0 * ((a + root) / (b - r)).atan(),
        )
    } else {
        // a and root nearly cancel in one of (a +- root); take the other one
        // directly and recover the cancelling root from the product of roots,
        // t1 * t2 = (r - b) / (b + r)
        let stable = if a >= 0.0 { a + root } else { a - root };
        let t_stable = stable / (b + r);
        let t_other = if stable == 0.0 { t_stable } else { (r - b) / stable };
        if a >= 0.0 {
            (2.0 * t_stable.atan(), 2.0 * t_other.atan())
        } else {
            (2.0 * t_other.atan(), 2.0 * t_stable.atan())
        }
    };

    TangentPair {
        beta1: wrap_to_pi(beta1),
        beta2: wrap_to_pi(beta2),
    }
}

/// Point where the line through `target` with orientation `beta` touches `circle`.
///
/// Uses the circle-line intersection with the circle moved to the origin;
/// for a tangent line the discriminant is zero and the single root is the
/// foot of the perpendicular from the center.
pub fn line_contact(target: &Point2D, circle: &Circle, beta: f64) -> Point2D {
    let x2 = target.x - circle.center.x;
    let y2 = target.y - circle.center.y;
    let x1 = x2 + beta.cos();
    let y1 = y2 + beta.sin();

    let dx = x2 - x1;
    let dy = y2 - y1;
    // Unit direction, so dr^2 is one up to rounding
    let dr_sq = dx * dx + dy * dy;
    let d = x1 * y2 - x2 * y1;

    Point2D::new(
        d * dy / dr_sq + circle.center.x,
        -d * dx / dr_sq + circle.center.y,
    )
}

/// Both contact points, in the order of the orientations in `tangents`
pub fn tangent_candidates(target: &Point2D, circle: &Circle, tangents: &TangentPair) -> [Point2D; 2] {
    [
        line_contact(target, circle, tangents.beta1),
        line_contact(target, circle, tangents.beta2),
    ]
}

/// Counter-clockwise angle around `circle` from `from` to `to`, in [0, 2pi)
pub fn sweep_angle(circle: &Circle, from: &Point2D, to: &Point2D) -> f64 {
    let center = circle.center.to_vector();
    let v_from: Vector2<f64> = from.to_vector() - center;
    let v_to: Vector2<f64> = to.to_vector() - center;
    wrap_to_2pi(v_from.perp(&v_to).atan2(v_from.dot(&v_to)))
}

/// Pick the tangent point met first when driving around `circle` from the
/// start pose in the direction `side`.
///
/// Left (counter-clockwise) keeps the smaller sweep angle, Right (clockwise)
/// the larger one. Equal sweeps keep the second candidate.
pub fn tangent_point(
    pose: &Pose2D,
    target: &Point2D,
    circle: &Circle,
    tangents: &TangentPair,
    side: TurnSide,
) -> Point2D {
    let start = pose.position();
    let [first, second] = tangent_candidates(target, circle, tangents);
    let first_sweep = sweep_angle(circle, &start, &first);
    let second_sweep = sweep_angle(circle, &start, &second);

    let take_first = match side {
        TurnSide::Left => first_sweep < second_sweep,
        TurnSide::Right => first_sweep > second_sweep,
    };

    if take_first {
        first
    } else {
        second
    }
}
