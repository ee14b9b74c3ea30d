//! Sampling of the arc and line segments into evenly spaced points
//!
//! Each phase knows its sample count up front, so iteration never tests a
//! drifting floating-point accumulator. Sampling of a phase stops at the
//! first sample lying within two steps of the phase end; the remainder of
//! the phase is not emitted.

use nalgebra::Vector2;

use crate::common::{Point2D, Pose2D};

use super::geometry::{direction_sign, Circle, TurnSide, TWO_PI};

/// Line segments shorter than this are treated as empty
pub const DEGENERATE_SEGMENT_LENGTH: f64 = 1e-9;

/// Number of samples `0, step, 2 step, ...` emitted over `span`, ending at the
/// first sample within two steps of the end of the span.
fn sample_count(span: f64, step: f64) -> usize {
    (span / step - 2.0).ceil().max(0.0) as usize + 1
}

/// Points along the turning circle from the start position towards the tangent point
#[derive(Debug, Clone)]
pub struct ArcSamples {
    circle: Circle,
    start_angle: f64,
    stop_angle: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl ArcSamples {
    pub fn new(
        circle: Circle,
        start: &Point2D,
        tangent_point: &Point2D,
        side: TurnSide,
        resolution: f64,
    ) -> Self {
        let start_angle = circle.angle_of(start);
        let mut stop_angle = circle.angle_of(tangent_point);

        // Make the stop angle reachable by advancing in the turn direction
        match side {
            TurnSide::Left if stop_angle < start_angle => stop_angle += TWO_PI,
            TurnSide::Right if stop_angle > start_angle => stop_angle -= TWO_PI,
            _ => {}
        }

        let increment = resolution / circle.radius;
        let count = sample_count((stop_angle - start_angle).abs(), increment);

        Self {
            circle,
            start_angle,
            stop_angle,
            step: direction_sign(side) * increment,
            index: 0,
            count,
        }
    }

    /// Angle of the start position around the circle, in [0, 2pi)
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Angle of the tangent point, shifted by 2pi where needed so the arc is
    /// monotonic from [`ArcSamples::start_angle`]
    pub fn stop_angle(&self) -> f64 {
        self.stop_angle
    }

    /// Signed angular step between samples
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }
}

impl Iterator for ArcSamples {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.index >= self.count {
            return None;
        }
        let angle = self.start_angle + self.index as f64 * self.step;
        self.index += 1;
        Some(self.circle.point_at(angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcSamples {}

/// Points along the straight segment from the tangent point towards the goal
#[derive(Debug, Clone)]
pub struct LineSamples {
    origin: Point2D,
    direction: Vector2<f64>,
    resolution: f64,
    index: usize,
    count: usize,
}

impl LineSamples {
    pub fn new(from: &Point2D, to: &Point2D, resolution: f64) -> Self {
        let delta = to.to_vector() - from.to_vector();
        let length = delta.norm();

        // A tangent point on top of the goal leaves nothing to sample
        let (direction, count) = if length < DEGENERATE_SEGMENT_LENGTH {
            (Vector2::zeros(), 0)
        } else {
            (delta / length, sample_count(length, resolution))
        };

        Self {
            origin: *from,
            direction,
            resolution,
            index: 0,
            count,
        }
    }

    /// Unit direction of the segment, zero for a degenerate segment
    pub fn direction(&self) -> Vector2<f64> {
        self.direction
    }
}

impl Iterator for LineSamples {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.index >= self.count {
            return None;
        }
        let offset = self.direction * (self.index as f64 * self.resolution);
        self.index += 1;
        Some(Point2D::from(self.origin.to_vector() + offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineSamples {}

/// Full path: arc samples, then line samples, then the goal verbatim
#[derive(Debug, Clone)]
pub struct PathSamples {
    arc: ArcSamples,
    line: LineSamples,
    goal: Option<Point2D>,
}

impl PathSamples {
    pub fn new(arc: ArcSamples, line: LineSamples, goal: Point2D) -> Self {
        Self {
            arc,
            line,
            goal: Some(goal),
        }
    }
}

impl Iterator for PathSamples {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        self.arc
            .next()
            .or_else(|| self.line.next())
            .or_else(|| self.goal.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.arc.len() + self.line.len() + self.goal.is_some() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSamples {}

/// Sample the arc from `pose` to `tangent_point` and the line from there to `goal`.
pub fn generate_path(
    pose: &Pose2D,
    circle: &Circle,
    tangent_point: &Point2D,
    side: TurnSide,
    goal: &Point2D,
    resolution: f64,
) -> PathSamples {
    let arc = ArcSamples::new(*circle, &pose.position(), tangent_point, side, resolution);
    let line = LineSamples::new(tangent_point, goal, resolution);
    log::trace!(
        "Sampling {} arc points and {} line points",
        arc.len(),
        line.len()
    );
    PathSamples::new(arc, line, *goal)
}
