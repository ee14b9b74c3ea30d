use std::f64::consts::PI;
use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simple_dubins_path::common::{DubinsError, PathPlanner, Point2D, Pose2D};
use simple_dubins_path::path_planning::simple_dubins::{
    DubinsSolution, SimpleDubinsConfig, SimpleDubinsPlanner, TurnSide,
};

const TOL: f64 = 1e-9;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn default_planner() -> SimpleDubinsPlanner {
    SimpleDubinsPlanner::new(SimpleDubinsConfig {
        turning_radius: 1.5,
        path_resolution: 0.05,
    })
    .unwrap()
}

fn check_solution(solution: &DubinsSolution, resolution: f64) {
    let circle = solution.circle;
    let radius = circle.radius;

    // Tangent point on the circle, radius perpendicular to the approach line
    let radial = solution.tangent_point.to_vector() - circle.center.to_vector();
    let along = solution.goal.to_vector() - solution.tangent_point.to_vector();
    assert!((radial.norm() - radius).abs() < 1e-7,
        "tangent point {:?} off the circle", solution.tangent_point);
    assert!(radial.dot(&along).abs() < 1e-6 * (1.0 + along.norm()),
        "approach line not tangent for {:?}", solution);

    // Arc samples on the circle, ending within two steps of the tangent point
    let arc: Vec<Point2D> = solution.arc_samples().collect();
    assert!(!arc.is_empty());
    for p in &arc {
        assert!((p.distance(&circle.center) - radius).abs() < TOL);
    }
    assert!(arc[0].distance(&solution.start.position()) < 1e-7);
    assert!(arc.last().unwrap().distance(&solution.tangent_point) <= 2.0 * resolution + 1e-7);

    // Line samples evenly spaced, final gap to the goal at most two steps
    let line: Vec<Point2D> = solution.line_samples().collect();
    for w in line.windows(2) {
        assert!((w[0].distance(&w[1]) - resolution).abs() < 1e-7);
    }
    if let Some(last) = line.last() {
        assert!(last.distance(&solution.goal) <= 2.0 * resolution + 1e-7);
    }

    // Goal appended verbatim
    let path = solution.to_path();
    assert_eq!(path.len(), arc.len() + line.len() + 1);
    assert_eq!(*path.last().unwrap(), solution.goal);
}

#[test]
fn scenario_a_goal_to_the_left() {
    init_logger();
    let planner = default_planner();
    let start = Pose2D::new(0.0, 0.0, 0.0);
    let goal = Point2D::new(0.0, 5.0);

    assert_eq!(planner.turning_direction(&start, &goal), TurnSide::Left);

    let path = planner.make_path(&start, &goal).unwrap();
    let last = path.last().unwrap();
    assert_eq!(last.x.to_bits(), goal.x.to_bits());
    assert_eq!(last.y.to_bits(), goal.y.to_bits());

    let solution = planner.solve(&start, &goal).unwrap();
    assert!(solution.is_turn_consistent());
    check_solution(&solution, 0.05);
}

#[test]
fn scenario_b_goal_inside_turning_circle() {
    init_logger();
    let planner = default_planner();
    let start = Pose2D::origin();
    let goal = Point2D::new(0.5, 0.5);

    // The advisory is raised even though planning fails
    assert!(planner.radius_advisory(&start, &goal).is_some());
    match planner.make_path(&start, &goal) {
        Err(DubinsError::Unreachable { goal: g, turning_radius, .. }) => {
            assert_eq!(g, goal);
            assert_eq!(turning_radius, 1.5);
        }
        other => panic!("expected Unreachable, got {:?}", other),
    }
    assert!(planner.target_heading(&start, &goal).unwrap_err().is_unreachable());
}

#[test]
fn scenario_c_straight_ahead_without_advisory() {
    init_logger();
    let planner = default_planner();
    let start = Pose2D::origin();
    let goal = Point2D::new(10.0, 0.0);

    assert!(planner.radius_advisory(&start, &goal).is_none());
    let path = planner.make_path(&start, &goal).unwrap();
    assert_eq!(*path.last().unwrap(), Point2D::new(10.0, 0.0));
}

#[test]
fn turn_side_and_circle_can_disagree() {
    // Dead ahead gives a Right turn while the tie on circles keeps the left one
    let planner = default_planner();
    let solution = planner.solve(&Pose2D::origin(), &Point2D::new(10.0, 0.0)).unwrap();
    assert_eq!(solution.turn_side, TurnSide::Right);
    assert!(solution.circle.center.y > 0.0);
    assert!(!solution.is_turn_consistent());
    check_solution(&solution, 0.05);
}

#[test]
fn advisory_does_not_block_planning() {
    let planner = default_planner();
    let start = Pose2D::origin();
    let goal = Point2D::new(-2.5, 1.0);

    assert!(planner.radius_advisory(&start, &goal).is_some());
    let path = planner.make_path(&start, &goal).unwrap();
    assert_eq!(*path.last().unwrap(), goal);
}

#[test]
fn tangent_point_on_circle_for_goal_level_with_circle_bottom() {
    init_logger();
    let planner = default_planner();
    let start = Pose2D::new(0.0, 0.0, PI / 2.0);

    for offset in [1e-13, 1e-10].iter() {
        let goal = Point2D::new(5.0, -1.5 + offset);
        let solution = planner.solve(&start, &goal).unwrap();
        assert_eq!(solution.turn_side, TurnSide::Right);
        assert!((solution.circle.center.x - 1.5).abs() < TOL);
        check_solution(&solution, 0.05);
    }
}

#[test]
fn target_heading_points_from_tangent_point_to_goal() {
    let planner = default_planner();
    let start = Pose2D::new(2.0, -1.0, PI / 3.0);
    let goal = Point2D::new(-4.0, 6.0);

    let solution = planner.solve(&start, &goal).unwrap();
    let heading = planner.target_heading(&start, &goal).unwrap();
    let expected = (goal.y - solution.tangent_point.y).atan2(goal.x - solution.tangent_point.x);
    assert!((heading - expected).abs() < TOL);
}

#[test]
fn random_start_goal_pairs() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let configs = [
        SimpleDubinsConfig { turning_radius: 1.5, path_resolution: 0.05 },
        SimpleDubinsConfig { turning_radius: 0.7, path_resolution: 0.1 },
        SimpleDubinsConfig { turning_radius: 4.0, path_resolution: 0.25 },
    ];

    for config in configs.iter() {
        let planner = SimpleDubinsPlanner::new(*config).unwrap();
        let mut reachable = 0;

        for _ in 0..300 {
            let start = Pose2D::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-PI..PI),
            );
            let goal = Point2D::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let circle = planner.turning_center(&start, &goal);

            if goal.distance(&circle.center) < config.turning_radius {
                assert!(planner.make_path(&start, &goal).unwrap_err().is_unreachable());
                assert!(planner.target_heading(&start, &goal).unwrap_err().is_unreachable());
                continue;
            }

            reachable += 1;
            let solution = planner.solve(&start, &goal).unwrap();
            check_solution(&solution, config.path_resolution);

            let path = planner.make_path(&start, &goal).unwrap();
            assert_eq!(*path.last().unwrap(), goal);
            assert!(planner.target_heading(&start, &goal).unwrap().is_finite());
        }
        assert!(reachable > 0);
    }
}

#[test]
fn samples_are_restartable() {
    let planner = default_planner();
    let solution = planner.solve(&Pose2D::new(1.0, 1.0, -PI / 4.0), &Point2D::new(6.0, 3.0)).unwrap();
    let samples = solution.samples();
    let expected = samples.len();
    let first: Vec<Point2D> = samples.clone().collect();
    let second: Vec<Point2D> = samples.collect();
    assert_eq!(first.len(), expected);
    assert_eq!(first, second);
}

#[test]
fn shared_planner_across_threads() {
    let planner = Arc::new(default_planner());
    let goals = vec![
        Point2D::new(0.0, 5.0),
        Point2D::new(10.0, 0.0),
        Point2D::new(-3.0, -7.0),
        Point2D::new(4.0, -2.0),
    ];

    let expected: Vec<_> = goals
        .iter()
        .map(|g| planner.make_path(&Pose2D::origin(), g).unwrap())
        .collect();

    let handles: Vec<_> = goals
        .into_iter()
        .map(|goal| {
            let planner = Arc::clone(&planner);
            thread::spawn(move || planner.make_path(&Pose2D::origin(), &goal).unwrap())
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn path_planner_trait_object() {
    let planner: Box<dyn PathPlanner> = Box::new(default_planner());
    let goal = Point2D::new(3.0, 4.0);
    let path = planner.plan(Pose2D::origin(), goal).unwrap();
    assert_eq!(*path.last().unwrap(), goal);
}

#[test]
fn config_loaded_from_file() {
    let path = std::env::temp_dir().join("simple_dubins_config_test.toml");
    std::fs::write(&path, "turning_radius = 2.5\npath_resolution = 0.1\n").unwrap();
    let config = SimpleDubinsConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.turning_radius, 2.5);
    assert_eq!(config.path_resolution, 0.1);
    let planner = SimpleDubinsPlanner::new(config).unwrap();
    assert_eq!(planner.config().turning_radius, 2.5);
}
