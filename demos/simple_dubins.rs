//! Simple Dubins Path Example
//!
//! Plans single-turn Dubins paths (one arc of fixed turning radius followed
//! by a tangent line) from a start pose to a few waypoints and plots them.
//!
//! Run with `RUST_LOG=debug` to see the chosen turn side and tangent point.
//! An optional TOML parameter file may be passed as the first argument.

use std::f64::consts::PI;

use log::info;

use simple_dubins_path::common::{Point2D, Pose2D};
use simple_dubins_path::path_planning::simple_dubins::{SimpleDubinsConfig, SimpleDubinsPlanner};
use simple_dubins_path::utils::plot_solution;

fn main() {
    env_logger::init();
    println!("Simple Dubins path planning start!!");

    let config = match std::env::args().nth(1) {
        Some(path) => match SimpleDubinsConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                println!("Could not load {}: {}", path, e);
                return;
            }
        },
        None => SimpleDubinsConfig::default(),
    };
    info!(
        "turning_radius = {}, path_resolution = {}",
        config.turning_radius, config.path_resolution
    );

    let planner = match SimpleDubinsPlanner::new(config) {
        Ok(planner) => planner,
        Err(e) => {
            println!("Invalid configuration: {}", e);
            return;
        }
    };

    let cases = [
        ("goal_left", Pose2D::new(0.0, 0.0, 0.0), Point2D::new(0.0, 5.0)),
        ("goal_ahead", Pose2D::new(0.0, 0.0, 0.0), Point2D::new(10.0, 0.0)),
        ("goal_behind", Pose2D::new(2.0, 1.0, PI / 4.0), Point2D::new(-4.0, -3.0)),
        ("goal_inside", Pose2D::new(0.0, 0.0, 0.0), Point2D::new(0.5, 0.5)),
    ];

    for (name, start, goal) in cases.iter() {
        println!("\n=== {} ===", name);
        let solution = match planner.solve(start, goal) {
            Ok(solution) => solution,
            Err(e) => {
                println!("Planning failed: {}", e);
                continue;
            }
        };

        let path = solution.to_path();
        println!("Turn: {:?}, consistent with circle: {}", solution.turn_side, solution.is_turn_consistent());
        println!("Tangent point: ({:.3}, {:.3})", solution.tangent_point.x, solution.tangent_point.y);
        println!("Target heading: {:.3} rad", solution.target_heading());
        println!("Path: {} points, length: {:.2}", path.len(), path.total_length());

        let vis = plot_solution(&solution, &format!("Simple Dubins path: {}", name));
        let output_path = format!("img/path_planning/simple_dubins_{}.png", name);
        match vis.save_png(&output_path, 800, 600) {
            Ok(()) => println!("Plot saved to: {}", output_path),
            Err(e) => println!("Could not save plot: {}", e),
        }
    }

    println!("\nSimple Dubins path planning finish!!");
}
