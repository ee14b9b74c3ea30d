//! Utility modules for simple_dubins_path

pub mod params;
pub mod visualization;

pub use visualization::{colors, plot_solution, PathStyle, PointStyle, Visualizer};
