//! Common types, traits, and error definitions for simple_dubins_path
//!
//! This module provides the foundational building blocks shared by
//! the planner, the parameter loader and the visualizer.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
