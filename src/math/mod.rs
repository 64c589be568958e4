// src/math/mod.rs

pub mod integrator;
pub mod vector;
pub mod time_grid;
pub mod error;

pub use integrator::{explicit_euler, explicit_euler3};
pub use time_grid::step_count;
pub use error::MathError;
