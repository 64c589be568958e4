// src/render/mod.rs

pub mod figures;

pub use figures::render_trajectory_svg;
