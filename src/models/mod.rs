// src/models/mod.rs

pub mod particle;
pub mod trajectory;
pub mod accelerator;

pub use particle::{AngularParticle, SpiralParticle};
pub use trajectory::{Point2, Point3, Trajectory};
pub use accelerator::{RingAccelerator, SpiralAccelerator};
