//! Superposition of many placed eddies into a synthetic near-wall field.

pub mod grid;
mod velocity_field;
mod wall_patch;

pub use grid::{grid_1d, viscous_length, Grid3};
pub use velocity_field::{FieldParams, VelocityField};
pub use wall_patch::{WallPatch, MAX_MEAN_PLACEMENTS};
