//! Induced velocity of attached eddies: straight vortex filaments, hairpin
//! eddies and packets built from them, their wall images, and the
//! Biot–Savart field of many eddies scattered over a wall.

pub mod error;
pub mod field;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{AeddyError, Result};
