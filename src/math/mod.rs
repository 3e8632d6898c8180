pub mod quadrature;

pub use quadrature::MidpointSimpson;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default requested spacing between quadrature samples along a filament.
pub const DEFAULT_SPACING: f64 = 0.01;

/// Default near-field cutoff radius of the Biot–Savart kernel.
pub const DEFAULT_CUTOFF: f64 = 0.1;
