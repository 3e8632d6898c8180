pub mod curve;
pub mod eddy;
pub mod plane;

pub use curve::{SampledCurve, Segment};
pub use eddy::Eddy;
pub use plane::SymmetryPlane;
