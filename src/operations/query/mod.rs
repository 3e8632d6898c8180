mod induced_velocity;

pub(crate) use induced_velocity::eddy_velocity;
pub use induced_velocity::{induced_velocity, induced_velocity_eddy, InducedVelocity};
