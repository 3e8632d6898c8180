use std::fmt;
use std::str::FromStr;

use crate::error::{AeddyError, ParameterError};
use crate::math::{Point3, Vector3};

/// A coordinate plane through the origin used as a mirror.
///
/// The wall sits in the `xy` plane with `+z` pointing away from it, so
/// [`SymmetryPlane::Xy`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymmetryPlane {
    /// Negates the z-coordinate.
    #[default]
    Xy,
    /// Negates the y-coordinate.
    Xz,
    /// Negates the x-coordinate.
    Yz,
}

impl SymmetryPlane {
    /// Index of the coordinate this plane negates.
    #[must_use]
    pub fn normal_axis(self) -> usize {
        match self {
            Self::Xy => 2,
            Self::Xz => 1,
            Self::Yz => 0,
        }
    }

    /// Unit normal of the plane.
    #[must_use]
    pub fn normal(self) -> Vector3 {
        let mut n = Vector3::zeros();
        n[self.normal_axis()] = 1.0;
        n
    }

    /// Reflects a point across the plane.
    #[must_use]
    pub fn reflect_point(self, p: &Point3) -> Point3 {
        let mut q = *p;
        q[self.normal_axis()] = -q[self.normal_axis()];
        q
    }

    /// Signed distance of `p` from the plane along [`normal`](Self::normal).
    #[must_use]
    pub fn signed_distance(self, p: &Point3) -> f64 {
        p[self.normal_axis()]
    }
}

impl FromStr for SymmetryPlane {
    type Err = AeddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "yz" => Ok(Self::Yz),
            _ => Err(ParameterError::UnknownPlane(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for SymmetryPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Yz => "yz",
        };
        f.write_str(name)
    }
}
