use crate::error::{ParameterError, Result};
use crate::math::{Point3, Vector3};

/// Cell centres of a uniform 1D grid over `[start, end]` whose spacing is
/// the largest value not exceeding `target_ds` that divides the range evenly.
///
/// # Errors
///
/// Returns an error if `end <= start` or `target_ds` is not positive.
#[allow(clippy::cast_precision_loss)]
pub fn grid_1d(start: f64, end: f64, target_ds: f64) -> Result<Vec<f64>> {
    let length = ParameterError::require_positive("end - start", end - start)?;
    let target_ds = ParameterError::require_positive("target_ds", target_ds)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cells = (length / target_ds).ceil() as usize;
    let ds = length / cells as f64;
    Ok((0..cells).map(|k| start + (k as f64 + 0.5) * ds).collect())
}

/// Viscous length scale `l_nu = h / Re_tau`.
///
/// # Errors
///
/// Returns an error if either argument is not positive.
pub fn viscous_length(re_tau: f64, outer_scale: f64) -> Result<f64> {
    let re_tau = ParameterError::require_positive("re_tau", re_tau)?;
    let outer_scale = ParameterError::require_positive("outer_scale", outer_scale)?;
    Ok(outer_scale / re_tau)
}

/// A cell-centred box grid of query points.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3 {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Grid3 {
    /// Builds a grid over `[0, Lx] x [0, Ly] x [0, Lz]` with spacing
    /// `dx_plus` in viscous units.
    ///
    /// # Errors
    ///
    /// Returns an error if any length or scale is not positive.
    pub fn new(re_tau: f64, dx_plus: f64, extent: &Vector3, outer_scale: f64) -> Result<Self> {
        let dx_plus = ParameterError::require_positive("dx_plus", dx_plus)?;
        let dx = dx_plus * viscous_length(re_tau, outer_scale)?;
        Ok(Self {
            x: grid_1d(0.0, extent.x, dx)?,
            y: grid_1d(0.0, extent.y, dx)?,
            z: grid_1d(0.0, extent.z, dx)?,
        })
    }

    /// Builds a grid from explicit axis coordinates.
    #[must_use]
    pub fn from_axes(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self { x, y, z }
    }

    /// Number of points along each axis.
    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.z.len()]
    }

    /// Total number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }

    /// Returns whether the grid has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinates along x.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Coordinates along y.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Coordinates along z.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// All points, x varying slowest and z fastest.
    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        let mut out = Vec::with_capacity(self.len());
        for &x in &self.x {
            for &y in &self.y {
                out.extend(self.z.iter().map(|&z| Point3::new(x, y, z)));
            }
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_interval_fifths() {
        let x = grid_1d(0.0, 1.0, 0.2).unwrap();
        assert_eq!(x.len(), 5);
        for (got, want) in x.iter().zip([0.1, 0.3, 0.5, 0.7, 0.9]) {
            assert_relative_eq!(*got, want, epsilon = 1e-15);
        }
    }

    #[test]
    fn offset_interval_is_anchored_at_start() {
        let x = grid_1d(2.0, 3.0, 0.3).unwrap();
        assert_eq!(x.len(), 4);
        assert_relative_eq!(x[0], 2.125, epsilon = 1e-14);
        assert_relative_eq!(x[3], 2.875, epsilon = 1e-14);
    }

    #[test]
    fn reversed_interval_rejected() {
        assert!(grid_1d(1.0, 0.0, 0.1).is_err());
        assert!(grid_1d(0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn viscous_length_scale() {
        assert_relative_eq!(viscous_length(1000.0, 1.0).unwrap(), 1e-3);
        assert!(viscous_length(0.0, 1.0).is_err());
    }

    #[test]
    fn explicit_axes_make_a_plane_of_points() {
        let grid = Grid3::from_axes(vec![0.0, 1.0], vec![-1.0, 0.0, 1.0], vec![0.5]);
        assert_eq!(grid.shape(), [2, 3, 1]);
        assert_eq!(grid.z(), &[0.5]);
        let pts = grid.points();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point3::new(0.0, -1.0, 0.5));
        assert_eq!(pts[2], Point3::new(0.0, 1.0, 0.5));
        assert_eq!(pts[3], Point3::new(1.0, -1.0, 0.5));
        assert!(Grid3::from_axes(vec![], vec![0.0], vec![0.0]).is_empty());
    }

    #[test]
    fn box_grid_in_viscous_units() {
        // Re_tau = 100, dx+ = 10 -> dx = 0.1.
        let grid = Grid3::new(100.0, 10.0, &Vector3::new(1.0, 0.5, 0.2), 1.0).unwrap();
        assert_eq!(grid.shape(), [10, 5, 2]);
        assert_eq!(grid.len(), 100);
        let pts = grid.points();
        assert_eq!(pts.len(), 100);
        assert_relative_eq!(pts[0], Point3::new(0.05, 0.05, 0.05), epsilon = 1e-12);
        assert_relative_eq!(pts[1], Point3::new(0.05, 0.05, 0.15), epsilon = 1e-12);
        assert_relative_eq!(pts[99], Point3::new(0.95, 0.45, 0.15), epsilon = 1e-12);
    }
}
