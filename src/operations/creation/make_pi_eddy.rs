use crate::error::{ParameterError, Result};
use crate::geometry::{Eddy, Segment};
use crate::math::{Point3, DEFAULT_SPACING};

/// Creates a single Π-shaped eddy: two inclined legs joined by a spanwise head.
///
/// With `α` the inclination from the wall, the vertices are
///
/// ```text
/// P0 = (0,       -a/2, 0)
/// P1 = (b cos α, -a/2, b sin α)
/// P2 = (b cos α,  a/2, b sin α)
/// P3 = (0,        a/2, 0)
/// ```
///
/// offset by `origin`, joined as `P0 → P1 → P2 → P3`.
pub struct MakePiEddy {
    width: f64,
    leg_length: f64,
    alpha_deg: f64,
    origin: Point3,
    spacing: f64,
}

impl MakePiEddy {
    /// Creates a new `MakePiEddy` operation with spanwise width `a`,
    /// leg length `b` and inclination `alpha_deg`.
    #[must_use]
    pub fn new(a: f64, b: f64, alpha_deg: f64, origin: Point3) -> Self {
        Self {
            width: a,
            leg_length: b,
            alpha_deg,
            origin,
            spacing: DEFAULT_SPACING,
        }
    }

    /// Sets the requested quadrature spacing of the filaments.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Executes the operation, returning the three-segment eddy.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` or `b` is not positive, the angle is not
    /// finite, or the spacing is invalid.
    pub fn execute(&self) -> Result<Eddy> {
        let a = ParameterError::require_positive("a", self.width)?;
        let b = ParameterError::require_positive("b", self.leg_length)?;
        let alpha = ParameterError::require_finite("alpha_deg", self.alpha_deg)?.to_radians();

        let (x, z) = (b * alpha.cos(), b * alpha.sin());
        let o = self.origin.coords;
        let vertices = [
            Point3::new(0.0, -0.5 * a, 0.0) + o,
            Point3::new(x, -0.5 * a, z) + o,
            Point3::new(x, 0.5 * a, z) + o,
            Point3::new(0.0, 0.5 * a, 0.0) + o,
        ];

        let eddy = vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1], self.spacing))
            .collect::<Result<Eddy>>()?;
        tracing::debug!(
            a,
            b,
            alpha_deg = self.alpha_deg,
            samples = eddy.sample_count(),
            "built pi eddy"
        );
        Ok(eddy)
    }
}
