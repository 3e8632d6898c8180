mod segment;

pub use segment::Segment;

use crate::math::{MidpointSimpson, Point3, Vector3};

/// A vortex filament discretized for Biot–Savart quadrature.
///
/// The filament is parameterized by `t` in `[0, 1]` and sampled at the
/// midpoints `t_i = (i + 0.5) / n` of `n` equal parameter cells. Tangents are
/// `dx/dt`, not normalized, so their magnitude carries the filament's length
/// scale into the integrand.
pub trait SampledCurve {
    /// Number of parameter cells `n` (and of samples).
    fn subdivision_count(&self) -> usize;

    /// Evaluates the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluates `dx/dt` at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Distance used by the near-field cutoff of the integrator.
    fn distance_to_point(&self, q: &Point3) -> f64;

    /// The quadrature rule over this curve's samples.
    fn quadrature(&self) -> MidpointSimpson {
        MidpointSimpson::new(self.subdivision_count())
    }

    /// Sample parameters `t_i`.
    fn parameter_values(&self) -> Vec<f64> {
        let rule = self.quadrature();
        (0..rule.len()).map(|i| rule.node(i)).collect()
    }

    /// Sample points `x(t_i)`.
    fn sample_points(&self) -> Vec<Point3> {
        let rule = self.quadrature();
        (0..rule.len()).map(|i| self.point_at(rule.node(i))).collect()
    }

    /// Sample tangents `x'(t_i)`.
    fn sample_tangents(&self) -> Vec<Vector3> {
        let rule = self.quadrature();
        (0..rule.len()).map(|i| self.tangent_at(rule.node(i))).collect()
    }
}
