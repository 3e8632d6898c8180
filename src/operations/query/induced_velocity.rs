use crate::error::{ParameterError, Result};
use crate::geometry::{Eddy, SampledCurve};
use crate::math::{Point3, Vector3, DEFAULT_CUTOFF};

/// Evaluates the velocity induced at a query point by vortex filaments.
///
/// For a filament `x(t)`, `t` in `[0, 1]`, with unit circulation running
/// along increasing `t`:
///
/// ```text
///            1  / 1  s(t) x x'(t)
///   u(q) = - -  |    ------------ dt,     s(t) = q - x(t)
///            2  / 0    |s(t)|^3
/// ```
///
/// An infinite straight filament at distance `d` therefore induces a speed
/// of `1 / d`.
///
/// Within `cutoff` of a filament the thin-filament model breaks down and
/// that filament's contribution is zero. The distance is measured to the
/// filament's supporting line (see [`SampledCurve::distance_to_point`]), so
/// query points near the straight extension of a segment are suppressed
/// too, even when they are far from the segment itself.
#[derive(Debug, Clone, Copy)]
pub struct InducedVelocity {
    query: Point3,
    cutoff: f64,
}

impl InducedVelocity {
    /// Creates a new `InducedVelocity` query at `query` with the default cutoff.
    #[must_use]
    pub fn new(query: Point3) -> Self {
        Self {
            query,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Sets the near-field cutoff radius.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Executes the query against a single filament.
    ///
    /// # Errors
    ///
    /// Returns an error if the cutoff is not positive and finite.
    pub fn execute<C: SampledCurve + ?Sized>(&self, curve: &C) -> Result<Vector3> {
        let cutoff = ParameterError::require_positive("cutoff", self.cutoff)?;
        Ok(curve_velocity(&self.query, curve, cutoff))
    }

    /// Executes the query against every segment of an eddy and sums the
    /// contributions in segment order.
    ///
    /// # Errors
    ///
    /// Returns an error if the cutoff is not positive and finite.
    pub fn execute_eddy(&self, eddy: &Eddy) -> Result<Vector3> {
        let cutoff = ParameterError::require_positive("cutoff", self.cutoff)?;
        Ok(eddy_velocity(&self.query, eddy, cutoff))
    }
}

/// Velocity induced at `query` by one filament. See [`InducedVelocity`].
///
/// # Errors
///
/// Returns an error if `cutoff` is not positive and finite.
pub fn induced_velocity<C: SampledCurve + ?Sized>(
    query: &Point3,
    curve: &C,
    cutoff: f64,
) -> Result<Vector3> {
    InducedVelocity::new(*query).with_cutoff(cutoff).execute(curve)
}

/// Velocity induced at `query` by all filaments of `eddy`.
///
/// # Errors
///
/// Returns an error if `cutoff` is not positive and finite.
pub fn induced_velocity_eddy(query: &Point3, eddy: &Eddy, cutoff: f64) -> Result<Vector3> {
    InducedVelocity::new(*query)
        .with_cutoff(cutoff)
        .execute_eddy(eddy)
}

/// Unchecked sum over an eddy; `cutoff` has already been validated.
pub(crate) fn eddy_velocity(query: &Point3, eddy: &Eddy, cutoff: f64) -> Vector3 {
    eddy.segments()
        .iter()
        .fold(Vector3::zeros(), |acc, seg| acc + curve_velocity(query, seg, cutoff))
}

fn curve_velocity<C: SampledCurve + ?Sized>(query: &Point3, curve: &C, cutoff: f64) -> Vector3 {
    if curve.distance_to_point(query) <= cutoff {
        tracing::trace!(?query, cutoff, "query inside filament cutoff");
        return Vector3::zeros();
    }

    let integral = curve.quadrature().integrate(Vector3::zeros(), |_, t| {
        let s = query - curve.point_at(t);
        let r = s.norm();
        s.cross(&curve.tangent_at(t)) / (r * r * r)
    });
    integral * -0.5
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AeddyError;
    use crate::geometry::Segment;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn seg(a: Point3, b: Point3, ds: f64) -> Segment {
        Segment::new(a, b, ds).unwrap()
    }

    /// Closed-form speed for a straight segment along +z from `z1` to `z2`,
    /// observed at perpendicular distance `d` from its line at `z = 0`.
    fn finite_segment_speed(d: f64, z1: f64, z2: f64) -> f64 {
        (z2 / (d * d + z2 * z2).sqrt() - z1 / (d * d + z1 * z1).sqrt()) / (2.0 * d)
    }

    #[test]
    fn long_filament_matches_infinite_line_vortex() {
        let line = seg(p(0.0, 0.0, -5.0e4), p(0.0, 0.0, 5.0e4), 0.01);
        let u = induced_velocity(&p(1.0, 0.0, 0.0), &line, 0.1).unwrap();
        assert_abs_diff_eq!(u, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn finite_segment_matches_closed_form() {
        let line = seg(p(0.0, 0.0, -1.0), p(0.0, 0.0, 2.0), 0.001);
        let u = InducedVelocity::new(p(0.5, 0.0, 0.0)).execute(&line).unwrap();
        let expected = finite_segment_speed(0.5, -1.0, 2.0);
        assert_abs_diff_eq!(u, Vector3::new(0.0, expected, 0.0), epsilon = 1e-8);
    }

    #[test]
    fn coarse_segment_is_still_close() {
        let line = seg(p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0), 0.1);
        let u = InducedVelocity::new(p(1.0, 0.0, 0.0)).execute(&line).unwrap();
        let expected = finite_segment_speed(1.0, -1.0, 1.0);
        assert_relative_eq!(u.y, expected, max_relative = 1e-3);
    }

    #[test]
    fn reversing_a_filament_negates_its_velocity() {
        let line = seg(p(0.0, -0.3, 0.2), p(0.4, 0.7, 1.1), 0.01);
        let q = p(1.0, 0.5, -0.5);
        let forward = induced_velocity(&q, &line, 0.1).unwrap();
        let backward = induced_velocity(&q, &line.reverse(), 0.1).unwrap();
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn inside_cutoff_is_exactly_zero() {
        let line = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), 0.01);
        for q in [p(0.5, 0.05, 0.0), p(0.5, 0.0, 0.09), p(0.5, 0.0, 0.0)] {
            assert_eq!(induced_velocity(&q, &line, 0.1).unwrap(), Vector3::zeros());
        }
    }

    #[test]
    fn cutoff_applies_along_the_line_extension() {
        let line = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), 0.01);
        let far_on_axis = p(25.0, 0.05, 0.0);
        assert_eq!(induced_velocity(&far_on_axis, &line, 0.1).unwrap(), Vector3::zeros());
        let far_off_axis = p(25.0, 0.5, 0.0);
        assert_ne!(induced_velocity(&far_off_axis, &line, 0.1).unwrap(), Vector3::zeros());
    }

    #[test]
    fn larger_cutoff_suppresses_more() {
        let line = seg(p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0), 0.01);
        let q = p(0.3, 0.0, 0.0);
        assert_ne!(induced_velocity(&q, &line, 0.1).unwrap(), Vector3::zeros());
        assert_eq!(induced_velocity(&q, &line, 0.35).unwrap(), Vector3::zeros());
    }

    #[test]
    fn invalid_cutoff_is_rejected() {
        let line = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), 0.01);
        for r0 in [0.0, -0.1, f64::NAN] {
            let err = induced_velocity(&p(0.0, 1.0, 0.0), &line, r0).unwrap_err();
            assert!(matches!(
                err,
                AeddyError::Parameter(ParameterError::Invalid { parameter: "cutoff", .. })
            ));
        }
    }

    #[test]
    fn square_loop_induces_axial_flow_at_centre() {
        // Counter-clockwise seen from +z, side 2, centred on (0, 0, 1).
        let corners = [
            p(-1.0, -1.0, 1.0),
            p(1.0, -1.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(-1.0, 1.0, 1.0),
            p(-1.0, -1.0, 1.0),
        ];
        let eddy: Eddy = corners.windows(2).map(|w| seg(w[0], w[1], 0.01)).collect();
        let u = induced_velocity_eddy(&p(0.0, 0.0, 1.0), &eddy, 0.1).unwrap();
        let expected = 4.0 * finite_segment_speed(1.0, -1.0, 1.0);
        assert_abs_diff_eq!(u, Vector3::new(0.0, 0.0, expected), epsilon = 1e-8);
    }

    #[test]
    fn eddy_velocity_is_sum_of_segments() {
        let a = seg(p(0.0, -0.5, 0.0), p(0.5, -0.5, 0.5), 0.01);
        let b = seg(p(0.5, -0.5, 0.5), p(0.5, 0.5, 0.5), 0.01);
        let q = p(1.0, 0.2, 0.3);
        let eddy = Eddy::new(vec![a.clone(), b.clone()]);
        let total = induced_velocity_eddy(&q, &eddy, 0.1).unwrap();
        let parts =
            induced_velocity(&q, &a, 0.1).unwrap() + induced_velocity(&q, &b, 0.1).unwrap();
        assert_eq!(total, parts);
    }

    #[test]
    fn empty_eddy_induces_nothing() {
        let u = induced_velocity_eddy(&p(0.0, 0.0, 1.0), &Eddy::default(), 0.1).unwrap();
        assert_eq!(u, Vector3::zeros());
    }
}
