use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::SymmetryPlane;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::SampledCurve;

/// A straight, directed vortex filament from `start` to `end`.
///
/// The parametric form is `P(t) = (1 - t) * start + t * end` for `t` in
/// `[0, 1]`. The segment is split into `n = ceil(length / spacing)` equal
/// cells and sampled at their midpoints, so the endpoints are never samples.
///
/// Circulation runs from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
    spacing: f64,
    subdivisions: usize,
}

impl Segment {
    /// Creates a segment discretized with a target sample `spacing`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `start` and `end` coincide,
    /// or [`ParameterError::Invalid`] if `spacing` is not positive and finite.
    pub fn new(start: Point3, end: Point3, spacing: f64) -> Result<Self> {
        let spacing = ParameterError::require_positive("spacing", spacing)?;
        let length = (end - start).norm();
        if !length.is_finite() {
            return Err(ParameterError::Invalid {
                parameter: "length",
                value: length,
                reason: "endpoints must be finite",
            }
            .into());
        }
        if length < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "segment endpoints coincide at ({}, {}, {})",
                start.x, start.y, start.z
            ))
            .into());
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let subdivisions = ((length / spacing).ceil() as usize).max(1);

        Ok(Self {
            start,
            end,
            spacing,
            subdivisions,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the unnormalized direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns `|end - start|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns the spacing the segment was requested with.
    #[must_use]
    pub fn requested_spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the realized spacing `length / n`, never larger than requested.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn actual_spacing(&self) -> f64 {
        self.length() / self.subdivisions as f64
    }

    /// Returns the same filament traversed from `end` to `start`.
    ///
    /// Reversal flips the sign of the filament's circulation.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            spacing: self.spacing,
            subdivisions: self.subdivisions,
        }
    }

    /// Returns the segment with both endpoints reflected across `plane`.
    ///
    /// Traversal order is kept: the image of `start` is the new `start`.
    #[must_use]
    pub fn mirror(&self, plane: SymmetryPlane) -> Self {
        Self {
            start: plane.reflect_point(&self.start),
            end: plane.reflect_point(&self.end),
            spacing: self.spacing,
            subdivisions: self.subdivisions,
        }
    }

    /// Returns the segment shifted by `offset`, discretized afresh with the
    /// requested spacing.
    ///
    /// The cell count follows the shifted length, which may round differently.
    ///
    /// # Errors
    ///
    /// Returns an error if the shifted endpoints are not finite or collapse
    /// onto each other.
    pub fn translate(&self, offset: &Vector3) -> Result<Self> {
        Self::new(self.start + offset, self.end + offset, self.spacing)
    }

    /// Finds the point on the line through `a` closest to the line through `b`.
    ///
    /// For intersecting lines this is the intersection point. The parameter
    /// along `a` solves the 2x2 normal equations of
    /// `min |a.start + s * da - b.start - u * db|`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parallel`] if the lines are parallel.
    pub fn intersect(a: &Self, b: &Self) -> Result<Point3> {
        let da = a.direction();
        let db = b.direction();
        let w = b.start - a.start;

        let aa = da.dot(&da);
        let ab = da.dot(&db);
        let bb = db.dot(&db);
        let det = aa * bb - ab * ab;
        if det.abs() <= TOLERANCE * aa * bb {
            return Err(GeometryError::Parallel.into());
        }

        let s = (bb * da.dot(&w) - ab * db.dot(&w)) / det;
        Ok(a.start + da * s)
    }
}

impl SampledCurve for Segment {
    fn subdivision_count(&self) -> usize {
        self.subdivisions
    }

    fn point_at(&self, t: f64) -> Point3 {
        Point3::from(self.start.coords * (1.0 - t) + self.end.coords * t)
    }

    fn tangent_at(&self, _t: f64) -> Vector3 {
        self.direction()
    }

    /// Distance from `q` to the infinite line through the segment,
    /// `|(q - start) x (q - end)| / |end - start|`.
    ///
    /// Points beyond either endpoint but close to the extension of the line
    /// also report a small distance.
    fn distance_to_point(&self, q: &Point3) -> f64 {
        (q - self.start).cross(&(q - self.end)).norm() / self.length()
    }
}
