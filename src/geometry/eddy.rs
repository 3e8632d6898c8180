use crate::error::Result;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::curve::{SampledCurve, Segment};

/// An attached eddy: an ordered chain of straight vortex filaments.
///
/// Traversal order together with each segment's own direction fixes the
/// sense of circulation (right-hand rule). An eddy is never mutated; every
/// transformation returns a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Eddy {
    segments: Vec<Segment>,
}

impl Eddy {
    /// Creates an eddy from segments in traversal order.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns the segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the eddy has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total number of quadrature samples over all segments.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(SampledCurve::subdivision_count).sum()
    }

    /// Polyline vertices: the first start point followed by every end point.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        let mut out = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            out.push(*first.start());
        }
        out.extend(self.segments.iter().map(|s| *s.end()));
        out
    }

    /// Returns whether the last segment ends where the first one starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (last.end() - first.start()).norm() < TOLERANCE,
            _ => false,
        }
    }

    /// Returns a copy with the segment order and every segment reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.segments.iter().rev().map(Segment::reverse).collect())
    }

    /// Returns a copy shifted by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if a shifted segment is not finite.
    pub fn translated(&self, offset: &Vector3) -> Result<Self> {
        self.segments.iter().map(|s| s.translate(offset)).collect()
    }
}

impl FromIterator<Segment> for Eddy {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Eddy {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
