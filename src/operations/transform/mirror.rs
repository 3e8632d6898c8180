use crate::geometry::{Eddy, SymmetryPlane};

/// Builds the wall image of an eddy across a symmetry plane.
///
/// Every segment is reflected, then both the segment order and each
/// segment's direction are reversed: output segment `i` is
/// `source[N - 1 - i].mirror(plane).reverse()`. The image is a consistently
/// oriented polyline carrying the opposite circulation, so the normal
/// velocity of an eddy plus its image vanishes on the plane.
pub struct Mirror {
    plane: SymmetryPlane,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(plane: SymmetryPlane) -> Self {
        Self { plane }
    }

    /// Executes the mirror, returning a new eddy. The source is untouched.
    #[must_use]
    pub fn execute(&self, eddy: &Eddy) -> Eddy {
        let image: Eddy = eddy
            .segments()
            .iter()
            .rev()
            .map(|seg| seg.mirror(self.plane).reverse())
            .collect();
        tracing::trace!(plane = %self.plane, segments = image.len(), "mirrored eddy");
        image
    }
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new(SymmetryPlane::default())
    }
}

impl Eddy {
    /// Returns the wall image of this eddy. See [`Mirror`].
    #[must_use]
    pub fn mirror(&self, plane: SymmetryPlane) -> Eddy {
        Mirror::new(plane).execute(self)
    }
}
