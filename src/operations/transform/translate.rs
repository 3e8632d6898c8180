use crate::error::Result;
use crate::geometry::Eddy;
use crate::math::{Point3, Vector3};

/// Translates an eddy by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Creates a translation that moves the origin to `position`.
    #[must_use]
    pub fn to(position: &Point3) -> Self {
        Self::new(position.coords)
    }

    /// Executes the translation, returning a new eddy.
    ///
    /// # Errors
    ///
    /// Returns an error if a displaced segment is not finite.
    pub fn execute(&self, eddy: &Eddy) -> Result<Eddy> {
        eddy.translated(&self.displacement)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakePiEddy;
    use crate::operations::query::induced_velocity_eddy;
    use approx::assert_relative_eq;

    #[test]
    fn placed_eddy_moves_with_its_origin() {
        let eddy = MakePiEddy::new(1.0, 1.0, 45.0, Point3::origin())
            .with_spacing(0.05)
            .execute()
            .unwrap();
        let placed = Translate::to(&Point3::new(3.0, -2.0, 0.0))
            .execute(&eddy)
            .unwrap();
        let direct = MakePiEddy::new(1.0, 1.0, 45.0, Point3::new(3.0, -2.0, 0.0))
            .with_spacing(0.05)
            .execute()
            .unwrap();
        for (a, b) in placed.vertices().iter().zip(direct.vertices()) {
            assert_relative_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn velocity_is_translation_invariant() {
        let eddy = MakePiEddy::new(1.0, 1.0, 45.0, Point3::origin())
            .with_spacing(0.03)
            .execute()
            .unwrap();
        let shift = Vector3::new(0.7, 1.3, 0.0);
        let moved = Translate::new(shift).execute(&eddy).unwrap();
        let q = Point3::new(0.4, 0.1, 0.5);
        let here = induced_velocity_eddy(&q, &eddy, 0.1).unwrap();
        let there = induced_velocity_eddy(&(q + shift), &moved, 0.1).unwrap();
        assert_relative_eq!(here, there, epsilon = 1e-10);
    }
}
