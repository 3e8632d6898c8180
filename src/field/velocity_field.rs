use rayon::prelude::*;

use crate::error::{ParameterError, Result};
use crate::geometry::{Eddy, SymmetryPlane};
use crate::math::{Point3, Vector3, DEFAULT_CUTOFF};
use crate::operations::query::eddy_velocity;
use crate::operations::transform::{Mirror, Translate};

/// Parameters of a superposed attached-eddy field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Near-field cutoff radius of every filament.
    pub cutoff: f64,
    /// The wall plane.
    pub wall: SymmetryPlane,
    /// Whether every eddy is paired with its wall image.
    pub include_images: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            wall: SymmetryPlane::default(),
            include_images: true,
        }
    }
}

/// Velocity field of copies of one eddy placed over a wall, together with
/// their images.
///
/// Contributions are accumulated in placement order, each eddy followed by
/// its image. Query points are independent and evaluated in parallel by
/// [`evaluate_many`](Self::evaluate_many).
#[derive(Debug, Clone)]
pub struct VelocityField {
    eddies: Vec<Eddy>,
    cutoff: f64,
}

impl VelocityField {
    /// Places `template` at every origin in `placements`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cutoff is not positive and finite, or if a
    /// placement moves a segment out of finite range.
    pub fn new(template: &Eddy, placements: &[Point3], params: FieldParams) -> Result<Self> {
        let cutoff = ParameterError::require_positive("cutoff", params.cutoff)?;
        let mirror = Mirror::new(params.wall);

        let per_origin = if params.include_images { 2 } else { 1 };
        let mut eddies = Vec::with_capacity(per_origin * placements.len());
        for origin in placements {
            let placed = Translate::to(origin).execute(template)?;
            if params.include_images {
                let image = mirror.execute(&placed);
                eddies.push(placed);
                eddies.push(image);
            } else {
                eddies.push(placed);
            }
        }

        tracing::debug!(
            placements = placements.len(),
            eddies = eddies.len(),
            samples_per_eddy = template.sample_count(),
            wall = %params.wall,
            "assembled velocity field"
        );
        Ok(Self { eddies, cutoff })
    }

    /// The placed eddies (and images), in accumulation order.
    #[must_use]
    pub fn eddies(&self) -> &[Eddy] {
        &self.eddies
    }

    /// Velocity at one point.
    #[must_use]
    pub fn evaluate(&self, query: &Point3) -> Vector3 {
        self.eddies
            .iter()
            .fold(Vector3::zeros(), |acc, eddy| acc + eddy_velocity(query, eddy, self.cutoff))
    }

    /// Velocity at many points, evaluated in parallel.
    #[must_use]
    pub fn evaluate_many(&self, queries: &[Point3]) -> Vec<Vector3> {
        let span = tracing::debug_span!("evaluate_many", points = queries.len());
        let _guard = span.enter();
        queries.par_iter().map(|q| self.evaluate(q)).collect()
    }
}
