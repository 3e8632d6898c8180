use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use crate::error::{ParameterError, Result};
use crate::math::{Point3, TOLERANCE};

/// Largest accepted expected eddy count `density * area`.
pub const MAX_MEAN_PLACEMENTS: f64 = 1e8;

/// A rectangular patch of the wall `z = 0` on which eddies are seeded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPatch {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl WallPatch {
    /// Creates the patch `[x_min, x_max] x [y_min, y_max]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or a range is empty.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let bounds = [("x_min", x_min), ("x_max", x_max), ("y_min", y_min), ("y_max", y_max)];
        for (name, value) in bounds {
            ParameterError::require_finite(name, value)?;
        }
        ParameterError::require_positive("x_max - x_min", x_max - x_min)?;
        ParameterError::require_positive("y_max - y_min", y_max - y_min)?;
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Area of the patch.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Returns whether `p` lies on the patch.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        (self.x_min..=self.x_max).contains(&p.x)
            && (self.y_min..=self.y_max).contains(&p.y)
            && p.z.abs() < TOLERANCE
    }

    /// Scatters eddy origins over the patch as a homogeneous Poisson process.
    ///
    /// The count is drawn from `Poisson(density * area)` and the positions
    /// uniformly over the patch, on the wall.
    ///
    /// # Errors
    ///
    /// Returns an error if `density` is not positive and finite, or if
    /// `density * area` exceeds [`MAX_MEAN_PLACEMENTS`].
    pub fn place_eddies<R: Rng + ?Sized>(&self, density: f64, rng: &mut R) -> Result<Vec<Point3>> {
        let density = ParameterError::require_positive("density", density)?;
        let mean = density * self.area();
        if mean > MAX_MEAN_PLACEMENTS {
            return Err(ParameterError::Invalid {
                parameter: "density * area",
                value: mean,
                reason: "expected eddy count is too large to place",
            }
            .into());
        }
        let poisson = Poisson::new(mean).map_err(|_| ParameterError::Invalid {
            parameter: "density * area",
            value: mean,
            reason: "not a valid Poisson mean",
        })?;

        let draw: f64 = poisson.sample(rng);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = draw as usize;
        tracing::debug!(mean, count, "placing eddies on wall patch");

        Ok((0..count)
            .map(|_| {
                Point3::new(
                    rng.gen_range(self.x_min..self.x_max),
                    rng.gen_range(self.y_min..self.y_max),
                    0.0,
                )
            })
            .collect())
    }

    /// Same as [`place_eddies`](Self::place_eddies) with a generator seeded
    /// from `seed`, for reproducible fields.
    ///
    /// # Errors
    ///
    /// Returns an error if `density` is not positive and finite, or if
    /// `density * area` exceeds [`MAX_MEAN_PLACEMENTS`].
    pub fn place_eddies_seeded(&self, density: f64, seed: u64) -> Result<Vec<Point3>> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.place_eddies(density, &mut rng)
    }
}

impl Default for WallPatch {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl fmt::Display for WallPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Domain: [{}, {}]x[{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
