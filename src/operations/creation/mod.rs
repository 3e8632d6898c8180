mod make_lambda_packet;
mod make_pi_eddy;
mod make_pi_packet;

pub use make_lambda_packet::MakeLambdaPacket;
pub use make_pi_eddy::MakePiEddy;
pub use make_pi_packet::MakePiPacket;

use crate::error::{ParameterError, Result};
use crate::math::{Point3, DEFAULT_SPACING};

/// Shape parameters shared by hairpin packets.
///
/// Loop `i` (counting from the head of the packet) sits `i * loop_spacing`
/// upstream of the first one and has height `1 - i * loop_spacing * tan(alpha)`,
/// so the loop tops line up along a ramp of angle `alpha`. Each loop leans
/// downstream by `beta` from the wall normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacketParams {
    /// Streamwise distance between consecutive loops.
    pub loop_spacing: f64,
    /// Growth angle of the packet envelope, in degrees.
    pub alpha_deg: f64,
    /// Number of loops.
    pub loops: usize,
    /// Inclination of each loop from the wall normal, in degrees.
    pub beta_deg: f64,
    /// Requested quadrature spacing along every filament.
    pub spacing: f64,
}

impl Default for PacketParams {
    fn default() -> Self {
        Self {
            loop_spacing: 0.4,
            alpha_deg: 10.0,
            loops: 7,
            beta_deg: 45.0,
            spacing: DEFAULT_SPACING,
        }
    }
}

/// Key points of one packet loop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoopFrame {
    pub x: f64,
    pub height: f64,
    pub lean: f64,
}

impl LoopFrame {
    /// Wall corner on the `-y` (`side = -1`) or `+y` (`side = 1`) side.
    pub fn base(&self, side: f64) -> Point3 {
        Point3::new(self.x, side * 0.5 * self.height, 0.0)
    }

    /// Raised corner above [`base`](Self::base).
    pub fn top(&self, side: f64) -> Point3 {
        Point3::new(self.x + self.lean, side * 0.5 * self.height, self.height)
    }

    /// Tip of a Λ loop.
    pub fn apex(&self) -> Point3 {
        Point3::new(self.x + self.lean, 0.0, self.height)
    }
}

/// Validates packet parameters and lays out the loops.
pub(crate) fn packet_frames(params: &PacketParams) -> Result<Vec<LoopFrame>> {
    let alpha = ParameterError::require_finite("alpha_deg", params.alpha_deg)?.to_radians();
    let beta = ParameterError::require_finite("beta_deg", params.beta_deg)?.to_radians();
    ParameterError::require_positive("spacing", params.spacing)?;
    if params.loops == 0 {
        return Err(ParameterError::Invalid {
            parameter: "loops",
            value: 0.0,
            reason: "a packet needs at least one loop",
        }
        .into());
    }
    // A lone loop sits at the packet head; its spacing never enters.
    let l = if params.loops > 1 {
        ParameterError::require_positive("loop_spacing", params.loop_spacing)?
    } else {
        0.0
    };

    let (tan_alpha, tan_beta) = (alpha.tan(), beta.tan());
    (0..params.loops)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * l;
            let height = 1.0 - offset * tan_alpha;
            if height.is_finite() && height > 0.0 {
                Ok(LoopFrame {
                    x: -offset,
                    height,
                    lean: height * tan_beta,
                })
            } else {
                Err(ParameterError::Invalid {
                    parameter: "loop height",
                    value: height,
                    reason: "packet envelope reaches the wall; reduce loops, spacing or alpha",
                }
                .into())
            }
        })
        .collect()
}
