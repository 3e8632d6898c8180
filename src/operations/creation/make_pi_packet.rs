use crate::error::Result;
use crate::geometry::{Eddy, Segment};

use super::{packet_frames, PacketParams};

/// Creates a packet of nested Π-shaped hairpin loops.
///
/// Each loop contributes three segments: the `-y` leg, the spanwise head
/// and the `+y` leg.
///
/// ```text
/// (-i l, -h_i/2, 0) → (-i l + h_i tan β, -h_i/2, h_i)
///                   → (-i l + h_i tan β,  h_i/2, h_i) → (-i l, h_i/2, 0)
/// ```
pub struct MakePiPacket {
    params: PacketParams,
}

impl MakePiPacket {
    /// Creates a new `MakePiPacket` operation with loop spacing `l`,
    /// envelope angle `alpha_deg`, `n` loops and lean `beta_deg`.
    #[must_use]
    pub fn new(l: f64, alpha_deg: f64, n: usize, beta_deg: f64) -> Self {
        Self {
            params: PacketParams {
                loop_spacing: l,
                alpha_deg,
                loops: n,
                beta_deg,
                ..PacketParams::default()
            },
        }
    }

    /// Creates the operation from a full parameter set.
    #[must_use]
    pub fn from_params(params: PacketParams) -> Self {
        Self { params }
    }

    /// Sets the requested quadrature spacing of the filaments.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.params.spacing = spacing;
        self
    }

    /// Executes the operation, returning `3 n` segments, loop by loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a loop would have
    /// non-positive height.
    pub fn execute(&self) -> Result<Eddy> {
        let ds = self.params.spacing;
        let mut segments = Vec::with_capacity(3 * self.params.loops);
        for frame in packet_frames(&self.params)? {
            let corners = [frame.base(-1.0), frame.top(-1.0), frame.top(1.0), frame.base(1.0)];
            for w in corners.windows(2) {
                segments.push(Segment::new(w[0], w[1], ds)?);
            }
        }
        let eddy = Eddy::new(segments);
        tracing::debug!(
            loops = self.params.loops,
            segments = eddy.len(),
            samples = eddy.sample_count(),
            "built pi packet"
        );
        Ok(eddy)
    }
}
