//! Wall-normal profile of the mean velocity induced by a field of hairpin
//! packets.
//!
//! Usage:
//! ```text
//! cargo run --example field_profile
//! RUST_LOG=aeddy=debug cargo run --example field_profile
//! ```

use aeddy::field::{grid_1d, FieldParams, Grid3, VelocityField, WallPatch};
use aeddy::math::Vector3;
use aeddy::operations::creation::{MakePiPacket, PacketParams};

fn main() -> aeddy::Result<()> {
    // Default: WARN for everything, INFO for aeddy.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("field_profile=info".parse().unwrap_or_default())
        .add_directive("aeddy=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let packet = MakePiPacket::from_params(PacketParams {
        spacing: 0.02,
        ..PacketParams::default()
    })
    .execute()?;

    let patch = WallPatch::new(-1.0, 3.0, -1.0, 1.0)?;
    let origins = patch.place_eddies_seeded(2.0, 1)?;
    tracing::info!(%patch, eddies = origins.len(), "placed packets");

    let field = VelocityField::new(&packet, &origins, FieldParams::default())?;

    // Average over a small streamwise/spanwise window at each height.
    let xs = grid_1d(0.5, 1.5, 0.25)?;
    let ys = grid_1d(-0.5, 0.5, 0.25)?;
    let heights = grid_1d(0.0, 1.2, 0.1)?;

    println!("{:>8} {:>12} {:>12} {:>12}", "z", "<u>", "<v>", "<w>");
    for &z in &heights {
        let plane = Grid3::from_axes(xs.clone(), ys.clone(), vec![z]);
        let velocities = field.evaluate_many(&plane.points());
        let sum = velocities.iter().fold(Vector3::zeros(), |acc, u| acc + u);
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / velocities.len() as f64;
        println!("{z:>8.3} {:>12.5} {:>12.5} {:>12.5}", mean.x, mean.y, mean.z);
    }
    Ok(())
}
