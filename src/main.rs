//! Wormhole-Sim.
//!
//! Headless-Demo der Tunnel-Engine: fliegt den Flugkörper mit leichter
//! Querbewegung durch den endlos verlängerten Tunnel und protokolliert
//! Verlängerungen, Kollisionen und den Punktestand.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wormhole_engine::{
    build_tube_mesh, Craft, EngineOptions, TickOutcome, TunnelController,
};

/// Vorschub pro Takt entlang +x.
const FORWARD_STEP: f32 = 0.02;
/// Anzahl der simulierten Takte.
const TICKS: usize = 5_000;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Wormhole-Sim v{} startet...", env!("CARGO_PKG_VERSION"));

    let options_path = std::path::Path::new("wormhole-options.toml");
    let mut options = EngineOptions::load_from_file(options_path);

    let rng = StdRng::from_os_rng();
    let mut controller = TunnelController::new(options.tunnel, rng)?;
    controller.set_best_score(options.best_score);

    let mesh = build_tube_mesh(controller.tunnel(), options.tunnel.polygon_mode);
    log::info!(
        "Initialer Tunnel: {} Sektoren, {} Vertices",
        controller.tunnel().sector_count(),
        mesh.vertex_count()
    );

    let mut craft = Craft::new(options.tunnel.craft_radius);
    let mut extensions = 0usize;
    let mut collisions = 0usize;

    for tick in 0..TICKS {
        craft.position.x += FORWARD_STEP;
        // Leichte Querbewegung, damit die Wand auch mal getroffen wird
        craft.position.y = (tick as f32 * 0.01).sin() * 0.3;

        match controller.tick(&mut craft) {
            TickOutcome::Steady => {}
            TickOutcome::Extended => extensions += 1,
            TickOutcome::Collision => collisions += 1,
        }
    }

    log::info!(
        "Simulation beendet: {} Verlängerungen, {} Kollisionen, Punktestand {}, Bestwert {}",
        extensions,
        collisions,
        controller.score(),
        controller.best_score()
    );

    options.best_score = controller.best_score();
    options.save_to_file(options_path)?;

    Ok(())
}
