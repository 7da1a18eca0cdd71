//! Blob Arena entry point
//!
//! Runs the autopilot headless against the mesh renderer, paced at the
//! configured frame rate.
//!
//! Usage: `blob-arena [tuning.json] [frames]`

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blob_arena::input::Autopilot;
use blob_arena::renderer::MeshRenderer;
use blob_arena::sim::Body;
use blob_arena::{Game, SimRng, Tuning};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Blob Arena starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => Some(n),
        Some(Err(e)) => {
            log::error!("Invalid frame count: {e}");
            return ExitCode::FAILURE;
        }
        None => None,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let rng = SimRng::new(seed);
    log::info!("Game initialized with seed: {}", rng.seed());

    let renderer = MeshRenderer::new(tuning.pace_frames);
    let mut game = match Game::new(tuning, renderer, Autopilot::default(), rng) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not set up the arena: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match frames {
        Some(n) => game.run_frames(n),
        None => game.run(),
    };
    if let Err(e) = result {
        log::error!("Simulation stopped: {e}");
        return ExitCode::FAILURE;
    }

    let state = game.state();
    log::info!(
        "Finished after {} ticks: ate {}, player size {:.5}",
        state.time_ticks,
        state.eaten,
        state.player.size()
    );
    log::debug!("Final arena: {}", state.snapshot_json());
    ExitCode::SUCCESS
}
