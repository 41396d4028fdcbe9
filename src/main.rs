//! Dance Runaway entry point
//!
//! Headless native driver: the autopilot dances the mat at a fixed frame
//! rate on a simulated clock, and the final state is printed as JSON.
//!
//! Usage: `dance-runaway [tuning.json] [seed]`

use std::process::ExitCode;

use dance_runaway::assets::{PIRATE, TROLL};
use dance_runaway::autopilot::Autopilot;
use dance_runaway::consts::FRAME_RATE;
use dance_runaway::{AssetProvider, ProceduralAssets, Scene, Session, Tuning};

/// Give up on a demo run after this many simulated seconds
const MAX_DEMO_SECONDS: f64 = 300.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Dance Runaway (headless) starting...");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Failed to load the tuning from {path}, using defaults: {e}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Invalid seed: {e}");
            return ExitCode::FAILURE;
        }
        None => 42,
    };

    let media = match ProceduralAssets::default().load() {
        Ok(media) => media,
        Err(e) => {
            eprintln!("Failed to load the media: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(cast) = media.cast(PIRATE, TROLL) else {
        eprintln!("Media lacks the {PIRATE} or the {TROLL}");
        return ExitCode::FAILURE;
    };

    let start = 0.0;
    let mut session = Session::new(start, cast, media.level_count(), tuning);
    let mut pilot = Autopilot::new(seed, start);
    log::info!("Autopilot seed: {seed}");

    let frame_dt = 1.0 / FRAME_RATE as f64;
    let mut frame_no: u64 = 0;
    let mut level_shown = 0;

    loop {
        frame_no += 1;
        let now = start + frame_no as f64 * frame_dt;

        let inputs = pilot.poll(now);
        match session.frame(now, inputs) {
            Scene::Game => {
                let level = session.state().level_index;
                if level != level_shown {
                    level_shown = level;
                    log::info!("Now showing level {}", level + 1);
                }
            }
            Scene::GameOver(kind) => {
                log::info!("Game over screen: {kind:?}");
                break;
            }
            Scene::Unchanged => {}
            Scene::Quit => break,
        }

        if now - start >= MAX_DEMO_SECONDS {
            log::warn!("Demo run hit the {MAX_DEMO_SECONDS}s limit");
            break;
        }
    }

    match serde_json::to_string_pretty(&session.state().snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize the final state: {e}");
            return ExitCode::FAILURE;
        }
    }

    log::info!("Quit the game after {frame_no} frames");
    ExitCode::SUCCESS
}
