//! Mirror Bricks headless runner
//!
//! Plays one round with the autopilot on a fixed 60 Hz clock and reports the
//! score. Usage: `mirror-bricks [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: Option<&str>) -> mirror_bricks::Tuning {
    use mirror_bricks::Tuning;

    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path) {
        Ok(text) => match Tuning::from_json(&text) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning in {}: {}, using defaults", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {}, using defaults", path, e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mirror_bricks::autopilot::Autopilot;
    use mirror_bricks::platform::{Clock, ManualClock};
    use mirror_bricks::renderer::{build_instances, score_digits};
    use mirror_bricks::sim::{GameEvent, SimulationState, TickInput, tick};

    const FRAME: f64 = 1.0 / 60.0;
    const MAX_SECONDS: f64 = 120.0;

    env_logger::init();
    log::info!("Mirror Bricks (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let tuning = load_tuning(args.get(1).map(String::as_str));
    let seed = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Ignoring seed {:?}: {}", args[2], e);
            42
        }
        None => 42,
    };

    let clock = ManualClock::new(0.0);
    let mut state = SimulationState::with_tuning(seed, tuning, clock.now());
    let pilot = Autopilot::default();

    while clock.now() < MAX_SECONDS {
        clock.advance(FRAME);
        let now = clock.now();
        let input = TickInput::new(pilot.plan(&state, now));
        tick(&mut state, &input, now);

        for event in state.drain_events() {
            match event {
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
                other => log::debug!("{:?}", other),
            }
        }
        if state.is_game_over() || state.quit_requested {
            break;
        }
    }

    log::debug!(
        "Final frame: {} instances over {} frames",
        build_instances(&state).len(),
        state.frames
    );
    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => log::debug!("Snapshot: {}", json),
        Err(e) => log::warn!("Failed to serialize snapshot: {}", e),
    }

    let digits: String = score_digits(state.score())
        .iter()
        .map(|d| char::from(b'0' + *d))
        .collect();
    println!("seed {} score {} after {:.1}s", seed, digits, clock.now());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}
