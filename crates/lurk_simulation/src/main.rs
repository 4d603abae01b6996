//! Headless симуляция Lurk
//!
//! Загружает уровень (путь к RON первым аргументом, иначе встроенный demo),
//! гоняет guard'ов и блуждающего intruder'а без рендера.
//!
//! Usage: `lurk_simulation [level.ron] [seed]`

use std::process::ExitCode;

use lurk_simulation::{
    create_headless_app, guard_trace, log_error, log_info, Intruder, LevelDescription,
};

const TICK_COUNT: usize = 60 * 60; // одна минута симуляции

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let level_path = args.next();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut app = create_headless_app(seed);
    log_info(&format!("Starting Lurk headless simulation (seed: {})", seed));

    let level = match level_path.as_deref() {
        Some(path) => LevelDescription::load(path),
        None => LevelDescription::demo(),
    };
    let level = match level {
        Ok(level) => level,
        Err(err) => {
            log_error(&format!("Failed to load level: {}", err));
            return ExitCode::FAILURE;
        }
    };

    let spawned = match level.spawn(app.world_mut()) {
        Ok(spawned) => spawned,
        Err(err) => {
            log_error(&format!("Failed to spawn level: {}", err));
            return ExitCode::FAILURE;
        }
    };

    for tick in 0..TICK_COUNT {
        app.update();

        if tick % 600 == 0 {
            for point in guard_trace(app.world_mut()) {
                log_info(&format!(
                    "Tick {}: {} {} at ({:.1}, {:.1})",
                    tick, point.name, point.state, point.position.x, point.position.z
                ));
            }
        }

        let caught = app
            .world()
            .get::<Intruder>(spawned.intruder)
            .is_some_and(|intruder| !intruder.alive);
        if caught {
            log_info(&format!("Intruder caught on tick {}", tick));
            break;
        }
    }

    log_info("Simulation complete!");
    ExitCode::SUCCESS
}
