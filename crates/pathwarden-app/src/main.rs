use pathwarden_app::game_loop;
use pathwarden_app::state::AppConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    log::info!(
        "Starting PATHWARDEN: seed {}, {} scripted towers, time scale {}",
        config.sim.seed,
        config.placements.len(),
        config.time_scale
    );

    // The loop stops when every sender is gone, so hold ours until it finishes.
    let (command_tx, _, handle) = game_loop::spawn_game_loop(config)?;
    let last = handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    drop(command_tx);

    match last {
        Some(snapshot) => log::info!(
            "Finished at tick {} ({:?}): money {}, lives {}, wave {}",
            snapshot.time.tick,
            snapshot.phase,
            snapshot.money,
            snapshot.lives,
            snapshot.wave.number
        ),
        None => log::info!("Finished before the first tick"),
    }
    Ok(())
}
