//! Game loop thread — ticks the battle engine at the nominal rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; each tick's snapshot is
//! sent to the snapshot channel and stored in shared state for synchronous
//! polling. The measured wall-clock delta is handed to the engine, so a
//! slow frame produces a proportionally larger simulation step instead of
//! slowing the battle down.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use armada_core::commands::PlayerCommand;
use armada_core::config::BattleConfig;
use armada_core::constants::TICK_RATE;
use armada_core::state::BattleSnapshot;
use armada_sim::engine::{BattleEngine, EngineConfig};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the battle engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer to use. The loop ends
/// on `Shutdown`, or when either channel disconnects.
pub fn spawn_game_loop(
    roster: Option<BattleConfig>,
    snapshot_tx: mpsc::Sender<BattleSnapshot>,
    latest_snapshot: Arc<Mutex<Option<BattleSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("armada-game-loop".into())
        .spawn(move || {
            run_game_loop(roster, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    roster: Option<BattleConfig>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<BattleSnapshot>,
    latest_snapshot: &Mutex<Option<BattleSnapshot>>,
) {
    let mut engine = BattleEngine::new(EngineConfig::default());
    if let Some(roster) = roster {
        engine.load_roster(roster);
    }

    let mut last_tick = Instant::now();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick with the measured wall-clock delta
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        let snapshot = engine.tick(dt);

        // 3. Publish the snapshot
        if snapshot_tx.send(snapshot.clone()).is_err() {
            return;
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armada_core::enums::BattlePhase;
    use std::time::Duration;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartBattle))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartBattle)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let (snapshot_tx, snapshot_rx) = mpsc::channel();
        let latest = Arc::new(Mutex::new(None));
        let cmd_tx = spawn_game_loop(None, snapshot_tx, Arc::clone(&latest));

        cmd_tx
            .send(GameLoopCommand::Player(PlayerCommand::StartBattle))
            .unwrap();

        // A few snapshots arrive and reach Active phase once the start
        // command is processed.
        let mut active_seen = false;
        for _ in 0..30 {
            let snapshot = snapshot_rx
                .recv_timeout(Duration::from_secs(2))
                .expect("game loop stopped publishing");
            if snapshot.phase == BattlePhase::Active {
                assert!(!snapshot.fleets.is_empty());
                active_seen = true;
                break;
            }
        }
        assert!(active_seen);
        assert!(latest.lock().unwrap().is_some());

        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = BattleEngine::new(EngineConfig::default());
        engine.queue_command(PlayerCommand::StartBattle);

        for _ in 0..50 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "snapshot serialization took {elapsed:?}, should be <3ms"
        );
        assert!(!json.is_empty());
    }
}
