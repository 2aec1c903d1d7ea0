//! Headless battle runner.
//!
//! Loads a battle roster (JSON path as the first argument, or a default
//! seeded skirmish), drives the game loop until one faction is wiped out,
//! logs every combat event, and prints the final snapshot as JSON.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use armada_app::game_loop::{self, GameLoopCommand};
use armada_core::commands::PlayerCommand;
use armada_core::config::BattleConfig;
use armada_core::enums::BattlePhase;
use armada_core::events::CombatEvent;
use armada_core::state::{BattleSnapshot, FleetView};

/// Cap on a battle that never resolves (simulation seconds).
const BATTLE_TIME_CAP_SECS: f64 = 600.0;

/// Minimum delay between rounds of advance orders (simulation seconds).
const ORDER_INTERVAL_SECS: f64 = 2.0;

fn main() {
    env_logger::init();

    let roster = match std::env::args().nth(1) {
        Some(path) => match BattleConfig::from_path(&path) {
            Ok(config) => {
                log::info!("loaded battle config from {path}");
                Some(config)
            }
            Err(err) => {
                log::error!("cannot load battle config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => None, // default seeded skirmish
    };

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let latest = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(roster, snapshot_tx, Arc::clone(&latest));

    cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::StartBattle))
        .expect("game loop unavailable");

    let mut last_order_at = f64::NEG_INFINITY;
    let mut final_snapshot: Option<BattleSnapshot> = None;

    for snapshot in snapshot_rx.iter() {
        log_events(&snapshot);

        if snapshot.phase == BattlePhase::Complete
            || snapshot.time.elapsed_secs > BATTLE_TIME_CAP_SECS
        {
            final_snapshot = Some(snapshot);
            break;
        }

        // Keep idle player fleets advancing on the nearest enemy; the
        // Empire side holds its line and fights on zone-of-control.
        if snapshot.phase == BattlePhase::Active
            && snapshot.time.elapsed_secs - last_order_at >= ORDER_INTERVAL_SECS
            && issue_advance_orders(&snapshot, &cmd_tx)
        {
            last_order_at = snapshot.time.elapsed_secs;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    if let Some(snapshot) = final_snapshot {
        match snapshot.victor {
            Some(winner) => log::info!(
                "battle resolved after {:.1}s: {winner:?} wins",
                snapshot.time.elapsed_secs
            ),
            None => log::warn!(
                "battle unresolved after {:.1}s, stopping",
                snapshot.time.elapsed_secs
            ),
        }
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("cannot serialize final snapshot: {err}"),
        }
    }
}

/// Log this tick's combat events.
fn log_events(snapshot: &BattleSnapshot) {
    for event in &snapshot.events {
        match event {
            CombatEvent::Engagement {
                attacker,
                target,
                damage,
                target_hp,
                ..
            } => log::info!(
                "[{:7.1}s] fleet {attacker} hits fleet {target} for {damage:.0} ({target_hp:.0} hull left)",
                snapshot.time.elapsed_secs
            ),
            CombatEvent::Destruction {
                fleet,
                faction,
                destroyed_by,
            } => log::info!(
                "[{:7.1}s] {faction:?} fleet {fleet} destroyed by fleet {destroyed_by}",
                snapshot.time.elapsed_secs
            ),
            CombatEvent::Victory { winner } => {
                log::info!("[{:7.1}s] {winner:?} wins", snapshot.time.elapsed_secs);
            }
        }
    }
}

/// Order every idle, out-of-contact player fleet toward its nearest enemy.
/// Returns whether any order was issued.
fn issue_advance_orders(
    snapshot: &BattleSnapshot,
    cmd_tx: &mpsc::Sender<GameLoopCommand>,
) -> bool {
    let player = snapshot.player_faction;
    let enemies: Vec<&FleetView> = snapshot
        .fleets
        .iter()
        .filter(|f| f.faction != player)
        .collect();
    if enemies.is_empty() {
        return false;
    }

    let mut issued = false;
    for fleet in snapshot.fleets.iter().filter(|f| f.faction == player) {
        if fleet.is_moving || fleet.is_rotating || fleet.in_combat {
            continue;
        }
        let nearest = enemies.iter().min_by(|a, b| {
            let da = fleet.position.range_to(&a.position);
            let db = fleet.position.range_to(&b.position);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
        let Some(nearest) = nearest else { continue };
        // Already in weapon range: hold and let combat resolve.
        if fleet.position.range_to(&nearest.position) <= fleet.range {
            continue;
        }
        let order = PlayerCommand::MoveOrder {
            fleet_id: fleet.id,
            x: nearest.position.x,
            y: nearest.position.y,
        };
        if cmd_tx.send(GameLoopCommand::Player(order)).is_ok() {
            issued = true;
        }
    }
    issued
}
