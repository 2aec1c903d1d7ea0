//! Battle engine — the core of the tactical layer.
//!
//! `BattleEngine` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems in order, and produces
//! `BattleSnapshot`s. The driver hands it wall-clock delta time each tick;
//! every motion magnitude is a per-second rate, so simulation behavior is
//! independent of the driver's frame rate.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use armada_core::abilities::{self, AbilityScores};
use armada_core::commands::PlayerCommand;
use armada_core::components::*;
use armada_core::config::BattleConfig;
use armada_core::constants::{MAX_FRAME_DT, MOVE_ORDER_MIN_DISTANCE};
use armada_core::enums::{BattlePhase, Faction, InteractionMode, MotionState};
use armada_core::events::CombatEvent;
use armada_core::state::BattleSnapshot;
use armada_core::types::{Position, SimTime};

use crate::scenario;
use crate::systems;

/// Configuration for starting a new battle engine.
pub struct EngineConfig {
    /// RNG seed for skirmish deployment. Same seed = same deployment.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The battle engine. Owns the ECS world and all battle state.
pub struct BattleEngine {
    world: World,
    time: SimTime,
    phase: BattlePhase,
    player_faction: Faction,
    time_scale: f64,
    rng: ChaCha8Rng,
    roster: Option<BattleConfig>,
    next_fleet_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    combat_events: Vec<CombatEvent>,
    victor: Option<Faction>,
}

impl BattleEngine {
    /// Create a new battle engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: BattlePhase::default(),
            player_faction: Faction::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            roster: None,
            next_fleet_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            combat_events: Vec::new(),
            victor: None,
        }
    }

    /// Provide the roster to spawn on the next `StartBattle`. Without one,
    /// `StartBattle` deploys a default seeded skirmish.
    pub fn load_roster(&mut self, config: BattleConfig) {
        self.player_faction = config.player_faction;
        self.roster = Some(config);
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt_secs` wall-clock seconds
    /// and return the resulting snapshot.
    pub fn tick(&mut self, dt_secs: f64) -> BattleSnapshot {
        self.process_commands();

        let dt = (dt_secs * self.time_scale).clamp(0.0, MAX_FRAME_DT);
        if self.phase == BattlePhase::Active && dt > 0.0 {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.combat_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.player_faction,
            events,
            self.victor,
        )
    }

    /// Get the current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get the victor, if the battle is complete.
    pub fn victor(&self) -> Option<Faction> {
        self.victor
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartBattle => self.start_battle(),
            PlayerCommand::Pause => {
                if self.phase == BattlePhase::Active {
                    self.phase = BattlePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == BattlePhase::Paused {
                    self.phase = BattlePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SelectFleet { fleet_id } => self.select_fleet(fleet_id),
            PlayerCommand::Deselect => self.deselect_all(),
            PlayerCommand::SetInteractionMode { fleet_id, mode } => {
                self.set_interaction_mode(fleet_id, mode);
            }
            PlayerCommand::MoveOrder { fleet_id, x, y } => self.move_order(fleet_id, x, y),
            PlayerCommand::DirectMoveOrder { fleet_id, x, y } => {
                self.direct_move_order(fleet_id, x, y);
            }
            PlayerCommand::RotateOrder { fleet_id, x, y } => self.rotate_order(fleet_id, x, y),
            PlayerCommand::StopFleet { fleet_id } => self.stop_fleet(fleet_id),
            PlayerCommand::AssignCommander {
                fleet_id,
                abilities,
            } => self.assign_commander(fleet_id, abilities),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Motion integration (rotation, translation, facing-while-moving)
        systems::maneuver::run(&mut self.world, dt);
        // 2. Zone-of-control tracking + auto-orientation
        systems::zoc::run(&mut self.world, dt);
        // 3. Combat resolution (targeting, damage, destruction events)
        systems::combat::run(&mut self.world, self.time.elapsed_secs, &mut self.combat_events);
        // 4. In-combat flag decay
        systems::status::run(&mut self.world, self.time.elapsed_secs);
        // 5. Cleanup (despawn destroyed fleets)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Victory detection
        self.check_victory();
    }

    /// Spawn the roster (or a default skirmish) and begin the battle.
    fn start_battle(&mut self) {
        if !matches!(self.phase, BattlePhase::Setup | BattlePhase::Complete) {
            return;
        }
        self.world.clear();
        self.next_fleet_id = 0;
        self.victor = None;
        self.combat_events.clear();
        self.time = SimTime::default();

        match &self.roster {
            Some(config) => scenario::setup_battle(&mut self.world, config, &mut self.next_fleet_id),
            None => scenario::skirmish(&mut self.world, &mut self.rng, &mut self.next_fleet_id, 3),
        }
        self.phase = BattlePhase::Active;
    }

    /// One faction wiped out ends the battle; the event fires exactly once.
    fn check_victory(&mut self) {
        if self.victor.is_some() {
            return;
        }
        let mut alliance = 0u32;
        let mut empire = 0u32;
        for (_entity, info) in self.world.query_mut::<&FleetInfo>() {
            match info.faction {
                Faction::Alliance => alliance += 1,
                Faction::Empire => empire += 1,
            }
        }
        let winner = match (alliance, empire) {
            (0, n) if n > 0 => Some(Faction::Empire),
            (n, 0) if n > 0 => Some(Faction::Alliance),
            _ => None,
        };
        if let Some(winner) = winner {
            log::info!("battle complete, {winner:?} wins");
            self.combat_events.push(CombatEvent::Victory { winner });
            self.victor = Some(winner);
            self.phase = BattlePhase::Complete;
        }
    }

    // --- Selection ---

    fn select_fleet(&mut self, fleet_id: u32) {
        let Some((entity, faction)) = self.find_live_fleet(fleet_id) else {
            log::debug!("select ignored: fleet {fleet_id} is not alive");
            return;
        };
        if faction != self.player_faction {
            log::debug!("select ignored: fleet {fleet_id} is not player-owned");
            return;
        }

        // Re-selecting the already-selected fleet is the rapid re-click
        // that switches it from move mode to rotate mode.
        let was_selected = self
            .world
            .get::<&Selection>(entity)
            .map(|s| s.selected)
            .unwrap_or(false);

        for (_entity, (info, selection)) in
            self.world.query_mut::<(&FleetInfo, &mut Selection)>()
        {
            if info.faction != faction {
                continue;
            }
            if info.id == fleet_id {
                selection.selected = true;
                selection.mode = if was_selected {
                    InteractionMode::Rotate
                } else {
                    InteractionMode::Move
                };
            } else {
                selection.selected = false;
                selection.mode = InteractionMode::None;
            }
        }
    }

    fn deselect_all(&mut self) {
        for (_entity, (info, selection)) in
            self.world.query_mut::<(&FleetInfo, &mut Selection)>()
        {
            if info.faction == self.player_faction {
                selection.selected = false;
                selection.mode = InteractionMode::None;
            }
        }
    }

    fn set_interaction_mode(&mut self, fleet_id: u32, mode: InteractionMode) {
        let Some(entity) = self.owned_live_fleet(fleet_id, "set mode") else {
            return;
        };
        if let Ok(mut selection) = self.world.get::<&mut Selection>(entity) {
            selection.mode = mode;
            selection.selected = mode != InteractionMode::None;
        }
    }

    // --- Movement orders ---

    fn move_order(&mut self, fleet_id: u32, x: f64, y: f64) {
        let Some(entity) = self.owned_live_fleet(fleet_id, "move order") else {
            return;
        };
        let Ok(position) = self.world.get::<&Position>(entity).map(|p| *p) else {
            return;
        };
        let target = Position::new(x, y);

        if let Ok(mut maneuver) = self.world.get::<&mut Maneuver>(entity) {
            maneuver.target_position = target;
            if position.range_to(&target) > MOVE_ORDER_MIN_DISTANCE {
                // Come about first, then burn: the move waits on rotation.
                maneuver.target_heading = position.heading_to(&target);
                maneuver.state = MotionState::RotatingToFace { resume_move: true };
            } else {
                maneuver.state = MotionState::Translating;
            }
        }
        self.clear_selection(entity);
    }

    fn direct_move_order(&mut self, fleet_id: u32, x: f64, y: f64) {
        let Some(entity) = self.owned_live_fleet(fleet_id, "direct move order") else {
            return;
        };
        if let Ok(mut maneuver) = self.world.get::<&mut Maneuver>(entity) {
            maneuver.target_position = Position::new(x, y);
            maneuver.state = MotionState::TranslatingDirect;
        }
        self.clear_selection(entity);
    }

    fn rotate_order(&mut self, fleet_id: u32, x: f64, y: f64) {
        let Some(entity) = self.owned_live_fleet(fleet_id, "rotate order") else {
            return;
        };
        let Ok(position) = self.world.get::<&Position>(entity).map(|p| *p) else {
            return;
        };
        if let Ok(mut maneuver) = self.world.get::<&mut Maneuver>(entity) {
            maneuver.target_heading = position.heading_to(&Position::new(x, y));
            maneuver.state = MotionState::RotatingToFace { resume_move: false };
        }
        self.clear_selection(entity);
    }

    fn stop_fleet(&mut self, fleet_id: u32) {
        let Some(entity) = self.owned_live_fleet(fleet_id, "stop") else {
            return;
        };
        let Ok(position) = self.world.get::<&Position>(entity).map(|p| *p) else {
            return;
        };
        if let Ok(mut maneuver) = self.world.get::<&mut Maneuver>(entity) {
            maneuver.target_position = position;
            maneuver.state = MotionState::Idle;
        }
    }

    // --- Commander assignment ---

    fn assign_commander(&mut self, fleet_id: u32, abilities: Option<AbilityScores>) {
        // Commander changes come from the strategic layer and apply to
        // either side, unlike player orders.
        let Some((entity, _)) = self.find_live_fleet(fleet_id) else {
            log::debug!("assign commander ignored: fleet {fleet_id} is not alive");
            return;
        };
        match abilities {
            Some(scores) => {
                let _ = self.world.insert_one(entity, scores);
            }
            None => {
                let _ = self.world.remove_one::<AbilityScores>(entity);
            }
        }
        let scores = self.world.get::<&AbilityScores>(entity).map(|s| *s).ok();
        if let (Ok(mut mobility), Ok(mut weapons)) = (
            self.world.get::<&mut Mobility>(entity),
            self.world.get::<&mut Weapons>(entity),
        ) {
            abilities::derive_stats(&mut mobility, &mut weapons, scores.as_ref());
        }
    }

    // --- Lookup helpers ---

    /// Resolve a fleet id to its entity and faction, live fleets only.
    fn find_live_fleet(&self, fleet_id: u32) -> Option<(Entity, Faction)> {
        let mut query = self.world.query::<(&FleetInfo, &Hull)>();
        query.iter().find_map(|(entity, (info, hull))| {
            (info.id == fleet_id && hull.hp > 0.0).then_some((entity, info.faction))
        })
    }

    /// Resolve an order's target fleet: must be alive and player-owned.
    /// Anything else is a silent no-op, logged for diagnostics only.
    fn owned_live_fleet(&self, fleet_id: u32, what: &str) -> Option<Entity> {
        match self.find_live_fleet(fleet_id) {
            Some((entity, faction)) if faction == self.player_faction => Some(entity),
            Some(_) => {
                log::debug!("{what} ignored: fleet {fleet_id} is not player-owned");
                None
            }
            None => {
                log::debug!("{what} ignored: fleet {fleet_id} is not alive");
                None
            }
        }
    }

    /// Issuing any order deselects the fleet and clears its mode.
    fn clear_selection(&mut self, entity: Entity) {
        if let Ok(mut selection) = self.world.get::<&mut Selection>(entity) {
            selection.selected = false;
            selection.mode = InteractionMode::None;
        }
    }
}
