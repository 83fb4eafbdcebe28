//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, fires control point timers, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::time::Duration;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use outpost_capture::UnitSample;
use outpost_core::actions::Action;
use outpost_core::commands::PlayerCommand;
use outpost_core::components::{Destination, UnitInfo};
use outpost_core::config::MatchConfig;
use outpost_core::constants::TICK_MILLIS;
use outpost_core::enums::GamePhase;
use outpost_core::events::RenderEvent;
use outpost_core::state::GameStateSnapshot;
use outpost_core::types::{Position, SimTime, Velocity};

use crate::redraw::RedrawFlag;
use crate::scenario;
use crate::systems;
use crate::timers::{ScheduledTask, Scheduler};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Map and rules. Expected to be validated already.
    pub match_config: MatchConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            match_config: MatchConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: MatchConfig,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    unit_buffer: Vec<UnitSample>,
    fired_buffer: Vec<ScheduledTask>,
    scheduler: Scheduler,
    redraw: RedrawFlag,
    render_events: Vec<RenderEvent>,
    actions: Vec<Action>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.match_config,
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            unit_buffer: Vec::new(),
            fired_buffer: Vec::new(),
            scheduler: Scheduler::new(),
            redraw: RedrawFlag::default(),
            render_events: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// The snapshot is the render pass: it takes this tick's render events
    /// and dispatched actions, and reads-and-clears the redraw flag.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let render_events = std::mem::take(&mut self.render_events);
        let actions = std::mem::take(&mut self.actions);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.config.factions,
            render_events,
            actions,
            self.redraw.take(),
        )
    }

    /// Populate the map with seeded squads marching on control points.
    pub fn spawn_skirmish(&mut self, squad_size: usize) -> usize {
        scenario::populate_skirmish(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.next_unit_id,
            squad_size,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
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

    /// Get the match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether a render pass is owed (without clearing it).
    pub fn redraw_pending(&self) -> bool {
        self.redraw.is_marked()
    }

    /// Number of registered control point timers.
    pub fn timer_count(&self) -> usize {
        self.scheduler.len()
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
            PlayerCommand::StartMatch => {
                if self.phase == GamePhase::MainMenu {
                    world_setup::setup_match(&mut self.world, &mut self.scheduler, &self.config);
                    self.phase = GamePhase::Active;
                    self.time = SimTime::default();
                    info!(
                        control_points = self.config.control_points.len(),
                        factions = self.config.factions.len(),
                        local_faction = %self.config.local_faction,
                        "match started"
                    );
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SelectControlPoint { point_id } => {
                self.set_selected(point_id, true);
            }
            PlayerCommand::UnselectControlPoint { point_id } => {
                self.set_selected(point_id, false);
            }
            PlayerCommand::SpawnUnit { faction, x, y } => {
                if !self.config.has_faction(faction) {
                    warn!(%faction, "spawn request for unknown faction ignored");
                    return;
                }
                let unit_id = self.next_unit_id;
                self.next_unit_id += 1;
                world_setup::spawn_unit(&mut self.world, unit_id, faction, Position::new(x, y));
                debug!(unit_id, %faction, x, y, "unit spawned");
            }
            PlayerCommand::SetUnitVelocity { unit_id, vx, vy } => {
                let mut found = None;
                for (entity, (info, vel)) in
                    self.world.query_mut::<(&UnitInfo, &mut Velocity)>()
                {
                    if info.unit_id == unit_id {
                        *vel = Velocity::new(vx, vy);
                        found = Some(entity);
                    }
                }
                match found {
                    // A manual velocity overrides any march order.
                    Some(entity) => {
                        let _ = self.world.remove_one::<Destination>(entity);
                    }
                    None => warn!(unit_id, "velocity change for unknown unit ignored"),
                }
            }
            PlayerCommand::KillUnit { unit_id } => {
                for (_entity, info) in self.world.query_mut::<&mut UnitInfo>() {
                    if info.unit_id == unit_id {
                        info.alive = false;
                    }
                }
            }
        }
    }

    fn set_selected(&mut self, point_id: u32, selected: bool) {
        if !systems::selection::set_selected(
            &mut self.world,
            point_id,
            selected,
            &mut self.render_events,
        ) {
            warn!(point_id, "selection change for unknown control point ignored");
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Capture (one atomic tracker update per point)
        systems::capture::run(
            &mut self.world,
            &self.config.capture,
            &self.config.factions,
            &mut self.unit_buffer,
            &mut self.render_events,
            &mut self.redraw,
        );
        // 2. Movement integration
        systems::movement::run(&mut self.world);
        // 3. Cleanup (dead units)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 4. Timers (unit generation, cosmetic rotation)
        self.run_timers();
    }

    /// Advance the per-point timers by one tick and execute what fired.
    fn run_timers(&mut self) {
        self.fired_buffer.clear();
        self.scheduler
            .advance(Duration::from_millis(TICK_MILLIS), &mut self.fired_buffer);

        for task in self.fired_buffer.drain(..) {
            match task {
                ScheduledTask::SpawnUnit { point } => systems::unit_generation::fire(
                    &self.world,
                    point,
                    self.config.local_faction,
                    &self.config.spawn,
                    &mut self.actions,
                ),
                ScheduledTask::RotateRing { point } => {
                    systems::rotation::rotate_ring(&mut self.world, point)
                }
                ScheduledTask::RotateHalo { point } => {
                    systems::rotation::rotate_halo(&mut self.world, point)
                }
            }
        }
    }
}
