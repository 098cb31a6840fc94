//! Simulation engine: the core of the engagement sim.
//!
//! `SimulationEngine` owns the hecs ECS world, applies pilot commands, runs
//! all systems at a fixed timestep and produces `HudSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use foxtwo_core::commands::PilotCommand;
use foxtwo_core::components::{Launcher, Target};
use foxtwo_core::config::SimConfig;
use foxtwo_core::enums::{LockState, TargetClass};
use foxtwo_core::error::{ConfigError, FireRejection};
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::state::HudSnapshot;
use foxtwo_core::types::{Orientation, Position, SimTime, Velocity};
use foxtwo_seeker::LockSession;

use crate::missile::MissileState;
use crate::systems;
use crate::world_setup;

/// Pilot inputs collected for one tick. Each is honored at most once.
#[derive(Debug, Default, Clone, Copy)]
struct TickInputs {
    fire: bool,
    cycle_target: bool,
    cycle_missile_type: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    player: Entity,
    command_queue: VecDeque<PilotCommand>,
    reported_contacts: Vec<(Entity, Entity)>,
    despawn_buffer: Vec<Entity>,
    events: Vec<EngagementEvent>,
}

impl SimulationEngine {
    /// Create a new engine. An invalid config is logged, not fatal: the
    /// simulation runs and fire requests degrade to rejections.
    pub fn new(config: SimConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("invalid simulation config: {err}");
        }

        let mut world = World::new();
        let player = world_setup::spawn_shooter(
            &mut world,
            &config,
            DVec3::ZERO,
            DVec3::Z,
            DVec3::ZERO,
        );

        Self {
            world,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            player,
            command_queue: VecDeque::new(),
            reported_contacts: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create a new engine, rejecting an invalid config.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a pilot command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PilotCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PilotCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> HudSnapshot {
        let inputs = self.drain_commands();
        self.run_systems(inputs);
        self.time.advance(self.config.dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, self.player, &self.time, events)
    }

    /// Fire immediately, outside the tick's input handling.
    pub fn fire(&mut self) -> Result<Entity, FireRejection> {
        systems::fire_control::run(
            &mut self.world,
            self.player,
            &self.config.launch,
            &self.config.missiles,
            &mut self.events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The pilot's shooter entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's lock state.
    pub fn lock_state(&self) -> LockState {
        self.world
            .get::<&LockSession<Entity>>(self.player)
            .map(|s| s.state())
            .unwrap_or_default()
    }

    /// The player's current lock target.
    pub fn lock_target(&self) -> Option<Entity> {
        self.world
            .get::<&LockSession<Entity>>(self.player)
            .ok()
            .and_then(|s| s.target())
    }

    /// Rounds left in the player's magazine.
    pub fn magazine(&self) -> u32 {
        self.world
            .get::<&Launcher>(self.player)
            .map(|l| l.magazine)
            .unwrap_or(0)
    }

    /// Number of missiles currently in flight.
    pub fn missiles_in_flight(&self) -> usize {
        self.world.query::<&MissileState>().iter().count()
    }

    /// Whether `target` is still in the simulation.
    pub fn is_alive(&self, target: Entity) -> bool {
        systems::directory::is_live(&self.world, target)
    }

    /// Overwrite the player's kinematic state from the external flight model.
    pub fn set_shooter_kinematics(&mut self, position: DVec3, forward: DVec3, velocity: DVec3) {
        let _ = self.world.insert(
            self.player,
            (
                Position(position),
                Orientation::looking_along(forward),
                Velocity(velocity),
            ),
        );
    }

    /// Add a target body. `velocity: None` makes it stationary.
    pub fn spawn_target(
        &mut self,
        name: impl Into<String>,
        class: TargetClass,
        position: DVec3,
        velocity: Option<DVec3>,
    ) -> Entity {
        world_setup::spawn_target(&mut self.world, name, class, position, velocity)
    }

    /// Add a solid non-target body.
    pub fn spawn_obstacle(&mut self, position: DVec3, radius: f64) -> Entity {
        world_setup::spawn_obstacle(&mut self.world, position, radius)
    }

    /// Scatter `count` moving aircraft ahead of the player using the seeded RNG.
    pub fn spawn_target_field(&mut self, count: usize, min_range: f64, max_range: f64) -> Vec<Entity> {
        let origin = self
            .world
            .get::<&Position>(self.player)
            .map(|p| p.0)
            .unwrap_or_default();
        world_setup::spawn_target_field(
            &mut self.world,
            &mut self.rng,
            origin,
            count,
            min_range,
            max_range,
        )
    }

    /// Overwrite a target's kinematic state. Returns `false` if it is gone.
    pub fn set_target_kinematics(
        &mut self,
        target: Entity,
        position: DVec3,
        velocity: Option<DVec3>,
    ) -> bool {
        if !self.is_alive(target) {
            return false;
        }
        let _ = self.world.insert_one(target, Position(position));
        match velocity {
            Some(v) => {
                let _ = self.world.insert_one(target, Velocity(v));
            }
            None => {
                let _ = self.world.remove_one::<Velocity>(target);
            }
        }
        true
    }

    /// Remove a target from the simulation. Returns `false` if already gone.
    pub fn remove_target(&mut self, target: Entity) -> bool {
        if self.world.get::<&Target>(target).is_err() {
            return false;
        }
        self.world.despawn(target).is_ok()
    }

    /// Report a physical contact from an external physics layer. Processed
    /// during the next tick's collision pass.
    pub fn report_contact(&mut self, missile: Entity, body: Entity) {
        self.reported_contacts.push((missile, body));
    }

    /// Mutable world access for tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn drain_commands(&mut self) -> TickInputs {
        let mut inputs = TickInputs::default();
        for command in self.command_queue.drain(..) {
            match command {
                PilotCommand::FireRequested => inputs.fire = true,
                PilotCommand::CycleTargetRequested => inputs.cycle_target = true,
                PilotCommand::CycleMissileTypeRequested => inputs.cycle_missile_type = true,
            }
        }
        inputs
    }

    /// Run all systems in order.
    fn run_systems(&mut self, inputs: TickInputs) {
        let dt = self.config.dt;

        // 1. Weapon selection
        if inputs.cycle_missile_type {
            self.cycle_missile_type();
        }
        // 2. Target directory + lock sessions
        systems::lock::run(
            &mut self.world,
            &self.config.lock.target_classes,
            dt,
            inputs.cycle_target.then_some(self.player),
            &mut self.events,
        );
        // 3. Launch authority
        if inputs.fire {
            let _ = self.fire();
        }
        // 4. Missile flight (propulsion, guidance, proximity, lifetime)
        systems::missile_flight::run(&mut self.world, dt, &mut self.events);
        // 5. Contact fusing
        systems::collision::run(
            &mut self.world,
            dt,
            &mut self.reported_contacts,
            &mut self.events,
        );
        // 6. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 7. Cleanup (expired effects)
        systems::cleanup::run(&mut self.world, dt, &mut self.despawn_buffer);
    }

    fn cycle_missile_type(&mut self) {
        if let Ok(mut launcher) = self.world.get::<&mut Launcher>(self.player) {
            launcher.missile_type = launcher.missile_type.next();
            log::debug!("missile type -> {:?}", launcher.missile_type);
            self.events.push(EngagementEvent::MissileTypeChanged {
                missile_type: launcher.missile_type,
            });
        }
    }
}
