//! Engagement simulation for FOXTWO.
//!
//! Owns the hecs ECS world, runs the lock, launch and missile flight
//! systems at a fixed tick rate, and produces HudSnapshots for the pilot.

pub mod engine;
pub mod guidance;
pub mod missile;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use foxtwo_core as core;
