//! Core types and definitions for the FOXTWO engagement simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, HUD snapshots, events, configuration and constants.
//! It has no dependency on the ECS or any presentation layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
