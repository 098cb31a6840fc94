//! Seeker logic for FOXTWO.
//!
//! Implements the lock session state machine and target selection scoring.
//! Generic over the target handle type, so it carries no ECS dependency.
//!
//! One session models one engagement per shooter. Simultaneous multi-target
//! lock would keep a collection of sessions keyed by target handle, each
//! running this same state machine.

pub mod selection;
pub mod session;

pub use foxtwo_core as core;
pub use selection::Contact;
pub use foxtwo_core::enums::BreakReason;
pub use session::{LockEvent, LockParams, LockSession};
