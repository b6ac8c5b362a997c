//! Async runtime hosting the game simulation.
//!
//! The runtime owns the only [`game_core::GameState`] of a session inside a
//! background worker. Clients talk to it through [`RuntimeHandle`], which
//! turns every call into a command, and observe progress on the topic-based
//! [`EventBus`]. While an encounter is active the worker advances it on a
//! fixed tick interval using the measured elapsed time.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event routing
//! - `workers` keeps the simulation task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{ActionEvent, EncounterEvent, Event, EventBus, LogEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
