//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command and event
//! channels, and exposes a builder-based API for clients to drive a session.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{ConfigRegistry, GameConfig, GameEngine, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Period of the encounter timer.
    pub tick_interval: Duration,
    /// Seed for the session random source; entropy when absent.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    /// Defaults overridden by `RUNTIME_TICK_MS`, `RUNTIME_SEED`,
    /// `RUNTIME_COMMAND_BUFFER` and `RUNTIME_EVENT_BUFFER` when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            game_config: defaults.game_config,
            tick_interval: read_env::<u64>("RUNTIME_TICK_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_interval),
            seed: read_env("RUNTIME_SEED").or(defaults.seed),
            event_buffer_size: read_env("RUNTIME_EVENT_BUFFER")
                .unwrap_or(defaults.event_buffer_size),
            command_buffer_size: read_env("RUNTIME_COMMAND_BUFFER")
                .unwrap_or(defaults.command_buffer_size),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            tick_interval: Duration::from_millis(50),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates the game simulation.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker, which stops once every outstanding handle clone
    /// has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    registry: Option<ConfigRegistry>,
    state: Option<GameState>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            registry: None,
            state: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Content to run; the bundled content when not set.
    pub fn registry(mut self, registry: ConfigRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Resume from an existing state instead of initializing a new session.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => game_content::default_registry().map_err(RuntimeError::Content)?,
        };
        let problems = registry.validate();
        if !problems.is_empty() {
            return Err(RuntimeError::InvalidContent(problems));
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let state = match self.state {
            Some(state) => state,
            None => {
                let game_config = &self.config.game_config;
                let mut state = GameState::new(game_config);
                GameEngine::new(&mut state, &registry, &mut rng).initialize(game_config);
                state
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        info!(
            seed = ?self.config.seed,
            tick_ms = self.config.tick_interval.as_millis() as u64,
            "starting runtime"
        );
        let sim_worker = SimulationWorker::new(
            state,
            registry,
            rng,
            command_rx,
            event_bus,
            self.config.tick_interval,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
