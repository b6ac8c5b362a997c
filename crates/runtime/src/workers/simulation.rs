//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], runs them through
//! [`game_core::GameEngine`], drives the active encounter on a fixed timer and
//! publishes events to the [`EventBus`].

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use game_core::{
    ActionId, ActionOutcome, ConfigRegistry, EncounterId, GameEngine, GameState, Theme,
    TickOutcome,
};

use crate::api::{Result, RuntimeError};
use crate::events::{ActionEvent, EncounterEvent, Event, EventBus, LogEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    DoAction {
        action: ActionId,
        reply: oneshot::Sender<Result<ActionOutcome>>,
    },
    ComputeVisibility {
        id: String,
        reply: oneshot::Sender<bool>,
    },
    ComputeEnabled {
        id: String,
        reply: oneshot::Sender<bool>,
    },
    AddLog {
        message: String,
        reply: oneshot::Sender<()>,
    },
    SetTheme {
        theme: Theme,
        reply: oneshot::Sender<()>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Advance the active encounter by an explicit number of seconds.
    Tick {
        delta: f64,
        reply: oneshot::Sender<TickOutcome>,
    },
}

/// Background task that processes gameplay commands and encounter ticks.
pub struct SimulationWorker {
    state: GameState,
    registry: ConfigRegistry,
    rng: StdRng,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    tick_interval: Duration,
    /// Log entries already published.
    log_cursor: usize,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        registry: ConfigRegistry,
        rng: StdRng,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        tick_interval: Duration,
    ) -> Self {
        info!(
            resources = state.resources.len(),
            actions = registry.actions().len(),
            tick_ms = tick_interval.as_millis() as u64,
            "SimulationWorker initialized"
        );

        let log_cursor = state.log.len();
        Self {
            state,
            registry,
            rng,
            command_rx,
            event_bus,
            tick_interval,
            log_cursor,
        }
    }

    /// Main worker loop.
    ///
    /// Exits once every [`crate::RuntimeHandle`] has been dropped.
    pub async fn run(mut self) {
        let mut ticker = time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_tick = Instant::now();

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                now = ticker.tick() => {
                    let elapsed = now.duration_since(last_tick).as_secs_f64();
                    last_tick = now;
                    if self.state.in_encounter() {
                        self.advance(elapsed);
                    }
                }
            }
        }

        debug!("SimulationWorker stopped");
    }

    fn engine(&mut self) -> GameEngine<'_, StdRng> {
        GameEngine::new(&mut self.state, &self.registry, &mut self.rng)
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::DoAction { action, reply } => {
                let result = self.handle_action(action);
                if reply.send(result).is_err() {
                    debug!("DoAction reply channel closed (caller dropped)");
                }
            }
            Command::ComputeVisibility { id, reply } => {
                let visible = self.engine().compute_visibility(&id);
                if reply.send(visible).is_err() {
                    debug!("ComputeVisibility reply channel closed (caller dropped)");
                }
            }
            Command::ComputeEnabled { id, reply } => {
                let enabled = self.engine().compute_enabled(&id);
                if reply.send(enabled).is_err() {
                    debug!("ComputeEnabled reply channel closed (caller dropped)");
                }
            }
            Command::AddLog { message, reply } => {
                self.engine().add_log(message);
                self.publish_log();
                if reply.send(()).is_err() {
                    debug!("AddLog reply channel closed (caller dropped)");
                }
            }
            Command::SetTheme { theme, reply } => {
                self.engine().set_theme(theme);
                if reply.send(()).is_err() {
                    debug!("SetTheme reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Tick { delta, reply } => {
                let outcome = self.advance(delta);
                if reply.send(outcome).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_action(&mut self, action: ActionId) -> Result<ActionOutcome> {
        let before = self.active_encounter();
        let outcome = self
            .engine()
            .do_action_by_id(action.as_str())
            .ok_or_else(|| RuntimeError::UnknownAction(action.clone()))?;

        debug!(%action, %outcome, "action handled");
        self.event_bus
            .publish(Event::Action(ActionEvent { action, outcome }));
        self.publish_encounter_start(before, false);
        self.publish_log();

        Ok(outcome)
    }

    fn advance(&mut self, delta: f64) -> TickOutcome {
        let before = self.active_encounter();
        let outcome = self.engine().run_encounter(delta);

        if let Some(event) = EncounterEvent::from_tick(&outcome) {
            info!(?event, "encounter resolved");
            self.event_bus.publish(Event::Encounter(event));
        }
        self.publish_encounter_start(before, outcome.is_resolved());
        self.publish_log();

        outcome
    }

    fn active_encounter(&self) -> Option<EncounterId> {
        self.state
            .encounter
            .as_ref()
            .map(|encounter| encounter.encounter.clone())
    }

    /// Announces an encounter installed since `before`, including one chained
    /// by the effects of an encounter that just resolved.
    fn publish_encounter_start(&self, before: Option<EncounterId>, resolved: bool) {
        let Some(current) = self.active_encounter() else {
            return;
        };
        if resolved || before.as_ref() != Some(&current) {
            self.event_bus.publish(Event::Encounter(EncounterEvent::Started {
                encounter: current,
            }));
        }
    }

    fn publish_log(&mut self) {
        let entries = self.state.log.since(self.log_cursor);
        if entries.is_empty() {
            return;
        }

        let event = LogEvent {
            offset: self.log_cursor,
            entries: entries.to_vec(),
        };
        self.log_cursor = self.state.log.len();
        self.event_bus.publish(Event::Log(event));
    }
}
