//! Cloneable façade for issuing commands to the simulation worker.
//!
//! Every method enqueues a command and awaits the worker's reply, so calls
//! from several clients are applied one at a time in arrival order.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{ActionId, ActionOutcome, GameState, Theme, TickOutcome};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Subscribe to events on a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Performs the action with the given id.
    ///
    /// A refused action is a successful call with a non-executed outcome.
    pub async fn do_action(&self, action: impl Into<ActionId>) -> Result<ActionOutcome> {
        let action = action.into();
        self.request(|reply| Command::DoAction { action, reply })
            .await?
    }

    /// Re-evaluates visibility of an action or resource, caching it for actions.
    pub async fn compute_visibility(&self, id: impl Into<String>) -> Result<bool> {
        let id = id.into();
        self.request(|reply| Command::ComputeVisibility { id, reply })
            .await
    }

    pub async fn compute_enabled(&self, id: impl Into<String>) -> Result<bool> {
        let id = id.into();
        self.request(|reply| Command::ComputeEnabled { id, reply })
            .await
    }

    pub async fn add_log(&self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        self.request(|reply| Command::AddLog { message, reply })
            .await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.request(|reply| Command::SetTheme { theme, reply }).await
    }

    /// Snapshot of the current game state.
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Advances the active encounter by `delta` seconds, outside the timer.
    pub async fn tick(&self, delta: f64) -> Result<TickOutcome> {
        self.request(|reply| Command::Tick { delta, reply }).await
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
