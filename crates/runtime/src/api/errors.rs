//! Error types surfaced by the runtime API.
//!
//! Game rules never fail here: refused actions come back as
//! [`game_core::ActionOutcome`] values. These errors cover worker
//! coordination and session setup.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ActionId, RegistryError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("unknown action {0}")]
    UnknownAction(ActionId),

    #[error("failed to load bundled content: {0:#}")]
    Content(anyhow::Error),

    #[error("content failed validation with {} problem(s)", .0.len())]
    InvalidContent(Vec<RegistryError>),
}
