use serde::{Deserialize, Serialize};

use game_core::{ActionId, ActionOutcome, EncounterId, TickOutcome};

/// Result of a player action request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub action: ActionId,
    pub outcome: ActionOutcome,
}

/// Encounter lifecycle transitions observed by the worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncounterEvent {
    Started { encounter: EncounterId },
    Completed { encounter: EncounterId },
    Failed { encounter: EncounterId },
}

impl EncounterEvent {
    /// Lifecycle event for a resolving tick, if it resolved anything.
    pub fn from_tick(outcome: &TickOutcome) -> Option<Self> {
        match outcome {
            TickOutcome::Completed { encounter } => Some(Self::Completed {
                encounter: encounter.clone(),
            }),
            TickOutcome::Failed { encounter } => Some(Self::Failed {
                encounter: encounter.clone(),
            }),
            _ => None,
        }
    }
}

/// Log lines appended since the previous log event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Position of the first entry in the full game log.
    pub offset: usize,
    pub entries: Vec<String>,
}
