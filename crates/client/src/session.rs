//! Scripted play through a [`RuntimeHandle`].

use std::time::Duration;

use anyhow::{Context, Result, bail};
use game_core::{ActionId, ActionOutcome};
use runtime::{EncounterEvent, Event, RuntimeHandle, Topic};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

/// Ordered list of actions to perform.
#[derive(Clone, Debug, Default)]
pub struct Script {
    pub actions: Vec<ActionId>,
    /// Longest wait for an encounter to resolve.
    pub encounter_timeout: Duration,
}

impl Script {
    pub fn new(
        actions: impl IntoIterator<Item = impl Into<ActionId>>,
        encounter_timeout: Duration,
    ) -> Self {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            encounter_timeout,
        }
    }
}

/// What one scripted action did.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub action: ActionId,
    pub outcome: ActionOutcome,
    /// Final resolution of an encounter the action started.
    pub encounter: Option<EncounterEvent>,
}

/// Performs every action of `script` in order.
///
/// An action that starts an encounter blocks the script until the runtime's
/// timer resolves it.
pub async fn run_script(handle: &RuntimeHandle, script: &Script) -> Result<Vec<StepReport>> {
    let mut encounters = handle.subscribe(Topic::Encounter);
    let mut reports = Vec::with_capacity(script.actions.len());

    for action in &script.actions {
        let outcome = handle
            .do_action(action.clone())
            .await
            .with_context(|| format!("performing {action}"))?;
        info!(%action, %outcome, "scripted action");

        let encounter = if handle.query_state().await?.in_encounter() {
            let resolution = tokio::time::timeout(
                script.encounter_timeout,
                await_resolution(handle, &mut encounters),
            )
            .await
            .with_context(|| format!("encounter started by {action} did not resolve"))??;
            Some(resolution)
        } else {
            None
        };

        reports.push(StepReport {
            action: action.clone(),
            outcome,
            encounter,
        });
    }

    Ok(reports)
}

/// Waits until no encounter is active and returns the last resolution seen.
async fn await_resolution(
    handle: &RuntimeHandle,
    events: &mut broadcast::Receiver<Event>,
) -> Result<EncounterEvent> {
    loop {
        match events.recv().await {
            Ok(Event::Encounter(EncounterEvent::Started { .. })) => {}
            Ok(Event::Encounter(resolved)) => {
                if !handle.query_state().await?.in_encounter() {
                    return Ok(resolved);
                }
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "encounter events lagged");
                if !handle.query_state().await?.in_encounter() {
                    bail!("encounter resolution was dropped from the event stream");
                }
            }
            Err(RecvError::Closed) => bail!("runtime event bus closed"),
        }
    }
}
