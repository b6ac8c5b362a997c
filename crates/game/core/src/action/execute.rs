//! Player action execution.

use rand::Rng;
use tracing::debug;

use super::effect::EffectContext;
use crate::env::ActionConfig;
use crate::state::GameState;

/// Result of attempting a player action.
///
/// Only [`ActionOutcome::Executed`] changes state beyond the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionOutcome {
    Executed,
    /// An encounter is running; actions are locked until it resolves.
    EncounterActive,
    /// The action reached its execution cap.
    Exhausted,
    PrerequisitesUnmet,
}

impl ActionOutcome {
    pub fn is_executed(self) -> bool {
        self == Self::Executed
    }
}

/// Runs `action`: checks the encounter lock, the cap and the prerequisites,
/// bumps the execution counter, then applies global effects followed by unit
/// effects. Consequences (including a started encounter) are visible on return.
pub fn execute_action<R: Rng>(ctx: &mut EffectContext<'_, R>, action: &ActionConfig) -> ActionOutcome {
    if ctx.state.in_encounter() {
        ctx.state
            .log
            .push("Cannot perform another action while in an encounter.");
        debug!(action = %action.id, "action rejected: encounter active");
        return ActionOutcome::EncounterActive;
    }

    let executions = ctx
        .state
        .actions
        .entry(action.id.clone())
        .or_default()
        .executions;

    if action.is_exhausted(executions) {
        debug!(action = %action.id, executions, "action rejected: execution cap reached");
        return ActionOutcome::Exhausted;
    }
    if !prerequisites_met(ctx.state, action) {
        debug!(action = %action.id, "action rejected: prerequisites unmet");
        return ActionOutcome::PrerequisitesUnmet;
    }

    if let Some(record) = ctx.state.actions.get_mut(&action.id) {
        record.executions += 1;
    }
    debug!(action = %action.id, executions = executions + 1, "action executed");

    ctx.apply_global_effects(&action.global_effects);
    ctx.apply_unit_configs(&action.unit_effects);
    ActionOutcome::Executed
}

fn prerequisites_met(state: &GameState, action: &ActionConfig) -> bool {
    action
        .prerequisites
        .iter()
        .all(|prerequisite| prerequisite.is_satisfied(state))
}
