//! Enabled and visible queries for actions and resources.
//!
//! Both are pure reads over the state and the registry. Persisting the sticky
//! visibility flag is the engine's job (`GameEngine::compute_visibility`).

use crate::env::ConfigRegistry;
use crate::state::GameState;

/// Whether `id` may currently run.
///
/// Ids without a prerequisite list (resources, unknown ids) pass vacuously.
/// Actions additionally turn disabled once their execution cap is reached.
pub fn is_enabled(state: &GameState, registry: &ConfigRegistry, id: &str) -> bool {
    let Some(action) = registry.action(id) else {
        return true;
    };
    if action.is_exhausted(state.executions(id)) {
        return false;
    }
    action
        .prerequisites
        .iter()
        .all(|prerequisite| prerequisite.is_satisfied(state))
}

/// Whether `id` should be shown: previously visible, or enabled right now.
///
/// Ids that are neither a registered resource nor a registered action are
/// never visible.
pub fn is_visible(state: &GameState, registry: &ConfigRegistry, id: &str) -> bool {
    if registry.resource(id).is_some() {
        return state.resource(id).is_some_and(|resource| resource.visible)
            || is_enabled(state, registry, id);
    }
    if registry.action(id).is_some() {
        return state.action(id).is_some_and(|action| action.visible)
            || is_enabled(state, registry, id);
    }
    false
}
