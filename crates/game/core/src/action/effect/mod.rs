//! Effects that actions, skills and encounter outcomes apply to the state.
//!
//! Global effects act on the world (resources, items, the encounter slot).
//! Unit effects act on combatants' stats and carry resolved targets. Both are
//! applied through an [`EffectContext`] borrowing the mutable state, the
//! read-only registry and the random source.

mod global;
mod unit;

pub use global::{GlobalEffect, ValueTarget};
pub use unit::{UnitEffect, UnitEffectConfig, UnitEffectKind};

use rand::Rng;

use crate::env::ConfigRegistry;
use crate::state::GameState;

/// Everything an effect may read or mutate while applying.
pub struct EffectContext<'a, R: Rng> {
    pub state: &'a mut GameState,
    pub registry: &'a ConfigRegistry,
    pub rng: &'a mut R,
}

impl<'a, R: Rng> EffectContext<'a, R> {
    pub fn new(state: &'a mut GameState, registry: &'a ConfigRegistry, rng: &'a mut R) -> Self {
        Self {
            state,
            registry,
            rng,
        }
    }

    /// Applies global effects in list order.
    pub fn apply_global_effects<'e>(&mut self, effects: impl IntoIterator<Item = &'e GlobalEffect>) {
        for effect in effects {
            effect.apply(self);
        }
    }

    /// Applies unit effects in list order.
    pub fn apply_unit_effects<'e>(&mut self, effects: impl IntoIterator<Item = &'e UnitEffect>) {
        for effect in effects {
            effect.apply(self);
        }
    }

    /// Applies configured unit effects with implicit targeting.
    pub fn apply_unit_configs<'e>(
        &mut self,
        configs: impl IntoIterator<Item = &'e UnitEffectConfig>,
    ) {
        for config in configs {
            UnitEffect::implicit(config.clone()).apply(self);
        }
    }
}
