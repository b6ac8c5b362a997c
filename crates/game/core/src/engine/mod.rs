//! Entry point for every state mutation.
//!
//! The [`GameEngine`] borrows the mutable [`GameState`], the read-only
//! [`ConfigRegistry`] and the random source for the duration of one call.
//! Player actions go through [`GameEngine::do_action`], encounters advance
//! through [`GameEngine::run_encounter`]. Neither returns an error: rejected
//! requests are reported as outcomes and leave the state untouched apart from
//! the game log.

mod combat;

pub use combat::TickOutcome;

use rand::Rng;
use tracing::{debug, warn};

use crate::action::{
    self, ActionOutcome, EffectContext, GlobalEffect, UnitEffect, UnitEffectConfig,
};
use crate::config::GameConfig;
use crate::env::{ActionConfig, ConfigRegistry, ResourceConfig};
use crate::state::{ActionState, GameState, Meter, PartyUnitState, ResourceState, Theme};

pub struct GameEngine<'a, R: Rng> {
    pub(crate) state: &'a mut GameState,
    pub(crate) registry: &'a ConfigRegistry,
    pub(crate) rng: &'a mut R,
}

impl<'a, R: Rng> GameEngine<'a, R> {
    pub fn new(state: &'a mut GameState, registry: &'a ConfigRegistry, rng: &'a mut R) -> Self {
        Self {
            state,
            registry,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn registry(&self) -> &'a ConfigRegistry {
        self.registry
    }

    fn context(&mut self) -> EffectContext<'_, R> {
        EffectContext::new(self.state, self.registry, self.rng)
    }

    /// Populates a fresh session: the main character from `config`, one
    /// resource and action record per registry entry, then initial visibility.
    ///
    /// Existing resource and action records are reset. The log and theme are kept.
    pub fn initialize(&mut self, config: &GameConfig) {
        let main = &config.main_character;
        for error in self
            .registry
            .validate_party_skills(main.id.as_str(), &main.skills)
        {
            warn!(%error, "main character loadout references missing content");
        }

        self.state.main_character = main.id.clone();
        self.state.party.insert(
            main.id.clone(),
            PartyUnitState {
                id: main.id.clone(),
                name: main.name.clone(),
                health: Meter::new(main.health, main.max_health),
                mana: Meter::new(main.mana, main.max_mana),
                skills: main.skills.clone(),
            },
        );
        self.state.active_party = vec![main.id.clone()];

        for resource in self.registry.resources().iter() {
            self.state.resources.insert(
                resource.id.clone(),
                ResourceState::new(resource.base_value, resource.base_max),
            );
        }
        for action in self.registry.actions().iter() {
            self.state
                .actions
                .insert(action.id.clone(), ActionState::default());
        }

        let registry = self.registry;
        let ids = registry
            .resources()
            .iter()
            .map(|resource| resource.id.as_str())
            .chain(registry.actions().iter().map(|action| action.id.as_str()));
        for id in ids {
            self.compute_visibility(id);
        }
        debug!(
            resources = registry.resources().len(),
            actions = registry.actions().len(),
            "session initialized"
        );
    }

    /// Evaluates visibility for `id` and persists the sticky flag on its record.
    pub fn compute_visibility(&mut self, id: &str) -> bool {
        let visible = action::is_visible(self.state, self.registry, id);
        if let Some(resource) = self.state.resources.get_mut(id) {
            resource.visible = visible;
        }
        if let Some(record) = self.state.actions.get_mut(id) {
            record.visible = visible;
        }
        visible
    }

    pub fn compute_enabled(&self, id: &str) -> bool {
        action::is_enabled(self.state, self.registry, id)
    }

    pub fn do_action(&mut self, action: &ActionConfig) -> ActionOutcome {
        action::execute_action(&mut self.context(), action)
    }

    /// Looks `id` up in the registry and runs it. `None` for unknown actions.
    pub fn do_action_by_id(&mut self, id: &str) -> Option<ActionOutcome> {
        let registry = self.registry;
        let Some(action) = registry.action(id) else {
            warn!(action = id, "do_action on unknown action");
            return None;
        };
        Some(self.do_action(action))
    }

    pub fn apply_global_effects(&mut self, effects: &[GlobalEffect]) {
        self.context().apply_global_effects(effects);
    }

    pub fn apply_unit_effects(&mut self, effects: &[UnitEffect]) {
        self.context().apply_unit_effects(effects);
    }

    /// Applies configured unit effects with implicit targeting.
    pub fn apply_unit_configs(&mut self, effects: &[UnitEffectConfig]) {
        self.context().apply_unit_configs(effects);
    }

    pub fn add_log(&mut self, message: impl Into<String>) {
        self.state.log.push(message);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
    }

    /// Registry actions currently visible, in registry order.
    pub fn visible_actions(&self) -> Vec<&'a ActionConfig> {
        let registry = self.registry;
        registry
            .actions()
            .iter()
            .filter(|config| action::is_visible(self.state, registry, config.id.as_str()))
            .collect()
    }

    /// Registry resources currently visible, in registry order.
    pub fn visible_resources(&self) -> Vec<&'a ResourceConfig> {
        let registry = self.registry;
        registry
            .resources()
            .iter()
            .filter(|config| action::is_visible(self.state, registry, config.id.as_str()))
            .collect()
    }
}
