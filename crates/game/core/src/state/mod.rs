//! Authoritative game state representation.
//!
//! This module owns the data structures describing resources, action history,
//! inventory, the party and the active encounter. Presentation layers clone or
//! query this state but mutate it exclusively through the engine.
pub mod types;

use std::collections::{BTreeMap, HashMap};

pub use types::{
    ActionId, ActionState, AllyCombatState, CategoryId, EncounterId, EncounterState,
    EnemyCombatState, EnemyId, EnemyRoster, EnemySlot, GameLog, ItemId, ItemState, Meter,
    PartyUnitId, PartyUnitState, ResourceId, ResourceState, SkillId, Theme, UnitStat,
};

use crate::config::GameConfig;

/// Canonical snapshot of the simulation state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub resources: HashMap<ResourceId, ResourceState>,
    pub actions: HashMap<ActionId, ActionState>,
    pub items: HashMap<ItemId, ItemState>,
    pub party: BTreeMap<PartyUnitId, PartyUnitState>,
    /// Party members taking part in encounters, in join order.
    pub active_party: Vec<PartyUnitId>,
    /// At most one encounter runs at a time.
    pub encounter: Option<EncounterState>,
    pub log: GameLog,
    pub theme: Theme,
    pub(crate) main_character: PartyUnitId,
}

impl GameState {
    /// Creates an empty state whose main character id follows `config`.
    ///
    /// The main character itself is only created by `GameEngine::initialize`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            resources: HashMap::new(),
            actions: HashMap::new(),
            items: HashMap::new(),
            party: BTreeMap::new(),
            active_party: Vec::new(),
            encounter: None,
            log: GameLog::new(),
            theme: config.default_theme,
            main_character: config.main_character.id.clone(),
        }
    }

    pub fn main_character_id(&self) -> &PartyUnitId {
        &self.main_character
    }

    pub fn main_character(&self) -> Option<&PartyUnitState> {
        self.party.get(&self.main_character)
    }

    pub fn main_character_mut(&mut self) -> Option<&mut PartyUnitState> {
        self.party.get_mut(&self.main_character)
    }

    pub fn resource(&self, id: &str) -> Option<&ResourceState> {
        self.resources.get(id)
    }

    pub fn action(&self, id: &str) -> Option<&ActionState> {
        self.actions.get(id)
    }

    /// Executions recorded for an action, zero if it never ran.
    pub fn executions(&self, id: &str) -> u32 {
        self.actions.get(id).map_or(0, |action| action.executions)
    }

    /// Inventory amount of an item, zero if never acquired.
    pub fn item_amount(&self, id: &str) -> i64 {
        self.items.get(id).map_or(0, |item| item.amount)
    }

    pub fn in_encounter(&self) -> bool {
        self.encounter.is_some()
    }

    /// True when every active party member is out of health.
    ///
    /// Members missing from the party roster are not counted.
    pub fn party_defeated(&self) -> bool {
        self.active_party
            .iter()
            .filter_map(|id| self.party.get(id))
            .all(PartyUnitState::is_defeated)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
