//! Ephemeral combat state, alive only while an encounter runs.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::common::{EncounterId, EnemyId, EnemySlot, Meter, PartyUnitId, SkillId};
use super::party::UnitStat;
use crate::config::GameConfig;

/// Roster of enemies currently on the field.
pub type EnemyRoster = ArrayVec<EnemyCombatState, { GameConfig::MAX_ACTIVE_ENEMIES }>;

/// Per-ally scheduling state inside an encounter.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllyCombatState {
    pub skill: Option<SkillId>,
    pub delay: f64,
}

/// A spawned enemy with its own stats and scheduling state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCombatState {
    pub enemy: EnemyId,
    pub health: Meter,
    pub mana: Meter,
    pub skill: Option<SkillId>,
    pub delay: f64,
}

impl EnemyCombatState {
    /// Fresh enemy at full health and mana with no accumulated delay.
    pub fn spawn(enemy: EnemyId, health: f64, mana: f64) -> Self {
        Self {
            enemy,
            health: Meter::full(health),
            mana: Meter::full(mana),
            skill: None,
            delay: 0.0,
        }
    }

    pub fn stat_mut(&mut self, stat: UnitStat) -> &mut Meter {
        match stat {
            UnitStat::Health => &mut self.health,
            UnitStat::Mana => &mut self.mana,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }
}

/// The single active encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    pub encounter: EncounterId,
    /// Number of enemies defeated so far.
    pub current_enemy_index: u32,
    pub allies: BTreeMap<PartyUnitId, AllyCombatState>,
    pub enemies: EnemyRoster,
}

impl EncounterState {
    /// Creates an encounter with one idle ally entry per party member and no enemies.
    pub fn new<'a>(
        encounter: EncounterId,
        party: impl IntoIterator<Item = &'a PartyUnitId>,
    ) -> Self {
        Self {
            encounter,
            current_enemy_index: 0,
            allies: party
                .into_iter()
                .map(|id| (id.clone(), AllyCombatState::default()))
                .collect(),
            enemies: EnemyRoster::new(),
        }
    }

    pub fn ally_ids(&self) -> Vec<PartyUnitId> {
        self.allies.keys().cloned().collect()
    }

    pub fn enemy_slots(&self) -> Vec<EnemySlot> {
        (0..self.enemies.len()).collect()
    }
}
