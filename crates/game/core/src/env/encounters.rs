use crate::action::{GlobalEffect, UnitEffectConfig};
use crate::state::{CategoryId, EncounterId, EnemyId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncounterKind {
    #[default]
    Combat,
    Other,
}

/// How the next enemy is drawn from the encounter's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EnemyOrder {
    /// Uniform draw from the pool on every spawn.
    #[default]
    Random,
    /// Pool entry at the index of enemies defeated so far.
    Sequential,
}

/// Static definition of an encounter.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    pub id: EncounterId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: EncounterKind,
    pub category: CategoryId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: EnemyOrder,
    /// Enemies to defeat before the encounter completes.
    pub number_of_enemies: u32,
    pub enemies: Vec<EnemyId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completion_message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_completion_effects: Vec<GlobalEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_completion_effects: Vec<UnitEffectConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub failure_message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_failure_effects: Vec<GlobalEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_failure_effects: Vec<UnitEffectConfig>,
}

impl EncounterConfig {
    pub fn new(
        id: impl Into<EncounterId>,
        order: EnemyOrder,
        enemies: Vec<EnemyId>,
        number_of_enemies: u32,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            order,
            enemies,
            number_of_enemies,
            ..Self::default()
        }
    }

    /// True when a completion effect chains into another encounter.
    pub fn chains_encounter(&self) -> bool {
        self.global_completion_effects
            .iter()
            .any(|effect| matches!(effect, GlobalEffect::StartEncounter { .. }))
    }
}
