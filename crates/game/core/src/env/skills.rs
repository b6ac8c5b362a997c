use crate::action::{GlobalEffect, UnitEffectConfig};
use crate::state::{ResourceId, SkillId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillKind {
    #[default]
    Active,
    Passive,
}

/// Resource spent when a skill fires.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCost {
    pub resource: ResourceId,
    pub amount: f64,
}

/// Combat skill usable by party members and enemies.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillConfig {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: SkillKind,
    /// Accumulated delay required before the skill fires.
    pub delay: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub costs: Vec<SkillCost>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_effects: Vec<GlobalEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_effects: Vec<UnitEffectConfig>,
}

impl SkillConfig {
    pub fn new(id: impl Into<SkillId>, delay: f64, unit_effects: Vec<UnitEffectConfig>) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            delay,
            unit_effects,
            ..Self::default()
        }
    }
}
