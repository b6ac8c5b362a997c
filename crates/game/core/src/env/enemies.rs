use crate::action::GlobalEffect;
use crate::state::{EnemyId, SkillId};

/// Enemy template spawned into encounters.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyConfig {
    pub id: EnemyId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub health: f64,
    pub mana: f64,
    pub skills: Vec<SkillId>,
    /// Applied once when this enemy is defeated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub completion_effects: Vec<GlobalEffect>,
}

impl EnemyConfig {
    pub fn new(id: impl Into<EnemyId>, health: f64, mana: f64, skills: Vec<SkillId>) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            health,
            mana,
            skills,
            ..Self::default()
        }
    }
}
