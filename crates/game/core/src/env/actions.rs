use crate::action::{GlobalEffect, Prerequisite, UnitEffectConfig};
use crate::state::{ActionId, CategoryId};

/// Static definition of a player action.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionConfig {
    pub id: ActionId,
    pub name: String,
    pub category: CategoryId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flavor_text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_effects: Vec<GlobalEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_effects: Vec<UnitEffectConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prerequisites: Vec<Prerequisite>,
    /// Upper bound on successful executions, unlimited when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_executions: Option<u32>,
}

impl ActionConfig {
    pub fn new(id: impl Into<ActionId>, category: impl Into<CategoryId>) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_global_effect(mut self, effect: GlobalEffect) -> Self {
        self.global_effects.push(effect);
        self
    }

    pub fn with_unit_effect(mut self, effect: UnitEffectConfig) -> Self {
        self.unit_effects.push(effect);
        self
    }

    pub fn with_prerequisite(mut self, prerequisite: Prerequisite) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }

    pub fn with_max_executions(mut self, max: u32) -> Self {
        self.max_executions = Some(max);
        self
    }

    /// True once `executions` reached the configured cap.
    pub fn is_exhausted(&self, executions: u32) -> bool {
        self.max_executions.is_some_and(|max| executions >= max)
    }
}
