//! Immutable, id-indexed tables of static game content.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use super::error::{ConfigKind, RegistryError};
use super::{ActionConfig, EncounterConfig, EnemyConfig, EnemyOrder, ItemConfig, ResourceConfig};
use super::SkillConfig;
use crate::action::{GlobalEffect, Prerequisite, ValueTarget};
use crate::state::{ActionId, EncounterId, EnemyId, ItemId, ResourceId, SkillId};

/// A config entry addressable by id.
pub trait Keyed {
    type Id: Clone + Eq + Hash + Borrow<str> + ToString;
    const KIND: ConfigKind;

    fn id(&self) -> &Self::Id;
}

macro_rules! keyed {
    ($config:ty, $id:ty, $kind:expr) => {
        impl Keyed for $config {
            type Id = $id;
            const KIND: ConfigKind = $kind;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }
    };
}

keyed!(ResourceConfig, ResourceId, ConfigKind::Resource);
keyed!(ActionConfig, ActionId, ConfigKind::Action);
keyed!(EncounterConfig, EncounterId, ConfigKind::Encounter);
keyed!(EnemyConfig, EnemyId, ConfigKind::Enemy);
keyed!(ItemConfig, ItemId, ConfigKind::Item);
keyed!(SkillConfig, SkillId, ConfigKind::Skill);

/// Insertion-ordered table with id lookup.
#[derive(Clone, Debug)]
pub struct Table<T: Keyed> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Keyed> Table<T> {
    fn from_entries(entries: Vec<T>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id().clone(), position).is_some() {
                return Err(RegistryError::DuplicateId {
                    kind: T::KIND,
                    id: entry.id().to_string(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in the order they were supplied.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Keyed> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

/// All static content the engine reads from.
///
/// Built once at startup and never mutated afterwards. References between
/// tables are assumed to resolve; [`ConfigRegistry::validate`] checks that.
#[derive(Clone, Debug, Default)]
pub struct ConfigRegistry {
    resources: Table<ResourceConfig>,
    actions: Table<ActionConfig>,
    encounters: Table<EncounterConfig>,
    enemies: Table<EnemyConfig>,
    items: Table<ItemConfig>,
    skills: Table<SkillConfig>,
}

impl ConfigRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn resource(&self, id: &str) -> Option<&ResourceConfig> {
        self.resources.get(id)
    }

    pub fn action(&self, id: &str) -> Option<&ActionConfig> {
        self.actions.get(id)
    }

    pub fn encounter(&self, id: &str) -> Option<&EncounterConfig> {
        self.encounters.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyConfig> {
        self.enemies.get(id)
    }

    pub fn item(&self, id: &str) -> Option<&ItemConfig> {
        self.items.get(id)
    }

    pub fn skill(&self, id: &str) -> Option<&SkillConfig> {
        self.skills.get(id)
    }

    pub fn resources(&self) -> &Table<ResourceConfig> {
        &self.resources
    }

    pub fn actions(&self) -> &Table<ActionConfig> {
        &self.actions
    }

    pub fn encounters(&self) -> &Table<EncounterConfig> {
        &self.encounters
    }

    pub fn enemies(&self) -> &Table<EnemyConfig> {
        &self.enemies
    }

    pub fn items(&self) -> &Table<ItemConfig> {
        &self.items
    }

    pub fn skills(&self) -> &Table<SkillConfig> {
        &self.skills
    }

    /// Checks cross-table references and combat data sanity.
    ///
    /// Returns every problem found; an empty vector means the content is consistent.
    pub fn validate(&self) -> Vec<RegistryError> {
        let mut errors = Vec::new();

        for action in self.actions.iter() {
            for prerequisite in &action.prerequisites {
                self.check_prerequisite(action, prerequisite, &mut errors);
            }
            self.check_effects(
                ConfigKind::Action,
                &action.id,
                &action.global_effects,
                &mut errors,
            );
        }

        for encounter in self.encounters.iter() {
            if encounter.enemies.is_empty() {
                errors.push(RegistryError::EmptyEnemyPool {
                    encounter: encounter.id.to_string(),
                });
            }
            if encounter.number_of_enemies == 0 {
                errors.push(RegistryError::NoEnemiesToDefeat {
                    encounter: encounter.id.to_string(),
                });
            }
            if encounter.order == EnemyOrder::Sequential
                && (encounter.number_of_enemies as usize) > encounter.enemies.len()
            {
                errors.push(RegistryError::SequentialPoolTooShort {
                    encounter: encounter.id.to_string(),
                    pool: encounter.enemies.len(),
                    required: encounter.number_of_enemies,
                });
            }
            for enemy in &encounter.enemies {
                if !self.enemies.contains(enemy.as_str()) {
                    errors.push(RegistryError::unknown(
                        ConfigKind::Encounter,
                        &encounter.id,
                        ConfigKind::Enemy,
                        enemy,
                    ));
                }
            }
            for effects in [
                &encounter.global_completion_effects,
                &encounter.global_failure_effects,
            ] {
                self.check_effects(ConfigKind::Encounter, &encounter.id, effects, &mut errors);
            }
        }

        for enemy in self.enemies.iter() {
            if enemy.skills.is_empty() {
                errors.push(RegistryError::EmptySkillList {
                    kind: ConfigKind::Enemy,
                    id: enemy.id.to_string(),
                });
            }
            for skill in &enemy.skills {
                if !self.skills.contains(skill.as_str()) {
                    errors.push(RegistryError::unknown(
                        ConfigKind::Enemy,
                        &enemy.id,
                        ConfigKind::Skill,
                        skill,
                    ));
                }
            }
            self.check_effects(
                ConfigKind::Enemy,
                &enemy.id,
                &enemy.completion_effects,
                &mut errors,
            );
        }

        for skill in self.skills.iter() {
            if skill.delay < 0.0 {
                errors.push(RegistryError::NegativeDelay {
                    skill: skill.id.to_string(),
                    delay: skill.delay,
                });
            }
            self.check_effects(
                ConfigKind::Skill,
                &skill.id,
                &skill.global_effects,
                &mut errors,
            );
        }

        errors
    }

    /// Checks that every skill in `skills` exists. Used for party loadouts.
    pub fn validate_party_skills<'s>(
        &self,
        unit: &str,
        skills: impl IntoIterator<Item = &'s SkillId>,
    ) -> Vec<RegistryError> {
        let mut errors = Vec::new();
        let mut known = 0;
        for skill in skills {
            known += 1;
            if !self.skills.contains(skill.as_str()) {
                errors.push(RegistryError::unknown(
                    ConfigKind::PartyUnit,
                    unit,
                    ConfigKind::Skill,
                    skill,
                ));
            }
        }
        if known == 0 {
            errors.push(RegistryError::EmptySkillList {
                kind: ConfigKind::PartyUnit,
                id: unit.to_owned(),
            });
        }
        errors
    }

    fn check_prerequisite(
        &self,
        action: &ActionConfig,
        prerequisite: &Prerequisite,
        errors: &mut Vec<RegistryError>,
    ) {
        if let Some(resource) = &prerequisite.resource
            && !self.resources.contains(resource.resource.as_str())
        {
            errors.push(RegistryError::unknown(
                ConfigKind::Action,
                &action.id,
                ConfigKind::Resource,
                &resource.resource,
            ));
        }
        if let Some(previous) = &prerequisite.action
            && !self.actions.contains(previous.action.as_str())
        {
            errors.push(RegistryError::unknown(
                ConfigKind::Action,
                &action.id,
                ConfigKind::Action,
                &previous.action,
            ));
        }
    }

    fn check_effects(
        &self,
        owner_kind: ConfigKind,
        owner: &dyn ToString,
        effects: &[GlobalEffect],
        errors: &mut Vec<RegistryError>,
    ) {
        for effect in effects {
            let missing = match effect {
                GlobalEffect::IncreaseValue {
                    target: ValueTarget::Resource(id),
                    ..
                }
                | GlobalEffect::IncreaseMax { resource: id, .. } => (!self
                    .resources
                    .contains(id.as_str()))
                .then(|| (ConfigKind::Resource, id.to_string())),
                GlobalEffect::IncreaseValue {
                    target: ValueTarget::Item(id),
                    ..
                } => (!self.items.contains(id.as_str())).then(|| (ConfigKind::Item, id.to_string())),
                GlobalEffect::StartEncounter { encounter } => (!self
                    .encounters
                    .contains(encounter.as_str()))
                .then(|| (ConfigKind::Encounter, encounter.to_string())),
                GlobalEffect::EndEncounter => None,
            };
            if let Some((kind, id)) = missing {
                errors.push(RegistryError::UnknownReference {
                    owner_kind,
                    owner: owner.to_string(),
                    kind,
                    id,
                });
            }
        }
    }
}

/// Collects content tables before indexing them into a [`ConfigRegistry`].
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    resources: Vec<ResourceConfig>,
    actions: Vec<ActionConfig>,
    encounters: Vec<EncounterConfig>,
    enemies: Vec<EnemyConfig>,
    items: Vec<ItemConfig>,
    skills: Vec<SkillConfig>,
}

impl RegistryBuilder {
    pub fn resources(mut self, resources: impl IntoIterator<Item = ResourceConfig>) -> Self {
        self.resources.extend(resources);
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = ActionConfig>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn encounters(mut self, encounters: impl IntoIterator<Item = EncounterConfig>) -> Self {
        self.encounters.extend(encounters);
        self
    }

    pub fn enemies(mut self, enemies: impl IntoIterator<Item = EnemyConfig>) -> Self {
        self.enemies.extend(enemies);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = ItemConfig>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn skills(mut self, skills: impl IntoIterator<Item = SkillConfig>) -> Self {
        self.skills.extend(skills);
        self
    }

    /// Indexes every table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] for the first id seen twice within a table.
    pub fn build(self) -> Result<ConfigRegistry, RegistryError> {
        Ok(ConfigRegistry {
            resources: Table::from_entries(self.resources)?,
            actions: Table::from_entries(self.actions)?,
            encounters: Table::from_entries(self.encounters)?,
            enemies: Table::from_entries(self.enemies)?,
            items: Table::from_entries(self.items)?,
            skills: Table::from_entries(self.skills)?,
        })
    }
}
