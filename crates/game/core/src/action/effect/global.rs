use rand::Rng;
use tracing::{debug, info, warn};

use super::EffectContext;
use crate::env::rng::roll_chance;
use crate::state::{EncounterId, EncounterState, ItemId, ItemState, ResourceId};

/// What an `increase_value` global effect adds to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueTarget {
    Resource(ResourceId),
    Item(ItemId),
}

impl std::fmt::Display for ValueTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resource(id) => id.fmt(f),
            Self::Item(id) => id.fmt(f),
        }
    }
}

/// An effect on world state rather than on a unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GlobalEffect {
    /// Adds `amount` to a resource value (clamped) or an item count.
    ///
    /// With `chance`, the roll happens after the log line is written.
    IncreaseValue {
        target: ValueTarget,
        amount: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        chance: Option<f64>,
    },
    /// Adds `amount` to a resource max and re-clamps its value.
    IncreaseMax { resource: ResourceId, amount: f64 },
    /// Installs a fresh encounter, replacing any active one.
    StartEncounter { encounter: EncounterId },
    /// Clears the active encounter.
    EndEncounter,
}

impl GlobalEffect {
    pub fn increase_resource(resource: impl Into<ResourceId>, amount: f64) -> Self {
        Self::IncreaseValue {
            target: ValueTarget::Resource(resource.into()),
            amount,
            chance: None,
        }
    }

    pub fn increase_item(item: impl Into<ItemId>, amount: f64) -> Self {
        Self::IncreaseValue {
            target: ValueTarget::Item(item.into()),
            amount,
            chance: None,
        }
    }

    pub fn increase_max(resource: impl Into<ResourceId>, amount: f64) -> Self {
        Self::IncreaseMax {
            resource: resource.into(),
            amount,
        }
    }

    pub fn start_encounter(encounter: impl Into<EncounterId>) -> Self {
        Self::StartEncounter {
            encounter: encounter.into(),
        }
    }

    /// Sets the trigger chance of an `IncreaseValue`; other kinds are returned unchanged.
    pub fn with_chance(mut self, probability: f64) -> Self {
        if let Self::IncreaseValue { chance, .. } = &mut self {
            *chance = Some(probability);
        }
        self
    }

    pub fn apply<R: Rng>(&self, ctx: &mut EffectContext<'_, R>) {
        match self {
            Self::IncreaseValue {
                target,
                amount,
                chance,
            } => {
                ctx.state
                    .log
                    .push(format!("Increase value {target} {amount}"));
                if let Some(chance) = *chance
                    && !roll_chance(&mut *ctx.rng, chance)
                {
                    debug!(value_target = %target, chance, "increase_value skipped by chance roll");
                    return;
                }
                match target {
                    ValueTarget::Resource(id) => match ctx.state.resources.get_mut(id) {
                        Some(resource) => resource.meter.add_value(*amount),
                        None => warn!(resource = %id, "increase_value on unknown resource"),
                    },
                    ValueTarget::Item(id) => {
                        if amount.fract() != 0.0 {
                            warn!(item = %id, amount, "fractional item amount rounded");
                        }
                        ctx.state
                            .items
                            .entry(id.clone())
                            .or_insert_with(ItemState::default)
                            .amount += amount.round() as i64;
                    }
                }
            }
            Self::IncreaseMax { resource, amount } => {
                ctx.state
                    .log
                    .push(format!("Increase max {resource} {amount}"));
                match ctx.state.resources.get_mut(resource) {
                    Some(state) => state.meter.add_max(*amount),
                    None => warn!(%resource, "increase_max on unknown resource"),
                }
            }
            Self::StartEncounter { encounter } => start_encounter(ctx, encounter),
            Self::EndEncounter => {
                if let Some(ended) = ctx.state.encounter.take() {
                    info!(encounter = %ended.encounter, "encounter ended by effect");
                }
            }
        }
    }
}

fn start_encounter<R: Rng>(ctx: &mut EffectContext<'_, R>, encounter: &EncounterId) {
    let health = ctx
        .state
        .main_character()
        .map_or(0.0, |unit| unit.health.value());
    if health <= 0.0 {
        ctx.state.log.push("Cannot start encounter with 0 health.");
        debug!(%encounter, "encounter refused: main character has no health");
        return;
    }

    ctx.state.log.push("Start encounter");
    if ctx.registry.encounter(encounter.as_str()).is_none() {
        warn!(%encounter, "start_encounter references unknown encounter");
        return;
    }

    info!(%encounter, "encounter started");
    ctx.state.encounter = Some(EncounterState::new(
        encounter.clone(),
        &ctx.state.active_party,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ConfigRegistry, EncounterConfig, EnemyOrder, ResourceConfig};
    use crate::state::{GameState, Meter, PartyUnitId, PartyUnitState, ResourceState};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn registry() -> ConfigRegistry {
        ConfigRegistry::builder()
            .resources([ResourceConfig::new("days", 95.0, 100.0)])
            .encounters([EncounterConfig::new(
                "first",
                EnemyOrder::Random,
                vec!["slime".into()],
                1,
            )])
            .build()
            .unwrap()
    }

    fn state(health: f64) -> GameState {
        let mut state = GameState::default();
        state
            .resources
            .insert(ResourceId::new("days"), ResourceState::new(95.0, 100.0));
        let id = PartyUnitId::new("player");
        state.party.insert(
            id.clone(),
            PartyUnitState {
                id: id.clone(),
                name: "Player".into(),
                health: Meter::new(health, 10.0),
                mana: Meter::new(0.0, 0.0),
                skills: vec![],
            },
        );
        state.active_party.push(id);
        state
    }

    #[test]
    fn increase_value_clamps_and_logs() {
        let registry = registry();
        let mut state = state(5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        GlobalEffect::increase_resource("days", 10.0).apply(&mut ctx);

        assert_eq!(state.resource("days").unwrap().value(), 100.0);
        assert_eq!(state.log.last(), Some("Increase value days 10"));
    }

    #[test]
    fn increase_max_reclamps_value() {
        let registry = registry();
        let mut state = state(5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        GlobalEffect::increase_max("days", -10.0).apply(&mut ctx);

        let days = state.resource("days").unwrap();
        assert_eq!((days.value(), days.max()), (90.0, 90.0));
    }

    #[test]
    fn items_accumulate_from_zero() {
        let registry = registry();
        let mut state = state(5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        ctx.apply_global_effects(&[
            GlobalEffect::increase_item("mana_shard_0", 1.0),
            GlobalEffect::increase_item("mana_shard_0", 1.0),
        ]);

        assert_eq!(state.item_amount("mana_shard_0"), 2);
    }

    #[test]
    fn fractional_item_amounts_round_to_whole_units() {
        let registry = registry();
        let mut state = state(5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        GlobalEffect::increase_item("mana_shard_0", 0.4).apply(&mut ctx);
        assert_eq!(ctx.state.item_amount("mana_shard_0"), 0);

        GlobalEffect::increase_item("mana_shard_0", 1.6).apply(&mut ctx);
        assert_eq!(state.item_amount("mana_shard_0"), 2);
        assert_eq!(state.log.last(), Some("Increase value mana_shard_0 1.6"));
    }

    #[test]
    fn failed_chance_still_logs() {
        let registry = registry();
        let mut state = state(5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        GlobalEffect::increase_item("mana_shard_0", 1.0)
            .with_chance(-1.0)
            .apply(&mut ctx);

        assert_eq!(state.item_amount("mana_shard_0"), 0);
        assert_eq!(state.log.last(), Some("Increase value mana_shard_0 1"));
    }

    #[test]
    fn start_encounter_requires_health() {
        let registry = registry();
        let mut state = state(0.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        GlobalEffect::start_encounter("first").apply(&mut ctx);

        assert!(state.encounter.is_none());
        assert_eq!(state.log.last(), Some("Cannot start encounter with 0 health."));
    }

    #[test]
    fn start_encounter_seeds_allies() {
        let registry = registry();
        let mut state = state(5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);

        GlobalEffect::start_encounter("first").apply(&mut ctx);
        GlobalEffect::start_encounter("missing").apply(&mut ctx);

        let encounter = state.encounter.as_ref().unwrap();
        assert_eq!(encounter.encounter, "first");
        assert_eq!(encounter.current_enemy_index, 0);
        assert!(encounter.enemies.is_empty());
        assert_eq!(encounter.ally_ids(), [PartyUnitId::new("player")]);

        let mut ctx = EffectContext::new(&mut state, &registry, &mut rng);
        GlobalEffect::EndEncounter.apply(&mut ctx);
        assert!(state.encounter.is_none());
    }
}
