//! Content fixture shared by the integration tests.
//!
//! Mirrors the default game data: the `days` loop, the slime encounter and
//! the two starting skills.
#![allow(dead_code)]

use game_core::{
    ActionConfig, ConfigRegistry, EncounterConfig, EnemyConfig, EnemyOrder,
    GameConfig, GameEngine, GameState, GlobalEffect, ItemConfig, Prerequisite,
    ResourceConfig, ResourcePrerequisite, ResourceRelation, SkillConfig, TargetSymbol,
    UnitEffectConfig, UnitEffectKind, UnitPrerequisite, UnitStat, ValueBounds,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const SEED: u64 = 0x5eed;

fn days_below_max() -> Prerequisite {
    Prerequisite::resource(ResourcePrerequisite::new(
        "days",
        ResourceRelation::VALUE_LESS_THAN_MAX,
    ))
}

fn days_at_max() -> Prerequisite {
    Prerequisite::resource(ResourcePrerequisite::new(
        "days",
        ResourceRelation::VALUE_EQUAL_TO_MAX,
    ))
}

pub fn registry() -> ConfigRegistry {
    let mut first = EncounterConfig::new("first", EnemyOrder::Random, vec!["slime".into()], 1);
    first.completion_message = "You have defended".into();
    first.failure_message = "You have failed to defend".into();
    first.global_completion_effects = vec![
        GlobalEffect::increase_item("mana_shard_0", 1.0),
        GlobalEffect::increase_resource("days", 1.0),
    ];
    first.global_failure_effects = vec![GlobalEffect::increase_resource("days", 1.0)];

    let mut slime = EnemyConfig::new("slime", 5.0, 1.0, vec!["mana_attack".into()]);
    slime.name = "Slime".into();
    slime.completion_effects = vec![GlobalEffect::increase_item("mana_shard_0", 1.0).with_chance(0.1)];

    ConfigRegistry::builder()
        .resources([ResourceConfig::new("days", 95.0, 100.0)])
        .actions([
            ActionConfig::new("survive", "loop")
                .with_global_effect(GlobalEffect::increase_resource("days", 1.0))
                .with_prerequisite(days_below_max()),
            ActionConfig::new("rest", "loop")
                .with_global_effect(GlobalEffect::increase_resource("days", 1.0))
                .with_unit_effect(UnitEffectConfig::new(
                    UnitEffectKind::IncreaseValue,
                    TargetSymbol::MainCharacter,
                    UnitStat::Health,
                    1.0,
                ))
                .with_prerequisite(days_below_max()),
            ActionConfig::new("awaken", "loop")
                .with_unit_effect(UnitEffectConfig::new(
                    UnitEffectKind::IncreaseMax,
                    TargetSymbol::MainCharacter,
                    UnitStat::Mana,
                    1.0,
                ))
                .with_max_executions(1)
                .with_prerequisite(Prerequisite::unit(UnitPrerequisite::main_character(
                    UnitStat::Mana,
                    ValueBounds {
                        max_max: Some(0.0),
                        ..ValueBounds::default()
                    },
                )))
                .with_prerequisite(days_at_max()),
            ActionConfig::new("loop", "loop")
                .with_prerequisite(days_at_max())
                .with_prerequisite(Prerequisite::unit(UnitPrerequisite::main_character(
                    UnitStat::Mana,
                    ValueBounds {
                        min_max: Some(1.0),
                        ..ValueBounds::default()
                    },
                ))),
            ActionConfig::new("battle", "loop")
                .with_global_effect(GlobalEffect::start_encounter("first"))
                .with_prerequisite(days_below_max()),
        ])
        .encounters([first])
        .enemies([slime])
        .items((0..7).map(|i| ItemConfig::new(format!("mana_shard_{i}"), format!("Mana Shard {i}"))))
        .skills([
            SkillConfig::new(
                "basic_attack",
                2.0,
                vec![UnitEffectConfig::damage(TargetSymbol::Enemy, 0.1)],
            ),
            SkillConfig::new(
                "mana_attack",
                2.0,
                vec![UnitEffectConfig::damage(TargetSymbol::Enemy, 1.0)],
            ),
        ])
        .build()
        .expect("fixture registry has unique ids")
}

pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

/// Initialized session over the fixture registry.
pub fn session(registry: &ConfigRegistry, rng: &mut ChaCha8Rng) -> GameState {
    let mut state = GameState::default();
    GameEngine::new(&mut state, registry, rng).initialize(&GameConfig::default());
    state
}
