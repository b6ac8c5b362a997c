mod common;

use game_core::{
    GameConfig, GameEngine, GameState, MainCharacterConfig, Meter, TickOutcome,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn within_bounds(meter: &Meter) -> bool {
    meter.value() >= 0.0 && meter.value() <= meter.max()
}

fn assert_bounded(state: &GameState) {
    for resource in state.resources.values() {
        assert!(within_bounds(&resource.meter), "resource out of bounds: {resource:?}");
    }
    for unit in state.party.values() {
        assert!(within_bounds(&unit.health) && within_bounds(&unit.mana));
    }
    if let Some(encounter) = &state.encounter {
        for enemy in &encounter.enemies {
            assert!(within_bounds(&enemy.health) && within_bounds(&enemy.mana));
        }
    }
}

#[test]
fn test_random_play_keeps_invariants() {
    let registry = common::registry();
    let ids: Vec<_> = registry.actions().iter().map(|a| a.id.clone()).collect();

    for seed in 0..8 {
        let mut driver = ChaCha8Rng::seed_from_u64(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1000));
        let mut state = common::session(&registry, &mut rng);
        let mut engine = GameEngine::new(&mut state, &registry, &mut rng);

        let mut executions: Vec<u32> = ids.iter().map(|_| 0).collect();
        for _ in 0..300 {
            if engine.state().in_encounter() {
                engine.run_encounter(driver.gen_range(0.05..0.8));
            } else {
                let index = driver.gen_range(0..ids.len());
                engine.do_action_by_id(ids[index].as_str());
            }

            assert_bounded(engine.state());
            for (index, id) in ids.iter().enumerate() {
                let now = engine.state().executions(id.as_str());
                assert!(now >= executions[index], "executions decreased for {id}");
                if let Some(max) = registry.action(id.as_str()).unwrap().max_executions {
                    assert!(now <= max);
                }
                executions[index] = now;
            }
        }
    }
}

#[test]
fn test_compute_enabled_is_idempotent() {
    let registry = common::registry();
    let mut rng = common::rng();
    let mut state = common::session(&registry, &mut rng);
    let engine = GameEngine::new(&mut state, &registry, &mut rng);

    for action in registry.actions().iter() {
        let first = engine.compute_enabled(action.id.as_str());
        assert_eq!(first, engine.compute_enabled(action.id.as_str()));
    }
    // Unregistered ids pass vacuously.
    assert!(engine.compute_enabled("nonexistent"));
}

#[test]
fn test_strong_hero_defends() {
    let registry = common::registry();
    let config = GameConfig::with_main_character(MainCharacterConfig {
        health: 10.0,
        skills: vec!["mana_attack".into()],
        ..MainCharacterConfig::default()
    });
    let mut rng = common::rng();
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);
    engine.initialize(&config);
    engine.do_action_by_id("battle");

    let mut outcome = TickOutcome::Ongoing;
    for _ in 0..20 {
        outcome = engine.run_encounter(0.5);
        if outcome.is_resolved() {
            break;
        }
    }
    assert_eq!(
        outcome,
        TickOutcome::Completed {
            encounter: "first".into()
        }
    );

    let state = engine.state();
    assert!(state.encounter.is_none());
    // The slime falls on tick 20 before it can strike a fifth time.
    assert_eq!(state.main_character().unwrap().health.value(), 6.0);
    assert!(state.item_amount("mana_shard_0") >= 1);
    assert_eq!(state.resource("days").unwrap().value(), 96.0);
    assert_eq!(
        state.log.last(),
        Some("Encounter completed: You have defended")
    );
}
