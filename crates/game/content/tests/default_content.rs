//! Sessions driven by the bundled content.

use game_content::{default_config, default_registry};
use game_core::{ActionOutcome, GameEngine, GameState, TickOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_default_content_is_consistent() {
    let registry = default_registry().expect("bundled content loads");
    assert!(registry.validate().is_empty());

    let ids: Vec<_> = registry.actions().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["survive", "rest", "awaken", "loop", "battle"]);
    assert_eq!(registry.items().len(), 7);
    assert_eq!(registry.enemy("slime").unwrap().name, "Slime");
    assert_eq!(registry.skill("mana_attack").unwrap().costs.len(), 1);
}

#[test]
fn test_default_session_progression() {
    let registry = default_registry().unwrap();
    let config = default_config().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);
    engine.initialize(&config);

    assert!(engine.compute_enabled("survive"));
    assert!(!engine.compute_enabled("awaken"));

    for _ in 0..5 {
        assert_eq!(engine.do_action_by_id("survive"), Some(ActionOutcome::Executed));
    }
    assert!(engine.compute_enabled("awaken"));
    assert!(!engine.compute_enabled("loop"));

    engine.do_action_by_id("awaken");
    assert_eq!(engine.state().main_character().unwrap().mana.max(), 1.0);
    // Mana max reached 1 and days are full.
    assert!(engine.compute_enabled("loop"));
    assert!(!engine.compute_enabled("awaken"));
}

#[test]
fn test_default_battle() {
    let registry = default_registry().unwrap();
    let config = default_config().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);
    engine.initialize(&config);

    engine.do_action_by_id("battle");
    for _ in 0..16 {
        engine.run_encounter(0.5);
    }
    assert_eq!(engine.state().main_character().unwrap().health.value(), 1.0);

    let outcome = (0..100)
        .map(|_| engine.run_encounter(0.5))
        .find(TickOutcome::is_resolved);
    assert_eq!(
        outcome,
        Some(TickOutcome::Failed {
            encounter: "first".into()
        })
    );
    assert_eq!(engine.state().resource("days").unwrap().value(), 96.0);
}
