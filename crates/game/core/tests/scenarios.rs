//! End-to-end sessions over the default content.

mod common;

use game_core::{ActionOutcome, GameEngine, PartyUnitId, TickOutcome};

#[test]
fn test_fresh_session_state() {
    let registry = common::registry();
    let mut rng = common::rng();
    let state = common::session(&registry, &mut rng);

    let days = state.resource("days").expect("days is registered");
    assert_eq!((days.value(), days.max()), (95.0, 100.0));

    let player = state.main_character().expect("main character exists");
    assert_eq!((player.health.value(), player.health.max()), (5.0, 10.0));
    assert_eq!((player.mana.value(), player.mana.max()), (0.0, 0.0));
    assert_eq!(player.skills, ["basic_attack"]);
    assert!(state.encounter.is_none());
}

#[test]
fn test_initial_enabled_actions() {
    let registry = common::registry();
    let mut rng = common::rng();
    let mut state = common::session(&registry, &mut rng);
    let engine = GameEngine::new(&mut state, &registry, &mut rng);

    assert!(engine.compute_enabled("survive"));
    assert!(engine.compute_enabled("battle"));
    assert!(!engine.compute_enabled("awaken"));
    assert!(!engine.compute_enabled("loop"));

    let visible: Vec<_> = engine
        .visible_actions()
        .into_iter()
        .map(|action| action.id.as_str())
        .collect();
    assert_eq!(visible, ["survive", "rest", "battle"]);
}

#[test]
fn test_survive_until_awaken() {
    let registry = common::registry();
    let mut rng = common::rng();
    let mut state = common::session(&registry, &mut rng);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);

    for _ in 0..5 {
        assert_eq!(engine.do_action_by_id("survive"), Some(ActionOutcome::Executed));
    }
    assert_eq!(engine.state().resource("days").unwrap().value(), 100.0);
    assert!(engine.compute_enabled("awaken"));
    assert!(!engine.compute_enabled("survive"));

    // Capped days: survive is now rejected and counts stay put.
    assert_eq!(
        engine.do_action_by_id("survive"),
        Some(ActionOutcome::PrerequisitesUnmet)
    );
    assert_eq!(engine.state().executions("survive"), 5);
}

#[test]
fn test_awaken_runs_once() {
    let registry = common::registry();
    let mut rng = common::rng();
    let mut state = common::session(&registry, &mut rng);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);

    for _ in 0..5 {
        engine.do_action_by_id("survive");
    }
    assert_eq!(engine.do_action_by_id("awaken"), Some(ActionOutcome::Executed));
    assert_eq!(engine.do_action_by_id("awaken"), Some(ActionOutcome::Exhausted));

    let state = engine.state();
    assert_eq!(state.main_character().unwrap().mana.max(), 1.0);
    assert_eq!(state.executions("awaken"), 1);
    assert!(!engine.compute_enabled("awaken"));
    assert!(engine.compute_enabled("loop"));
}

#[test]
fn test_battle_starts_encounter() {
    let registry = common::registry();
    let mut rng = common::rng();
    let mut state = common::session(&registry, &mut rng);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);

    assert_eq!(engine.do_action_by_id("battle"), Some(ActionOutcome::Executed));

    let encounter = engine.state().encounter.as_ref().expect("encounter started");
    assert_eq!(encounter.encounter, "first");
    assert_eq!(encounter.current_enemy_index, 0);
    assert!(encounter.enemies.is_empty());
    assert_eq!(encounter.ally_ids(), [PartyUnitId::new("player")]);
    assert_eq!(engine.state().log.last(), Some("Start encounter"));

    // Actions are locked while fighting.
    assert_eq!(
        engine.do_action_by_id("survive"),
        Some(ActionOutcome::EncounterActive)
    );
    assert_eq!(
        engine.state().log.last(),
        Some("Cannot perform another action while in an encounter.")
    );
    assert_eq!(engine.state().executions("survive"), 0);
}

#[test]
fn test_slime_fight_is_lost() {
    let registry = common::registry();
    let mut rng = common::rng();
    let mut state = common::session(&registry, &mut rng);
    let mut engine = GameEngine::new(&mut state, &registry, &mut rng);
    engine.do_action_by_id("battle");

    for _ in 0..16 {
        assert_eq!(engine.run_encounter(0.5), TickOutcome::Ongoing);
    }
    let state = engine.state();
    assert_eq!(state.main_character().unwrap().health.value(), 1.0);
    let slime = &state.encounter.as_ref().unwrap().enemies[0];
    assert!((slime.health.value() - 4.6).abs() < 1e-9);
    assert!(state.log.iter().any(|line| line == "Enemy spawned: Slime"));

    let mut ticks = 0;
    let outcome = loop {
        ticks += 1;
        let outcome = engine.run_encounter(0.5);
        if outcome.is_resolved() || ticks > 100 {
            break outcome;
        }
    };
    assert_eq!(
        outcome,
        TickOutcome::Failed {
            encounter: "first".into()
        }
    );
    assert_eq!(ticks, 4);

    let state = engine.state();
    assert!(state.encounter.is_none());
    assert_eq!(state.main_character().unwrap().health.value(), 0.0);
    // Failure effects advance the day.
    assert_eq!(state.resource("days").unwrap().value(), 96.0);
    assert_eq!(
        state.log.last(),
        Some("Encounter failed: You have failed to defend")
    );
    assert_eq!(engine.run_encounter(0.5), TickOutcome::Idle);

    // No health left, so no new encounter.
    assert_eq!(engine.do_action_by_id("battle"), Some(ActionOutcome::Executed));
    assert!(engine.state().encounter.is_none());
    assert_eq!(
        engine.state().log.last(),
        Some("Cannot start encounter with 0 health.")
    );
}

#[test]
fn test_same_seed_same_session() {
    let registry = common::registry();
    let run = || {
        let mut rng = common::rng();
        let mut state = common::session(&registry, &mut rng);
        let mut engine = GameEngine::new(&mut state, &registry, &mut rng);
        engine.do_action_by_id("battle");
        for _ in 0..40 {
            engine.run_encounter(0.37);
        }
        state
    };
    assert_eq!(run(), run());
}
