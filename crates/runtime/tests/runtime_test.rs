//! End-to-end sessions through the async runtime using the bundled content.

use std::time::Duration;

use game_core::{ActionOutcome, GameState, Theme, TickOutcome};
use runtime::{EncounterEvent, Event, Runtime, RuntimeConfig, RuntimeError, Topic};
use tokio::time::timeout;

/// Timer far enough away that only explicit ticks advance combat.
fn manual_config(seed: u64) -> RuntimeConfig {
    RuntimeConfig {
        tick_interval: Duration::from_secs(3600),
        seed: Some(seed),
        ..RuntimeConfig::default()
    }
}

async fn tick_until_resolved(handle: &runtime::RuntimeHandle) -> TickOutcome {
    for _ in 0..200 {
        let outcome = handle.tick(0.5).await.unwrap();
        if outcome.is_resolved() {
            return outcome;
        }
    }
    panic!("encounter did not resolve");
}

#[tokio::test]
async fn test_action_updates_state_and_publishes_events() {
    let runtime = Runtime::builder()
        .config(manual_config(1))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut actions = handle.subscribe(Topic::Action);
    let mut logs = handle.subscribe(Topic::Log);

    let outcome = handle.do_action("survive").await.unwrap();
    assert_eq!(outcome, ActionOutcome::Executed);

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.resource("days").unwrap().value(), 96.0);
    assert_eq!(state.executions("survive"), 1);

    match actions.recv().await.unwrap() {
        Event::Action(event) => {
            assert_eq!(event.action, "survive");
            assert_eq!(event.outcome, ActionOutcome::Executed);
        }
        other => panic!("unexpected event {other:?}"),
    }
    match logs.recv().await.unwrap() {
        Event::Log(event) => {
            assert_eq!(event.offset, 0);
            assert_eq!(event.entries, ["Increase value days 1"]);
        }
        other => panic!("unexpected event {other:?}"),
    }

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_action_is_an_error() {
    let runtime = Runtime::builder()
        .config(manual_config(1))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let err = handle.do_action("fly").await.unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownAction(id) if id == "fly"));
}

#[tokio::test]
async fn test_queries_and_cosmetics() {
    let runtime = Runtime::builder()
        .config(manual_config(1))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    assert!(handle.compute_enabled("survive").await.unwrap());
    assert!(!handle.compute_enabled("awaken").await.unwrap());
    assert!(handle.compute_visibility("days").await.unwrap());
    assert!(!handle.compute_visibility("nothing").await.unwrap());

    handle.set_theme(Theme::Dark).await.unwrap();
    handle.add_log("hello").await.unwrap();

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.log.last(), Some("hello"));
}

#[tokio::test]
async fn test_battle_resolves_through_explicit_ticks() {
    let runtime = Runtime::builder()
        .config(manual_config(7))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut encounters = handle.subscribe(Topic::Encounter);

    assert_eq!(
        handle.do_action("battle").await.unwrap(),
        ActionOutcome::Executed
    );
    assert!(matches!(
        encounters.recv().await.unwrap(),
        Event::Encounter(EncounterEvent::Started { encounter }) if encounter == "first"
    ));

    // Actions stay locked while the encounter runs.
    assert_eq!(
        handle.do_action("survive").await.unwrap(),
        ActionOutcome::EncounterActive
    );

    let outcome = tick_until_resolved(&handle).await;
    assert_eq!(
        outcome,
        TickOutcome::Failed {
            encounter: "first".into()
        }
    );
    assert!(matches!(
        encounters.recv().await.unwrap(),
        Event::Encounter(EncounterEvent::Failed { encounter }) if encounter == "first"
    ));

    let state = handle.query_state().await.unwrap();
    assert!(!state.in_encounter());
    assert_eq!(state.resource("days").unwrap().value(), 96.0);
    assert_eq!(state.log.last(), Some("Encounter failed: You have failed to defend"));
    assert_eq!(handle.tick(0.5).await.unwrap(), TickOutcome::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_timer_drives_active_encounter() {
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            seed: Some(7),
            ..RuntimeConfig::default()
        })
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut encounters = handle.subscribe(Topic::Encounter);

    handle.do_action("battle").await.unwrap();

    let resolved = timeout(Duration::from_secs(120), async {
        loop {
            match encounters.recv().await {
                Ok(Event::Encounter(EncounterEvent::Started { .. })) => continue,
                Ok(event) => return event,
                Err(err) => panic!("encounter channel failed: {err}"),
            }
        }
    })
    .await
    .expect("encounter resolves on the timer");

    assert!(matches!(
        resolved,
        Event::Encounter(EncounterEvent::Failed { .. })
    ));
    let state = handle.query_state().await.unwrap();
    assert!(!state.in_encounter());
    assert_eq!(state.main_character().unwrap().health.value(), 0.0);
}

#[tokio::test]
async fn test_seeded_sessions_replay_identically() {
    async fn play(seed: u64) -> GameState {
        let runtime = Runtime::builder()
            .config(manual_config(seed))
            .build()
            .await
            .unwrap();
        let handle = runtime.handle();
        handle.do_action("rest").await.unwrap();
        handle.do_action("battle").await.unwrap();
        tick_until_resolved(&handle).await;
        let state = handle.query_state().await.unwrap();
        drop(handle);
        runtime.shutdown().await.unwrap();
        state
    }

    assert_eq!(play(42).await, play(42).await);
}

#[tokio::test]
async fn test_resume_from_initial_state() {
    let first = Runtime::builder()
        .config(manual_config(3))
        .build()
        .await
        .unwrap();
    let handle = first.handle();
    handle.do_action("survive").await.unwrap();
    let saved = handle.query_state().await.unwrap();
    drop(handle);
    first.shutdown().await.unwrap();

    let resumed = Runtime::builder()
        .config(manual_config(3))
        .initial_state(saved.clone())
        .build()
        .await
        .unwrap();
    let handle = resumed.handle();
    assert_eq!(handle.query_state().await.unwrap(), saved);

    handle.do_action("survive").await.unwrap();
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.resource("days").unwrap().value(), 97.0);
    assert_eq!(state.executions("survive"), 2);
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_handles() {
    let runtime = Runtime::builder()
        .config(manual_config(1))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let probe = handle.clone();
    drop(handle);

    let worker_done = tokio::spawn(runtime.shutdown());
    drop(probe);
    worker_done.await.unwrap().unwrap();
}
