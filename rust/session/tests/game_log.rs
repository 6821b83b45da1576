use holobac_engine::logger::{GameLogger, GameRecord};
use holobac_engine::player::PlayerAction;
use holobac_session::{AppSettings, EventBus, GameEvent, SessionManager, TestLogSubscriber};
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[test]
fn finished_and_abandoned_games_are_logged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("games.jsonl");
    let settings = AppSettings {
        seed: Some(77),
        ..AppSettings::default()
    };
    let manager = SessionManager::with_settings(Arc::new(EventBus::new()), settings)
        .expect("manager")
        .with_game_log(GameLogger::create(&path).expect("logger"));

    let id = "logged".to_string();
    manager.start_session(&id, Some(20)).expect("start");
    for _ in 0..3 {
        manager
            .apply_action(&id, PlayerAction::Stand, None)
            .expect("stand");
    }
    manager.start_session(&id, Some(20)).expect("again");
    manager.end_session(&id).expect("quit");

    let content = fs::read_to_string(&path).expect("read log");
    let records: Vec<GameRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rounds.len(), 3);
    assert!(records[0].outcome.is_some());
    assert_eq!(records[0].seed, Some(77));
    assert!(records[0].game_id.ends_with("-000001"));
    assert!(records[1].game_id.ends_with("-000002"));
    assert!(records[1].outcome.is_none());
    assert_eq!(records[1].meta.as_ref().expect("meta")["session_id"], "logged");
}

#[test]
fn expired_games_are_logged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("games.jsonl");
    let settings = AppSettings {
        seed: Some(5),
        session_timeout_secs: 1,
        ..AppSettings::default()
    };
    let manager = SessionManager::with_settings(Arc::new(EventBus::new()), settings)
        .expect("manager")
        .with_game_log(GameLogger::create(&path).expect("logger"));

    let id = "idle".to_string();
    manager.start_session(&id, None).expect("start");
    manager
        .apply_action(&id, PlayerAction::Stand, None)
        .expect("stand");
    thread::sleep(Duration::from_millis(1100));

    assert_eq!(manager.cleanup_expired_sessions().expect("cleanup"), 1);
    assert!(manager.active_sessions().is_empty());

    let content = fs::read_to_string(&path).expect("read log");
    let records: Vec<GameRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("record"))
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rounds.len(), 1);
    assert!(records[0].outcome.is_none());
}

#[cfg(target_os = "linux")]
#[test]
fn failed_record_write_still_finishes_the_game() {
    let bus = Arc::new(EventBus::new());
    let settings = AppSettings {
        seed: Some(31),
        ..AppSettings::default()
    };
    let manager = SessionManager::with_settings(Arc::clone(&bus), settings)
        .expect("manager")
        .with_game_log(GameLogger::create("/dev/full").expect("logger"));

    let id = "full-disk".to_string();
    let mut events = bus.subscribe(id.clone());
    manager.start_session(&id, None).expect("start");
    let mut last = None;
    for _ in 0..3 {
        last = Some(
            manager
                .apply_action(&id, PlayerAction::Stand, None)
                .expect("stand"),
        );
    }

    let last = last.expect("final snapshot");
    assert!(last.is_over());
    assert!(manager.active_sessions().is_empty());
    assert_eq!(bus.subscriber_count(), 0);

    let ended = std::iter::from_fn(|| events.try_next())
        .find(|e| matches!(e, GameEvent::GameEnded { .. }))
        .expect("game ended event");
    let GameEvent::GameEnded { outcome, reason, .. } = ended else {
        panic!("expected game ended");
    };
    assert_eq!(outcome, last.outcome);
    assert_eq!(reason, "completed");
}

#[test]
fn session_lifecycle_is_logged_with_fields() {
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.layer());

    tracing::subscriber::with_default(registry, || {
        let manager = SessionManager::new(Arc::new(EventBus::new()));
        let id = "traced".to_string();
        manager.start_session(&id, Some(1)).expect("start");
        manager.end_session(&id).expect("end");
    });

    let started = subscriber
        .find("game session started")
        .expect("start logged");
    assert_eq!(started.field("session_id"), Some("traced"));
    assert_eq!(started.field("stake"), Some("1"));
    assert!(subscriber.find("ended by request").is_some());
}
