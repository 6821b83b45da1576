use std::fs;
use std::path::PathBuf;

use holobac_engine::game::{GameConfig, GameState};
use holobac_engine::logger::{format_game_id, GameLogger, GameRecord};
use holobac_engine::player::PlayerAction;
use holobac_engine::rules::Outcome;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn finished_game(seed: u64) -> GameState {
    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    let mut game = GameState::new(config, 25).expect("deal");
    while !game.is_over() {
        game.apply_action(PlayerAction::Stand, None).expect("stand");
    }
    game
}

#[test]
fn sequential_ids_increment() {
    let mut logger = GameLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
    assert_eq!(format_game_id("20260101", 42), "20260101-000042");
}

#[test]
fn record_captures_all_rounds() {
    let game = finished_game(11);
    let rec = GameRecord::from_game("20250102-000001", &game);
    assert_eq!(rec.rounds.len(), 3);
    assert_eq!(rec.seed, Some(11));
    assert_eq!(rec.stake, 25);
    assert!(rec.outcome.is_some());
    let sum: u32 = rec.rounds.iter().map(|r| r.player_recorded).sum();
    assert_eq!(sum, rec.player_total);

    let json = serde_json::to_string(&rec).expect("serialize");
    let back: GameRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, rec);
}

#[test]
fn writes_jsonl_with_lf_only_and_injects_ts() {
    let path = tmp_path("gamelog");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let game = finished_game(3);
    let rec = GameRecord::from_game(logger.next_id(), &game);
    logger.write(&rec).expect("write");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = GameRecord {
        ts: Some(preset.clone()),
        outcome: Some(Outcome::Win),
        ..rec
    };
    logger.write(&rec2).expect("write2");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let content = String::from_utf8(bytes).expect("utf8");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"ts\":"), "ts should be injected");
    assert!(lines[1].contains(&preset), "preset ts must be kept");
    let _ = fs::remove_file(&path);
}
