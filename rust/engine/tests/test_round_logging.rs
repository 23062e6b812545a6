use std::fs;

use anteplay_engine::cards::{Card, Rank as R, Suit as S};
use anteplay_engine::game::Session;
use anteplay_engine::hand::Category;
use anteplay_engine::logger::{RoundLogger, RoundRecord};
use anteplay_engine::rules::{Decision, RoundOutcome};

fn sample_record() -> RoundRecord {
    RoundRecord {
        round_id: "20250102-000001".to_string(),
        seed: Some(1),
        decision: Decision::Fold,
        player_cards: vec![
            Card { suit: S::Clubs, rank: R::Ace },
            Card { suit: S::Hearts, rank: R::Nine },
            Card { suit: S::Spades, rank: R::Two },
        ],
        player_category: Category::HighCard,
        dealer_cards: vec![],
        dealer_category: None,
        dealer_qualifies: None,
        outcome: RoundOutcome::PlayerFoldsAnteLost,
        ante: 10,
        play: 0,
        net: -10,
        bankroll: 90,
        ts: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample_record()).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("rounds_ts.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample_record()).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..sample_record()
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn session_reports_round_trip_through_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");

    let mut session = Session::new(100, Some(11));
    session.place_ante(10).unwrap();
    let report = session.decide(Decision::Play).unwrap();
    let id = logger.log_round(Some(session.seed()), &report).expect("log");

    let content = fs::read_to_string(&path).unwrap();
    let rec: RoundRecord = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(rec.round_id, id);
    assert_eq!(rec.player_cards, report.player_hand.cards().to_vec());
    assert_eq!(rec.dealer_cards.len(), 3);
    assert_eq!(rec.outcome, report.settlement.outcome);
    assert_eq!(rec.net, report.settlement.net);
    assert_eq!(rec.bankroll, session.bankroll());
}
