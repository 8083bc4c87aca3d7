use limitduel_engine::cards::parse_cards;
use limitduel_engine::logger::{format_hand_id, ActionRecord, HandRecord, ShowdownInfo, Street};
use limitduel_engine::player::{PlayerAction, PlayerId};

fn record() -> HandRecord {
    let cards = parse_cards("Ah Ad 2c 7s Ac 9d Tc 3h Jd").unwrap();
    HandRecord {
        hand_id: "20250102-000123".to_string(),
        seed: Some(42),
        hole_cards: [[cards[0], cards[1]], [cards[2], cards[3]]],
        actions: vec![
            ActionRecord {
                player: PlayerId::Player0,
                street: Street::Preflop,
                action: PlayerAction::Bet(4),
            },
            ActionRecord {
                player: PlayerId::Player1,
                street: Street::Preflop,
                action: PlayerAction::CheckOrCall,
            },
        ],
        board: cards[4..].to_vec(),
        result: Some("player 0 wins 8 at showdown".to_string()),
        ts: None,
        meta: None,
        showdown: Some(ShowdownInfo {
            winners: vec![PlayerId::Player0],
            notes: Some("ThreeOfAKind over HighCard".into()),
        }),
    }
}

#[test]
fn hand_record_serializes_and_deserializes() {
    let rec = record();
    let s = serde_json::to_string(&rec).expect("serialize");
    let back: HandRecord = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(rec, back);
}

#[test]
fn hand_record_supports_timestamp_and_metadata() {
    let rec = HandRecord {
        ts: Some("2025-01-02T03:04:05Z".to_string()),
        meta: Some(serde_json::json!({"note":"test"})),
        ..record()
    };
    let s = serde_json::to_string(&rec).unwrap();
    assert!(s.contains("\"ts\":"));
    assert!(s.contains("\"note\":"));
    let back: HandRecord = serde_json::from_str(&s).unwrap();
    assert_eq!(back.ts.as_deref(), Some("2025-01-02T03:04:05Z"));
}

#[test]
fn optional_fields_default_when_absent() {
    let mut v = serde_json::to_value(record()).unwrap();
    let obj = v.as_object_mut().unwrap();
    obj.remove("ts");
    obj.remove("meta");
    obj.remove("showdown");
    let back: HandRecord = serde_json::from_value(v).unwrap();
    assert!(back.showdown.is_none());
    assert!(back.ts.is_none());
}

#[test]
fn id_format_is_date_and_sequence() {
    let id = format_hand_id("20251231", 42);
    assert_eq!(id, "20251231-000042");
}
