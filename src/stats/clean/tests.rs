//! Unit tests for raw player cleaning

use super::*;
use serde_json::json;

fn full_entry() -> Value {
    json!({
        "player": {
            "lastname": "Haaland",
            "photo": "https://media.example/haaland.png",
            "nationality": "Norway"
        },
        "statistics": [{
            "team": {
                "name": "Manchester City",
                "logo": "https://media.example/city.png"
            },
            "goals": { "total": 27, "assists": 5 },
            "games": { "appearences": 31 }
        }]
    })
}

#[test]
fn test_non_array_input_yields_empty() {
    assert!(clean_player_data(&Value::Null).is_empty());
    assert!(clean_player_data(&json!("x")).is_empty());
    assert!(clean_player_data(&json!(42)).is_empty());
    assert!(clean_player_data(&json!({"response": []})).is_empty());
}

#[test]
fn test_full_entry_is_mapped() {
    let cleaned = clean_player_data(&json!([full_entry()]));
    assert_eq!(
        cleaned,
        vec![CleanedPlayer {
            lastname: "Haaland".to_string(),
            team: "Manchester City".to_string(),
            goals: Some(27),
            assists: Some(5),
            games: 31,
            photo: "https://media.example/haaland.png".to_string(),
            nationality: "Norway".to_string(),
            logo: "https://media.example/city.png".to_string(),
        }]
    );
}

#[test]
fn test_entry_missing_lastname_is_dropped() {
    let mut entry = full_entry();
    entry["player"].as_object_mut().unwrap().remove("lastname");
    assert!(clean_player_data(&json!([entry])).is_empty());
}

#[test]
fn test_entry_missing_team_name_is_dropped() {
    let mut entry = full_entry();
    entry["statistics"][0]["team"]
        .as_object_mut()
        .unwrap()
        .remove("name");
    assert!(clean_player_data(&json!([entry])).is_empty());
}

#[test]
fn test_entry_missing_statistics_is_dropped() {
    let mut entry = full_entry();
    entry.as_object_mut().unwrap().remove("statistics");
    assert!(clean_player_data(&json!([entry])).is_empty());

    let mut entry = full_entry();
    entry["statistics"] = json!([]);
    assert!(clean_player_data(&json!([entry])).is_empty());
}

#[test]
fn test_valid_entries_survive_among_malformed() {
    let mut broken = full_entry();
    broken.as_object_mut().unwrap().remove("player");

    let cleaned = clean_player_data(&json!([broken, full_entry(), null]));
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].lastname, "Haaland");
}

#[test]
fn test_optional_fields_default() {
    let mut entry = full_entry();
    let stats = entry["statistics"][0].as_object_mut().unwrap();
    stats.remove("goals");
    stats.remove("games");
    entry["player"].as_object_mut().unwrap().remove("photo");

    let cleaned = clean_player_data(&json!([entry]));
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].goals, None);
    assert_eq!(cleaned[0].assists, None);
    assert_eq!(cleaned[0].games, 0);
    assert_eq!(cleaned[0].photo, "");
}

#[test]
fn test_games_default_when_appearences_absent() {
    let mut entry = full_entry();
    entry["statistics"][0]["games"] = json!({});
    let cleaned = clean_player_data(&json!([entry]));
    assert_eq!(cleaned[0].games, 0);
}
