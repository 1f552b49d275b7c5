//! Flatten raw top-scorer entries into simple records.

use serde::Serialize;
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Flat view of one top-scorer entry.
///
/// `goals` and `assists` stay optional because the API omits them for some
/// players; `games` defaults to 0 instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedPlayer {
    pub lastname: String,
    pub team: String,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub games: u32,
    pub photo: String,
    pub nationality: String,
    pub logo: String,
}

/// Flatten raw player entries for downstream aggregation.
///
/// Anything other than an array yields an empty vec, and entries missing the
/// player object, last name, first statistics block, or team name are
/// dropped. Never fails.
pub fn clean_player_data(players: &Value) -> Vec<CleanedPlayer> {
    let Some(entries) = players.as_array() else {
        return Vec::new();
    };
    entries.iter().filter_map(clean_entry).collect()
}

fn clean_entry(entry: &Value) -> Option<CleanedPlayer> {
    let player = entry.get("player")?;
    let lastname = player.get("lastname")?.as_str()?;
    let stats = entry.get("statistics")?.get(0)?;
    let team = stats.get("team")?;
    let team_name = team.get("name")?.as_str()?;

    let goals = stats.get("goals");
    Some(CleanedPlayer {
        lastname: lastname.to_string(),
        team: team_name.to_string(),
        goals: goals
            .and_then(|g| g.get("total"))
            .and_then(Value::as_u64)
            .map(|v| v as u32),
        assists: goals
            .and_then(|g| g.get("assists"))
            .and_then(Value::as_u64)
            .map(|v| v as u32),
        // The API spells it "appearences"
        games: stats
            .get("games")
            .and_then(|g| g.get("appearences"))
            .and_then(Value::as_u64)
            .unwrap_or(0) as u32,
        photo: str_field(player, "photo"),
        nationality: str_field(player, "nationality"),
        logo: str_field(team, "logo"),
    })
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
