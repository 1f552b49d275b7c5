//! Grouping and percentage helpers behind the stats queries.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

use super::clean::CleanedPlayer;


/// A player's totals summed across seasons, keyed by last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedPlayer {
    pub lastname: String,
    pub goals: u32,
    pub games: u32,
    pub assists: u32,
    pub photo: String,
    pub nationality: String,
    pub team: String,
    pub logo: String,
}

/// One team's goal statistics for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStat {
    pub team: String,
    pub logo: String,
    pub total_goals: u32,
    pub top_scorer: Option<String>,
    pub top_scorer_goals: u32,
    /// Share of the team's goals scored by its top scorer, formatted to one
    /// decimal place; `"0.0"` when the team has no goals.
    pub top_scorer_percentage: String,
}

/// One row extracted from the standings payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub team: String,
    pub logo: String,
    pub goals_for: u32,
}

/// Fold one season's cleaned players into the running totals.
///
/// Numeric fields sum, with missing goals/assists counted as 0. Photo, team,
/// and logo are overwritten every season so they end up reflecting the last
/// processed season that contained the player; nationality keeps its
/// first-seen value.
pub fn accumulate_season(
    totals: &mut BTreeMap<String, AggregatedPlayer>,
    players: &[CleanedPlayer],
) {
    for p in players {
        let entry = totals
            .entry(p.lastname.clone())
            .or_insert_with(|| AggregatedPlayer {
                lastname: p.lastname.clone(),
                goals: 0,
                games: 0,
                assists: 0,
                photo: p.photo.clone(),
                nationality: p.nationality.clone(),
                team: p.team.clone(),
                logo: p.logo.clone(),
            });
        entry.goals += p.goals.unwrap_or(0);
        entry.games += p.games;
        entry.assists += p.assists.unwrap_or(0);
        entry.photo = p.photo.clone();
        entry.team = p.team.clone();
        entry.logo = p.logo.clone();
    }
}

/// Convert totals into a list sorted descending by goals, truncated to
/// `limit`. The sort is stable, so equal-goal players stay in last-name
/// order from the map.
pub fn top_by_goals(
    totals: BTreeMap<String, AggregatedPlayer>,
    limit: usize,
) -> Vec<AggregatedPlayer> {
    let mut aggregated: Vec<AggregatedPlayer> = totals.into_values().collect();
    aggregated.sort_by(|a, b| b.goals.cmp(&a.goals));
    aggregated.truncate(limit);
    aggregated
}

/// Extract the league table from a standings payload.
///
/// The envelope nests the table at `response[0].league.standings[0]`. Rows
/// missing a team name are dropped; a missing goals-for count becomes 0.
pub fn standings_rows(response: &Value) -> Vec<StandingRow> {
    let Some(table) = response
        .get(0)
        .and_then(|entry| entry.get("league"))
        .and_then(|league| league.get("standings"))
        .and_then(|standings| standings.get(0))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    table
        .iter()
        .filter_map(|row| {
            let team = row.get("team")?;
            let name = team.get("name")?.as_str()?;
            Some(StandingRow {
                team: name.to_string(),
                logo: team
                    .get("logo")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                goals_for: row
                    .get("all")
                    .and_then(|all| all.get("goals"))
                    .and_then(|goals| goals.get("for"))
                    .and_then(Value::as_u64)
                    .unwrap_or(0) as u32,
            })
        })
        .collect()
}

/// Join standings with cleaned top scorers into per-team stats.
///
/// Scorers are scanned in API order and only a strictly higher goal count
/// replaces a team's recorded top scorer, so ties keep the first-seen player.
/// Output is sorted descending by total goals; the sort is stable, so teams
/// with equal totals keep their standings order.
pub fn build_team_stats(standings: &[StandingRow], scorers: &[CleanedPlayer]) -> Vec<TeamStat> {
    let mut teams: Vec<TeamStat> = standings
        .iter()
        .map(|row| TeamStat {
            team: row.team.clone(),
            logo: row.logo.clone(),
            total_goals: row.goals_for,
            top_scorer: None,
            top_scorer_goals: 0,
            top_scorer_percentage: String::new(),
        })
        .collect();

    let index: HashMap<&str, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, row)| (row.team.as_str(), i))
        .collect();

    for p in scorers {
        if let Some(&i) = index.get(p.team.as_str()) {
            let goals = p.goals.unwrap_or(0);
            if goals > teams[i].top_scorer_goals {
                teams[i].top_scorer_goals = goals;
                teams[i].top_scorer = Some(p.lastname.clone());
            }
        }
    }

    for team in &mut teams {
        team.top_scorer_percentage = scorer_percentage(team.top_scorer_goals, team.total_goals);
    }

    teams.sort_by(|a, b| b.total_goals.cmp(&a.total_goals));
    teams
}

/// Percentage of a team's goals scored by its top scorer, to one decimal.
pub fn scorer_percentage(top_scorer_goals: u32, total_goals: u32) -> String {
    if total_goals == 0 {
        return "0.0".to_string();
    }
    format!(
        "{:.1}",
        f64::from(top_scorer_goals) / f64::from(total_goals) * 100.0
    )
}
