//! Aggregation layer: cleaning raw API payloads and the three read queries.

pub mod aggregate;
pub mod clean;

pub use aggregate::{AggregatedPlayer, TeamStat};
pub use clean::{clean_player_data, CleanedPlayer};

use std::collections::BTreeMap;

use tracing::{debug, error};

use crate::api::FootballClient;
use crate::error::Result;
use crate::types::{LeagueId, Season};

/// Seasons folded over by [`cumulative_top_scorers`], in processing order.
pub const CUMULATIVE_SEASONS: [Season; 4] =
    [Season(2022), Season(2023), Season(2024), Season(2025)];

/// Maximum entries returned by the single-season and cumulative queries.
pub const TOP_SCORER_LIMIT: usize = 10;

/// Fetch and clean a league's top scorers for one season.
///
/// Returns at most [`TOP_SCORER_LIMIT`] players in the order the API ranked
/// them; no re-sorting happens here.
pub async fn cleaned_top_scorers(
    client: &FootballClient,
    league: LeagueId,
    season: Season,
) -> Result<Vec<CleanedPlayer>> {
    let raw = client
        .top_scorers(league, season)
        .await
        .inspect_err(|e| error!("cleaned_top_scorers failed: {e}"))?;

    let mut cleaned = clean_player_data(&raw);
    debug!(count = cleaned.len(), "cleaned top scorers");
    cleaned.truncate(TOP_SCORER_LIMIT);
    Ok(cleaned)
}

/// Aggregate top scorers across [`CUMULATIVE_SEASONS`].
///
/// Seasons are fetched strictly one after another; if any season fails the
/// whole aggregation fails, even when earlier seasons succeeded. Players are
/// grouped by last name, so two players sharing a surname merge into one
/// aggregate. Returns at most [`TOP_SCORER_LIMIT`] players sorted descending
/// by cumulative goals.
pub async fn cumulative_top_scorers(
    client: &FootballClient,
    league: LeagueId,
) -> Result<Vec<AggregatedPlayer>> {
    let mut totals = BTreeMap::new();

    for season in CUMULATIVE_SEASONS {
        let raw = client
            .top_scorers(league, season)
            .await
            .inspect_err(|e| error!(%season, "cumulative_top_scorers failed: {e}"))?;
        aggregate::accumulate_season(&mut totals, &clean_player_data(&raw));
    }

    let aggregated = aggregate::top_by_goals(totals, TOP_SCORER_LIMIT);
    debug!(count = aggregated.len(), "cumulative top scorers");
    Ok(aggregated)
}

/// Per-team goal statistics for one season.
///
/// Joins standings (total goals scored per team) with the cleaned top-scorer
/// list to find each team's leading scorer and their share of the team's
/// goals. Returns teams sorted descending by total goals.
pub async fn team_goal_stats(
    client: &FootballClient,
    league: LeagueId,
    season: Season,
) -> Result<Vec<TeamStat>> {
    let standings_raw = client
        .standings(league, season)
        .await
        .inspect_err(|e| error!("team_goal_stats failed: {e}"))?;
    let scorers_raw = client
        .top_scorers(league, season)
        .await
        .inspect_err(|e| error!("team_goal_stats failed: {e}"))?;

    let standings = aggregate::standings_rows(&standings_raw);
    let scorers = clean_player_data(&scorers_raw);

    let teams = aggregate::build_team_stats(&standings, &scorers);
    debug!(count = teams.len(), "team goal stats");
    Ok(teams)
}
