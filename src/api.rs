//! HTTP client for the api-football v3 REST API.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{FootballError, Result};
use crate::types::{LeagueId, Season};
use crate::API_KEY_ENV_VAR;


/// Base URL for the api-football v3 API.
pub const API_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Value for the `x-rapidapi-host` header.
pub const API_HOST: &str = "v3.football.api-sports.io";

const TOP_SCORERS_PATH: &str = "/players/topscorers";
const STANDINGS_PATH: &str = "/standings";

/// Authenticated client for api-football endpoints.
///
/// The API key is passed in explicitly; [`FootballClient::from_env`] reads it
/// from `FOOTBALL_API_KEY` for convenience. The base URL can be overridden to
/// point requests at a test server.
pub struct FootballClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl FootballClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Build a client from the `FOOTBALL_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) => Ok(Self::new(key)),
            Err(_) => Err(FootballError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            }),
        }
    }

    /// Fetch raw top-scorer entries for a league and season.
    ///
    /// Returns the API envelope's `response` field as-is; the payload is
    /// opaque JSON and cleaning happens downstream.
    pub async fn top_scorers(&self, league: LeagueId, season: Season) -> Result<Value> {
        let data = self
            .get(TOP_SCORERS_PATH, league, season)
            .await
            .inspect_err(|e| error!("fetching top scorers failed: {e}"))?;
        debug!(
            count = data.as_array().map_or(0, Vec::len),
            %league,
            %season,
            "fetched top scorers"
        );
        Ok(data)
    }

    /// Fetch raw standings for a league and season.
    pub async fn standings(&self, league: LeagueId, season: Season) -> Result<Value> {
        let data = self
            .get(STANDINGS_PATH, league, season)
            .await
            .inspect_err(|e| error!("fetching standings failed: {e}"))?;
        debug!(%league, %season, "fetched standings");
        Ok(data)
    }

    /// GET an endpoint with auth headers and return the envelope's `response`.
    async fn get(&self, path: &str, league: LeagueId, season: Season) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let params = [
            ("league", league.to_string()),
            ("season", season.to_string()),
        ];

        let res = self
            .http
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_HOST)
            .query(&params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FootballError::Status { status });
        }

        let mut body = res.json::<Value>().await?;
        // The envelope is `{ "response": [...] }`; a missing field is left to
        // the cleaning layer, which treats non-arrays as empty.
        Ok(body
            .get_mut("response")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
