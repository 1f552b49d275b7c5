//! Type-safe wrappers for api-football identifiers.

use crate::error::{FootballError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for api-football league identifiers.
///
/// Ensures league IDs are handled consistently throughout the library and
/// prevents mixing them up with other numeric values.
///
/// # Examples
///
/// ```rust
/// use football_stats::LeagueId;
///
/// let league_id = LeagueId::new(39);
/// assert_eq!(league_id.as_u32(), 39);
/// assert_eq!(league_id.to_string(), "39");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for LeagueId {
    /// English Premier League.
    fn default() -> Self {
        Self(39)
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = FootballError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FootballError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_default_is_premier_league() {
        assert_eq!(LeagueId::default(), LeagueId::new(39));
    }

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default(), Season::new(2025));
    }

    #[test]
    fn test_league_id_from_str() {
        let id: LeagueId = "140".parse().unwrap();
        assert_eq!(id.as_u32(), 140);
        assert!("la liga".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_season_from_str() {
        let season: Season = "2023".parse().unwrap();
        assert_eq!(season.as_u16(), 2023);
        assert!("twenty-23".parse::<Season>().is_err());
    }
}
