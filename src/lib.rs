//! Football statistics library
//!
//! A Rust library for fetching and aggregating football statistics from the
//! api-football REST API, providing top-scorer lists, multi-season cumulative
//! totals, and per-team goal-share statistics.
//!
//! ## Features
//!
//! - **Top Scorers**: Fetch and clean a league's top scorers for one season
//! - **Cumulative Totals**: Sum goals, games, and assists across seasons
//! - **Team Goal Stats**: Join standings with top scorers to compute each
//!   team's leading scorer and their share of the team's goals
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_stats::{stats, FootballClient, LeagueId, Season};
//!
//! # async fn example() -> football_stats::Result<()> {
//! let client = FootballClient::from_env()?;
//!
//! // Premier League top scorers, current season
//! let scorers =
//!     stats::cleaned_top_scorers(&client, LeagueId::default(), Season::default()).await?;
//!
//! for p in &scorers {
//!     println!("{}: {} goals", p.lastname, p.goals.unwrap_or(0));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your api-football key to use [`FootballClient::from_env`]:
//! ```bash
//! export FOOTBALL_API_KEY=your-key
//! ```

pub mod api;
pub mod error;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use api::FootballClient;
pub use error::{FootballError, Result};
pub use stats::{AggregatedPlayer, CleanedPlayer, TeamStat};
pub use types::{LeagueId, Season};

pub const API_KEY_ENV_VAR: &str = "FOOTBALL_API_KEY";
