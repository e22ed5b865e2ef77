use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::MatchEvent;
use super::player::{Player, Team};
use super::score::{Score, TeamSide};
use crate::save::format::current_timestamp;

/// A tracked match: fixed setup, the ordered event log, and the score
/// projection derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    /// Creation time, unix milliseconds.
    pub date_ms: u64,
    pub location: String,
    pub round: String,
    pub teams: [Team; 2],
    pub events: Vec<MatchEvent>,
    pub score: Score,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamSide>,
}

impl Match {
    /// Create an in-progress match with an empty log and the initial score.
    pub fn new(teams: [Team; 2], location: impl Into<String>, round: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date_ms: current_timestamp(),
            location: location.into(),
            round: round.into(),
            teams,
            events: Vec::new(),
            score: Score::initial(),
            is_completed: false,
            winner: None,
        }
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        &self.teams[side.index()]
    }

    /// All four players across both teams.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|team| team.players.iter())
    }

    /// Read-only view for history lists.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: self.id.clone(),
            date_ms: self.date_ms,
            location: self.location.clone(),
            round: self.round.clone(),
            team_names: [self.teams[0].display_name(), self.teams[1].display_name()],
            sets: self.score.sets,
            winner: self.winner,
        }
    }
}

/// Condensed match row for the history screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub date_ms: u64,
    pub location: String,
    pub round: String,
    pub team_names: [String; 2],
    pub sets: [u8; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamSide>,
}
