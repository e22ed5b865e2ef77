//! JSON boundary for the UI layer.
//!
//! Requests carry a `schema_version` which must match [`crate::SCHEMA_VERSION`].
//! Mutating calls answer with the updated score snapshot so the UI can
//! render without a second read.

use serde::{Deserialize, Serialize};

use crate::models::events::EventType;
use crate::models::match_record::{Match, MatchSummary};
use crate::models::player::{Player, Team};
use crate::models::score::{Score, TeamSide};
use crate::models::shot::Shot;
use crate::state::MatchStore;
use crate::stats::{match_totals, player_statistics, MatchTotals, PlayerStatistics};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub schema_version: u8,
    pub teams: [TeamData; 2],
    pub location: String,
    pub round: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub id: String,
    pub players: [PlayerData; 2],
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddEventRequest {
    pub schema_version: u8,
    pub player_id: String,
    pub event_type: EventType,
    pub shot: Shot,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsRequest {
    pub schema_version: u8,
    pub match_id: String,
    pub player_id: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse<'a> {
    pub schema_version: u8,
    #[serde(rename = "match")]
    pub match_record: &'a Match,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse<'a> {
    pub schema_version: u8,
    pub score: &'a Score,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamSide>,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub schema_version: u8,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub schema_version: u8,
    pub statistics: PlayerStatistics,
    pub match_totals: MatchTotals,
}

impl TeamData {
    fn into_team(self) -> Team {
        let [first, second] = self.players;
        Team::new(
            self.id,
            [Player::new(first.id, first.name), Player::new(second.id, second.name)],
        )
    }
}

fn score_response(store: &MatchStore) -> Result<String, String> {
    let current = store.current_match().ok_or("No current match")?;
    let response = ScoreResponse {
        schema_version: SCHEMA_VERSION,
        score: &current.score,
        is_completed: current.is_completed,
        winner: current.winner,
    };
    serde_json::to_string(&response).map_err(|e| format!("Response serialization failed: {}", e))
}

/// Start a new match from a JSON request; answers with the full match.
pub fn create_match_json(store: &mut MatchStore, request_json: &str) -> Result<String, String> {
    let request: CreateMatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let [home, away] = request.teams;
    store
        .create_match([home.into_team(), away.into_team()], request.location, request.round)
        .map_err(|e| e.to_string())?;

    let current = store.current_match().expect("match was just created");
    let response = MatchResponse { schema_version: SCHEMA_VERSION, match_record: current };
    serde_json::to_string(&response).map_err(|e| format!("Response serialization failed: {}", e))
}

/// Record a point-ending event; answers with the updated score.
pub fn add_event_json(store: &mut MatchStore, request_json: &str) -> Result<String, String> {
    let request: AddEventRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    store
        .add_event(&request.player_id, request.event_type, request.shot)
        .map_err(|e| e.to_string())?;

    score_response(store)
}

/// Undo the last event; answers with the recomputed score.
pub fn undo_last_event_json(store: &mut MatchStore) -> Result<String, String> {
    store.undo_last_event().map_err(|e| e.to_string())?;
    score_response(store)
}

/// Complete the current match; answers with the final score.
pub fn complete_match_json(store: &mut MatchStore) -> Result<String, String> {
    store.complete_match().map_err(|e| e.to_string())?;
    score_response(store)
}

/// Clear the current match.
pub fn reset_match_json(store: &mut MatchStore) -> Result<String, String> {
    store.reset_current_match();
    let response = AckResponse { schema_version: SCHEMA_VERSION, status: "reset" };
    serde_json::to_string(&response).map_err(|e| format!("Response serialization failed: {}", e))
}

/// The current match, or JSON `null` when none is active.
pub fn current_match_json(store: &MatchStore) -> Result<String, String> {
    let response = store
        .current_match()
        .map(|m| MatchResponse { schema_version: SCHEMA_VERSION, match_record: m });
    serde_json::to_string(&response).map_err(|e| format!("Response serialization failed: {}", e))
}

/// Completed-match summaries, most recent first.
pub fn match_history_json(store: &MatchStore) -> Result<String, String> {
    let summaries: Vec<MatchSummary> = store.matches().iter().map(Match::summary).collect();
    serde_json::to_string(&summaries).map_err(|e| format!("Response serialization failed: {}", e))
}

/// Statistics for one player of one match (current or historical).
pub fn player_statistics_json(store: &MatchStore, request_json: &str) -> Result<String, String> {
    let request: StatisticsRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let record = store
        .current_match()
        .filter(|m| m.id == request.match_id)
        .or_else(|| store.matches().iter().find(|m| m.id == request.match_id))
        .ok_or_else(|| format!("Match not found: {}", request.match_id))?;

    if !record.teams.iter().any(|team| team.contains(&request.player_id)) {
        return Err(format!("Player not found in match: {}", request.player_id));
    }

    let response = StatisticsResponse {
        schema_version: SCHEMA_VERSION,
        statistics: player_statistics(record, &request.player_id),
        match_totals: match_totals(record),
    };
    serde_json::to_string(&response).map_err(|e| format!("Response serialization failed: {}", e))
}
