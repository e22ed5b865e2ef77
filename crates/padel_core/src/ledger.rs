//! Event attribution and score replay.
//!
//! Maps a recorded point-ending event to the team credited with the point,
//! and rebuilds a score from the full event log. Replay-from-start is the
//! only correct undo strategy: tiebreak entry and set resets are not
//! invertible, so the score is never reversed incrementally.

use crate::models::events::{EventType, MatchEvent};
use crate::models::player::Team;
use crate::models::score::{Score, TeamSide};
use crate::scoring::update_score;

/// Which side gains the point for an event, or `None` when `player_id`
/// belongs to neither team.
///
/// A winner credits the hitter's team; unforced and forced errors credit
/// the opposing team.
pub fn scoring_team(teams: &[Team; 2], player_id: &str, event_type: EventType) -> Option<TeamSide> {
    let player_side = if teams[0].contains(player_id) {
        TeamSide::Home
    } else if teams[1].contains(player_id) {
        TeamSide::Away
    } else {
        return None;
    };

    Some(match event_type {
        EventType::Winner => player_side,
        EventType::UnforcedError | EventType::ForcedError => player_side.opponent(),
    })
}

/// Rebuild the score by folding the state machine over `events` from the
/// initial score. Events that attribute to neither team are skipped.
pub fn replay_score(teams: &[Team; 2], events: &[MatchEvent]) -> Score {
    events.iter().fold(Score::initial(), |score, event| {
        match scoring_team(teams, &event.player_id, event.event_type) {
            Some(side) => update_score(&score, side),
            None => score,
        }
    })
}
