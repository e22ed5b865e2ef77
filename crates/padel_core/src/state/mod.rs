//! Match aggregate.
//!
//! `MatchStore` owns the single current match and the list of completed
//! matches. It is an explicit object owned by the application's composition
//! root and passed to UI handlers; it can be converted to/from `TrackerSave`
//! for persistence.

use crate::error::{Result, StoreError};
use crate::ledger::{replay_score, scoring_team};
use crate::models::events::{EventType, MatchEvent};
use crate::models::match_record::Match;
use crate::models::player::Team;
use crate::models::shot::Shot;
use crate::save::format::current_timestamp;
use crate::save::{TrackerSave, SAVE_VERSION};
use crate::scoring::{is_match_completed, update_score, winner};

/// In-memory tracker state: the active match plus completed-match history,
/// most recent first.
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    current: Option<Match>,
    history: Vec<Match>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self { current: None, history: Vec::new() }
    }

    // ========================
    // Persistence conversion
    // ========================

    /// Convert runtime state to save format.
    pub fn to_save(&self) -> TrackerSave {
        TrackerSave {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            current_match: self.current.clone(),
            matches: self.history.clone(),
        }
    }

    /// Restore runtime state from save data.
    pub fn from_save(save: &TrackerSave) -> Self {
        Self { current: save.current_match.clone(), history: save.matches.clone() }
    }

    // ========================
    // Match lifecycle
    // ========================

    /// Start a new match. Requires four distinct, non-empty player names and
    /// no unfinished match in progress.
    pub fn create_match(
        &mut self,
        teams: [Team; 2],
        location: impl Into<String>,
        round: impl Into<String>,
    ) -> Result<()> {
        if let Some(current) = &self.current {
            if !current.is_completed {
                return Err(StoreError::MatchInProgress);
            }
        }
        validate_setup(&teams)?;

        let new_match = Match::new(teams, location, round);
        log::info!("Created match {} at {}", new_match.id, new_match.location);
        self.current = Some(new_match);
        Ok(())
    }

    /// Record a point-ending event, attribute the point, and advance the
    /// score. Completes the match as soon as a side reaches 2 sets.
    pub fn add_event(&mut self, player_id: &str, event_type: EventType, shot: Shot) -> Result<()> {
        let current = self.current.as_mut().ok_or(StoreError::NoCurrentMatch)?;
        if current.is_completed {
            return Err(StoreError::MatchCompleted);
        }

        let side = scoring_team(&current.teams, player_id, event_type)
            .ok_or_else(|| StoreError::UnknownPlayer(player_id.to_string()))?;

        let event = MatchEvent::record(player_id, event_type, shot);
        log::debug!(
            "Match {}: {} by {} scores for {:?}",
            current.id,
            event.event_type.label(),
            player_id,
            side
        );

        current.events.push(event);
        current.score = update_score(&current.score, side);

        let completed = is_match_completed(&current.score);
        if completed {
            self.complete_match()?;
        }
        Ok(())
    }

    /// Remove the last event and recompute the score from scratch by
    /// replaying the remaining log. Undoing a match-ending event also
    /// reverts completion and drops the stale history entry.
    pub fn undo_last_event(&mut self) -> Result<()> {
        let current = self.current.as_mut().ok_or(StoreError::NoCurrentMatch)?;
        if current.events.pop().is_none() {
            return Err(StoreError::NoEventsToUndo);
        }

        current.score = replay_score(&current.teams, &current.events);
        let was_completed = current.is_completed;
        current.is_completed = false;
        current.winner = None;

        let remaining = current.events.len();
        let match_id = current.id.clone();
        log::debug!("Match {}: undid last event, {} remain", match_id, remaining);
        if was_completed {
            self.history.retain(|m| m.id != match_id);
        }
        Ok(())
    }

    /// Mark the current match completed and prepend it to the history.
    /// Completing an already-completed match changes nothing.
    pub fn complete_match(&mut self) -> Result<()> {
        let current = self.current.as_mut().ok_or(StoreError::NoCurrentMatch)?;
        if current.is_completed {
            return Ok(());
        }

        current.winner = winner(&current.score);
        current.is_completed = true;

        let completed = current.clone();
        log::info!(
            "Match {} completed {}-{} in sets, winner {:?}",
            completed.id,
            completed.score.sets[0],
            completed.score.sets[1],
            completed.winner
        );
        self.history.insert(0, completed);
        Ok(())
    }

    /// Clear the current match without touching history.
    pub fn reset_current_match(&mut self) {
        if let Some(current) = &self.current {
            log::info!("Reset current match {}", current.id);
        }
        self.current = None;
    }

    // ========================
    // Read accessors
    // ========================

    pub fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }

    /// Completed matches, most recent first.
    pub fn matches(&self) -> &[Match] {
        &self.history
    }
}

fn validate_setup(teams: &[Team; 2]) -> Result<()> {
    let mut names = std::collections::HashSet::new();
    let mut ids = std::collections::HashSet::new();

    for team in teams {
        for player in &team.players {
            let name = player.name.trim();
            if name.is_empty() {
                return Err(StoreError::InvalidMatchSetup(
                    "every player needs a name".to_string(),
                ));
            }
            if !names.insert(name.to_string()) {
                return Err(StoreError::InvalidMatchSetup(format!(
                    "duplicate player name: {}",
                    name
                )));
            }
            if !ids.insert(player.id.clone()) {
                return Err(StoreError::InvalidMatchSetup(format!(
                    "duplicate player id: {}",
                    player.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Player;
    use crate::models::score::{GamePoint, TeamSide};
    use crate::models::shot::{SmashSpec, SwingSide};

    fn test_teams() -> [Team; 2] {
        [
            Team::new("t1", [Player::new("p1", "Ana"), Player::new("p2", "Bea")]),
            Team::new("t2", [Player::new("p3", "Carla"), Player::new("p4", "Dora")]),
        ]
    }

    fn store_with_match() -> MatchStore {
        let mut store = MatchStore::new();
        store.create_match(test_teams(), "Court 1", "Friendly").unwrap();
        store
    }

    const SHOT: Shot = Shot::Groundstroke(SwingSide::Forehand);

    /// Score one point for the home team via a winner from p1.
    fn home_point(store: &mut MatchStore) {
        store.add_event("p1", EventType::Winner, SHOT).unwrap();
    }

    /// Score one point for the away team via a winner from p3.
    fn away_point(store: &mut MatchStore) {
        store.add_event("p3", EventType::Winner, SHOT).unwrap();
    }

    #[test]
    fn test_create_match_initial_state() {
        let store = store_with_match();
        let current = store.current_match().expect("current match");

        assert!(current.events.is_empty());
        assert_eq!(current.score.sets, [0, 0]);
        assert!(!current.is_completed);
        assert!(store.matches().is_empty());
    }

    #[test]
    fn test_create_match_rejects_duplicate_names() {
        let mut store = MatchStore::new();
        let teams = [
            Team::new("t1", [Player::new("p1", "Ana"), Player::new("p2", "Ana")]),
            Team::new("t2", [Player::new("p3", "Carla"), Player::new("p4", "Dora")]),
        ];

        let result = store.create_match(teams, "Court 1", "Friendly");
        assert!(matches!(result, Err(StoreError::InvalidMatchSetup(_))));
        assert!(store.current_match().is_none());
    }

    #[test]
    fn test_create_match_rejects_blank_name() {
        let mut store = MatchStore::new();
        let teams = [
            Team::new("t1", [Player::new("p1", "Ana"), Player::new("p2", "  ")]),
            Team::new("t2", [Player::new("p3", "Carla"), Player::new("p4", "Dora")]),
        ];

        let result = store.create_match(teams, "Court 1", "Friendly");
        assert!(matches!(result, Err(StoreError::InvalidMatchSetup(_))));
    }

    #[test]
    fn test_create_match_rejects_while_in_progress() {
        let mut store = store_with_match();
        home_point(&mut store);

        let result = store.create_match(test_teams(), "Court 2", "Friendly");
        assert!(matches!(result, Err(StoreError::MatchInProgress)));

        // The unfinished match is untouched.
        assert_eq!(store.current_match().unwrap().events.len(), 1);
    }

    #[test]
    fn test_add_event_without_match_is_an_error() {
        let mut store = MatchStore::new();
        let result = store.add_event("p1", EventType::Winner, SHOT);
        assert!(matches!(result, Err(StoreError::NoCurrentMatch)));
    }

    #[test]
    fn test_add_event_unknown_player_rejected_and_log_unchanged() {
        let mut store = store_with_match();
        let result = store.add_event("ghost", EventType::Winner, SHOT);

        assert!(matches!(result, Err(StoreError::UnknownPlayer(_))));
        assert!(store.current_match().unwrap().events.is_empty());
    }

    #[test]
    fn test_add_event_updates_score_and_log() {
        let mut store = store_with_match();
        store.add_event("p1", EventType::Winner, Shot::Smash(SmashSpec::Vibora)).unwrap();
        store.add_event("p3", EventType::UnforcedError, SHOT).unwrap();

        let current = store.current_match().unwrap();
        assert_eq!(current.events.len(), 2);
        assert_eq!(current.score.points, [GamePoint::Thirty, GamePoint::Love]);
    }

    #[test]
    fn test_undo_without_events_is_reported() {
        let mut store = store_with_match();
        assert!(matches!(store.undo_last_event(), Err(StoreError::NoEventsToUndo)));
    }

    #[test]
    fn test_undo_restores_previous_score() {
        let mut store = store_with_match();
        home_point(&mut store);
        home_point(&mut store);
        away_point(&mut store);

        store.undo_last_event().unwrap();

        let current = store.current_match().unwrap();
        assert_eq!(current.events.len(), 2);
        assert_eq!(current.score.points, [GamePoint::Thirty, GamePoint::Love]);
    }

    /// Drive the current match to completion with home winning every point.
    fn play_home_sweep(store: &mut MatchStore) {
        while !store.current_match().unwrap().is_completed {
            home_point(store);
        }
    }

    #[test]
    fn test_match_auto_completes_into_history() {
        let mut store = store_with_match();
        play_home_sweep(&mut store);

        let current = store.current_match().unwrap();
        assert!(current.is_completed);
        assert_eq!(current.winner, Some(TeamSide::Home));
        assert_eq!(current.score.sets, [2, 0]);

        assert_eq!(store.matches().len(), 1);
        assert_eq!(store.matches()[0].id, current.id);
    }

    #[test]
    fn test_no_events_accepted_after_completion() {
        let mut store = store_with_match();
        play_home_sweep(&mut store);

        let result = store.add_event("p1", EventType::Winner, SHOT);
        assert!(matches!(result, Err(StoreError::MatchCompleted)));
    }

    #[test]
    fn test_undo_of_match_ending_event_reopens_match() {
        let mut store = store_with_match();
        play_home_sweep(&mut store);
        assert_eq!(store.matches().len(), 1);

        store.undo_last_event().unwrap();

        let current = store.current_match().unwrap();
        assert!(!current.is_completed);
        assert!(current.winner.is_none());
        // The premature history entry is gone again.
        assert!(store.matches().is_empty());
    }

    #[test]
    fn test_complete_match_is_idempotent() {
        let mut store = store_with_match();
        play_home_sweep(&mut store);

        store.complete_match().unwrap();
        assert_eq!(store.matches().len(), 1);
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut store = MatchStore::new();

        store.create_match(test_teams(), "Court 1", "Round 1").unwrap();
        play_home_sweep(&mut store);
        let first_id = store.current_match().unwrap().id.clone();

        store.create_match(test_teams(), "Court 2", "Round 2").unwrap();
        play_home_sweep(&mut store);
        let second_id = store.current_match().unwrap().id.clone();

        assert_eq!(store.matches().len(), 2);
        assert_eq!(store.matches()[0].id, second_id);
        assert_eq!(store.matches()[1].id, first_id);
    }

    #[test]
    fn test_reset_clears_current_only() {
        let mut store = store_with_match();
        play_home_sweep(&mut store);

        store.reset_current_match();
        assert!(store.current_match().is_none());
        assert_eq!(store.matches().len(), 1);

        // After a reset a new match can start.
        store.create_match(test_teams(), "Court 3", "Final").unwrap();
        assert!(store.current_match().is_some());
    }

    #[test]
    fn test_save_roundtrip_preserves_state() {
        let mut store = store_with_match();
        home_point(&mut store);

        let save = store.to_save();
        let restored = MatchStore::from_save(&save);

        assert_eq!(restored.current_match(), store.current_match());
        assert_eq!(restored.matches(), store.matches());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const PLAYERS: [&str; 4] = ["p1", "p2", "p3", "p4"];
        const EVENT_TYPES: [EventType; 3] =
            [EventType::Winner, EventType::UnforcedError, EventType::ForcedError];

        proptest! {
            /// Property: undo after N events yields exactly the score of
            /// replaying the first N-1 events from scratch.
            #[test]
            fn prop_undo_equals_replay_of_prefix(
                seq in proptest::collection::vec((0usize..4, 0usize..3), 1..150)
            ) {
                let mut store = MatchStore::new();
                store.create_match(test_teams(), "Court 1", "Friendly").unwrap();

                for (player, event) in seq {
                    match store.add_event(PLAYERS[player], EVENT_TYPES[event], SHOT) {
                        Ok(()) => {}
                        Err(StoreError::MatchCompleted) => break,
                        Err(err) => panic!("unexpected error: {}", err),
                    }
                }

                let current = store.current_match().unwrap();
                let events = current.events.clone();
                let teams = current.teams.clone();
                prop_assume!(!events.is_empty());

                store.undo_last_event().unwrap();

                let expected = replay_score(&teams, &events[..events.len() - 1]);
                let current = store.current_match().unwrap();
                prop_assert_eq!(&current.score, &expected);
                prop_assert!(!current.is_completed);
                prop_assert!(current.winner.is_none());
            }

            /// Property: the stored score always equals the replay of the
            /// full event log -- the cache never drifts from its source.
            #[test]
            fn prop_score_is_projection_of_log(
                seq in proptest::collection::vec((0usize..4, 0usize..3), 0..150)
            ) {
                let mut store = MatchStore::new();
                store.create_match(test_teams(), "Court 1", "Friendly").unwrap();

                for (player, event) in seq {
                    match store.add_event(PLAYERS[player], EVENT_TYPES[event], SHOT) {
                        Ok(()) => {}
                        Err(StoreError::MatchCompleted) => break,
                        Err(err) => panic!("unexpected error: {}", err),
                    }
                    let current = store.current_match().unwrap();
                    let replayed = replay_score(&current.teams, &current.events);
                    prop_assert_eq!(&current.score, &replayed);
                }
            }
        }
    }
}
