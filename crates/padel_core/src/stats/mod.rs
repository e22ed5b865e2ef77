//! Shot statistics derived from the event log.
//!
//! Everything here is recomputed on demand from `match.events`; there is no
//! separate statistics store to keep in sync with the log.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::events::EventType;
use crate::models::match_record::Match;
use crate::models::shot::{ShotSpecification, ShotType};

/// Shot-type -> specification -> count. Ordered maps keep serialized
/// output deterministic.
pub type ShotBreakdown = BTreeMap<ShotType, BTreeMap<ShotSpecification, u32>>;

/// Per-player counts and shot breakdowns for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerStatistics {
    pub player_id: String,
    pub winners: u32,
    pub unforced_errors: u32,
    pub forced_errors: u32,
    /// Count of all recorded events for this player.
    pub total_shots: u32,
    pub winner_breakdown: ShotBreakdown,
    pub unforced_error_breakdown: ShotBreakdown,
    pub forced_error_breakdown: ShotBreakdown,
}

/// Event-type totals across a whole match, for the match summary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchTotals {
    pub winners: u32,
    pub unforced_errors: u32,
    pub forced_errors: u32,
    pub total_events: u32,
}

/// Derive one player's statistics by filtering and grouping the match log.
pub fn player_statistics(record: &Match, player_id: &str) -> PlayerStatistics {
    let mut stats = PlayerStatistics { player_id: player_id.to_string(), ..Default::default() };

    for event in record.events.iter().filter(|e| e.player_id == player_id) {
        stats.total_shots += 1;

        let breakdown = match event.event_type {
            EventType::Winner => {
                stats.winners += 1;
                &mut stats.winner_breakdown
            }
            EventType::UnforcedError => {
                stats.unforced_errors += 1;
                &mut stats.unforced_error_breakdown
            }
            EventType::ForcedError => {
                stats.forced_errors += 1;
                &mut stats.forced_error_breakdown
            }
        };

        *breakdown
            .entry(event.shot.shot_type())
            .or_default()
            .entry(event.shot.specification())
            .or_insert(0) += 1;
    }

    stats
}

/// Match-wide event counts.
pub fn match_totals(record: &Match) -> MatchTotals {
    let mut totals = MatchTotals::default();
    for event in &record.events {
        totals.total_events += 1;
        match event.event_type {
            EventType::Winner => totals.winners += 1,
            EventType::UnforcedError => totals.unforced_errors += 1,
            EventType::ForcedError => totals.forced_errors += 1,
        }
    }
    totals
}

impl PlayerStatistics {
    /// Sum of all counts in one breakdown.
    fn breakdown_total(breakdown: &ShotBreakdown) -> u32 {
        breakdown.values().flat_map(|specs| specs.values()).sum()
    }

    /// Internal consistency: breakdown counts sum to their event-type count
    /// and the three event-type counts sum to the total.
    pub fn is_consistent(&self) -> bool {
        Self::breakdown_total(&self.winner_breakdown) == self.winners
            && Self::breakdown_total(&self.unforced_error_breakdown) == self.unforced_errors
            && Self::breakdown_total(&self.forced_error_breakdown) == self.forced_errors
            && self.winners + self.unforced_errors + self.forced_errors == self.total_shots
    }
}
