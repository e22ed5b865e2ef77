use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::shot::Shot;
use crate::save::format::current_timestamp;

/// How a point ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UnforcedError,
    Winner,
    ForcedError,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::UnforcedError => "Unforced Error",
            EventType::Winner => "Winner",
            EventType::ForcedError => "Forced Error",
        }
    }
}

/// A point-ending event attributed to one player.
///
/// Events are immutable once recorded. The event log is append-only except
/// for undo, which truncates the last element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: String,
    pub player_id: String,
    pub event_type: EventType,
    pub shot: Shot,
    /// Unix milliseconds at recording time.
    pub timestamp_ms: u64,
}

impl MatchEvent {
    /// Record a new event with a fresh id and the current wall-clock time.
    pub fn record(player_id: impl Into<String>, event_type: EventType, shot: Shot) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_id: player_id.into(),
            event_type,
            shot,
            timestamp_ms: current_timestamp(),
        }
    }
}
