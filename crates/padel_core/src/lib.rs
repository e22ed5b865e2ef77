//! # padel_core - Padel Match Tracking Core
//!
//! This library provides the scoring and tracking core for a padel match
//! recording app, with a JSON API for easy integration with mobile UI
//! layers.
//!
//! ## Features
//! - Deterministic score state machine (points, games, sets, golden point,
//!   tiebreaks, final tiebreak to 10)
//! - Append-only event ledger with undo by full replay
//! - Per-player shot statistics derived from the event log
//! - Compressed, checksummed save snapshots

pub mod api;
pub mod error;
pub mod ledger;
pub mod models;
pub mod save;
pub mod scoring;
pub mod state;
pub mod stats;

// Re-export main API functions
pub use api::{
    add_event_json, complete_match_json, create_match_json, current_match_json,
    match_history_json, player_statistics_json, reset_match_json, undo_last_event_json,
};
pub use error::{Result, StoreError};

// Re-export core model types
pub use models::{
    EventType, GamePoint, Match, MatchEvent, MatchSummary, OtherSpec, Player, Score, Shot,
    ShotSpecification, ShotType, SmashSpec, SwingSide, Team, TeamSide, Tiebreak,
};

// Re-export scoring and ledger functions
pub use ledger::{replay_score, scoring_team};
pub use scoring::{is_match_completed, update_score, winner};

// Re-export state management
pub use state::MatchStore;

// Re-export statistics
pub use stats::{match_totals, player_statistics, MatchTotals, PlayerStatistics};

// Re-export save system
pub use save::{SaveError, SaveManager, TrackerSave, SAVE_VERSION};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
