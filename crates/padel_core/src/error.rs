use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    InvalidMatchSetup(String),
    MatchInProgress,
    NoCurrentMatch,
    MatchCompleted,
    NoEventsToUndo,
    UnknownPlayer(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::InvalidMatchSetup(msg) => {
                write!(f, "Invalid match setup: {}", msg)
            }
            StoreError::MatchInProgress => {
                write!(f, "A match is already in progress")
            }
            StoreError::NoCurrentMatch => {
                write!(f, "No current match")
            }
            StoreError::MatchCompleted => {
                write!(f, "Match is already completed")
            }
            StoreError::NoEventsToUndo => {
                write!(f, "No events to undo")
            }
            StoreError::UnknownPlayer(player_id) => {
                write!(f, "Unknown player: {}", player_id)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type Result<T> = std::result::Result<T, StoreError>;
