use serde::{Deserialize, Serialize};

/// A registered player. Identity is fixed once a match has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A padel pair. Exactly two players, fixed at match creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub players: [Player; 2],
}

impl Team {
    pub fn new(id: impl Into<String>, players: [Player; 2]) -> Self {
        Self { id: id.into(), players }
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Pair label for score boards and history rows, e.g. "Ana / Bea".
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.players[0].name, self.players[1].name)
    }
}
