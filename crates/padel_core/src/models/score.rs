use serde::{Deserialize, Serialize};

/// One of the two sides of a match. `Home` is the first team in the match
/// setup, `Away` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    /// Index into the `[home, away]` pairs used throughout the score.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TeamSide::Home => 0,
            TeamSide::Away => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Point steps of a normal game. Serialized with the traditional tennis
/// labels so the wire format reads "0" / "15" / "30" / "40".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePoint {
    #[default]
    #[serde(rename = "0")]
    Love,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "40")]
    Forty,
}

impl GamePoint {
    /// Advance one step along 0 -> 15 -> 30 -> 40. Saturates at 40; the
    /// state machine awards the game before this would be reached again.
    pub fn next(self) -> GamePoint {
        match self {
            GamePoint::Love => GamePoint::Fifteen,
            GamePoint::Fifteen => GamePoint::Thirty,
            GamePoint::Thirty => GamePoint::Forty,
            GamePoint::Forty => GamePoint::Forty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GamePoint::Love => "0",
            GamePoint::Fifteen => "15",
            GamePoint::Thirty => "30",
            GamePoint::Forty => "40",
        }
    }
}

/// Tiebreak in progress. A regular tiebreak (games 6-6) plays to 7; the
/// final tiebreak (sets 1-1) replaces the third set and plays to 10. Both
/// require a margin of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiebreak {
    pub points: [u8; 2],
    pub is_final_tiebreak: bool,
}

impl Tiebreak {
    /// Tiebreak to 7 at games 6-6.
    pub fn regular() -> Self {
        Self { points: [0, 0], is_final_tiebreak: false }
    }

    /// Tiebreak to 10 replacing the third set at sets 1-1.
    pub fn match_decider() -> Self {
        Self { points: [0, 0], is_final_tiebreak: true }
    }

    pub fn target(&self) -> u8 {
        if self.is_final_tiebreak {
            10
        } else {
            7
        }
    }
}

/// Live scoring snapshot: sets, games in the current set, points in the
/// current game, and an optional tiebreak.
///
/// Once `tiebreak` is set, point-level scoring routes into it and `points`
/// stays at the reset value. The score is always a projection of the match
/// event log, never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub sets: [u8; 2],
    pub games: [u8; 2],
    pub points: [GamePoint; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<Tiebreak>,
}

impl Score {
    /// Score at the start of a match: 0-0 sets, 0-0 games, love all.
    pub fn initial() -> Self {
        Self {
            sets: [0, 0],
            games: [0, 0],
            points: [GamePoint::Love, GamePoint::Love],
            tiebreak: None,
        }
    }

    /// Point column shown for one side: tiebreak points while a tiebreak is
    /// live, game points otherwise.
    pub fn point_display(&self, side: TeamSide) -> String {
        match &self.tiebreak {
            Some(tiebreak) => tiebreak.points[side.index()].to_string(),
            None => self.points[side.index()].label().to_string(),
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::initial()
    }
}
