//! Shot classification.
//!
//! The shot type tag determines which specifications are legal: a smash can
//! be a vibora or a bandeja, a volley only forehand or backhand. Modeling the
//! pair as a tagged union makes illegal combinations unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified shot: type plus the specification legal for that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shot_type", content = "specification", rename_all = "snake_case")]
pub enum Shot {
    Smash(SmashSpec),
    Volley(SwingSide),
    Groundstroke(SwingSide),
    Lob(SwingSide),
    Return(SwingSide),
    Bajada(SwingSide),
    Other(OtherSpec),
}

/// Specifications legal for a smash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmashSpec {
    Vibora,
    Bandeja,
    Rulo,
    Standard,
    Other,
}

/// Forehand/backhand side, the specification for most shot types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingSide {
    Forehand,
    Backhand,
}

/// Specifications legal for the catch-all "other" shot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherSpec {
    Forehand,
    Backhand,
    Smash,
}

/// Flat shot-type key used for grouping in statistics breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    Smash,
    Volley,
    Groundstroke,
    Lob,
    Return,
    Bajada,
    Other,
}

/// Flat specification key used for grouping in statistics breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotSpecification {
    Vibora,
    Bandeja,
    Rulo,
    Standard,
    Forehand,
    Backhand,
    Smash,
    Other,
}

impl Shot {
    pub fn shot_type(&self) -> ShotType {
        match self {
            Shot::Smash(_) => ShotType::Smash,
            Shot::Volley(_) => ShotType::Volley,
            Shot::Groundstroke(_) => ShotType::Groundstroke,
            Shot::Lob(_) => ShotType::Lob,
            Shot::Return(_) => ShotType::Return,
            Shot::Bajada(_) => ShotType::Bajada,
            Shot::Other(_) => ShotType::Other,
        }
    }

    pub fn specification(&self) -> ShotSpecification {
        match self {
            Shot::Smash(spec) => match spec {
                SmashSpec::Vibora => ShotSpecification::Vibora,
                SmashSpec::Bandeja => ShotSpecification::Bandeja,
                SmashSpec::Rulo => ShotSpecification::Rulo,
                SmashSpec::Standard => ShotSpecification::Standard,
                SmashSpec::Other => ShotSpecification::Other,
            },
            Shot::Volley(side)
            | Shot::Groundstroke(side)
            | Shot::Lob(side)
            | Shot::Return(side)
            | Shot::Bajada(side) => match side {
                SwingSide::Forehand => ShotSpecification::Forehand,
                SwingSide::Backhand => ShotSpecification::Backhand,
            },
            Shot::Other(spec) => match spec {
                OtherSpec::Forehand => ShotSpecification::Forehand,
                OtherSpec::Backhand => ShotSpecification::Backhand,
                OtherSpec::Smash => ShotSpecification::Smash,
            },
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ShotType::Smash => "Smash",
            ShotType::Volley => "Volley",
            ShotType::Groundstroke => "Groundstroke",
            ShotType::Lob => "Lob",
            ShotType::Return => "Return",
            ShotType::Bajada => "Bajada",
            ShotType::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for ShotSpecification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ShotSpecification::Vibora => "Vibora",
            ShotSpecification::Bandeja => "Bandeja",
            ShotSpecification::Rulo => "Rulo",
            ShotSpecification::Standard => "Standard",
            ShotSpecification::Forehand => "Forehand",
            ShotSpecification::Backhand => "Backhand",
            ShotSpecification::Smash => "Smash",
            ShotSpecification::Other => "Other",
        };
        write!(f, "{}", label)
    }
}
