pub mod events;
pub mod match_record;
pub mod player;
pub mod score;
pub mod shot;

pub use events::{EventType, MatchEvent};
pub use match_record::{Match, MatchSummary};
pub use player::{Player, Team};
pub use score::{GamePoint, Score, TeamSide, Tiebreak};
pub use shot::{OtherSpec, Shot, ShotSpecification, ShotType, SmashSpec, SwingSide};
