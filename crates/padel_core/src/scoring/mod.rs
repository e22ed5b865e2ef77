//! Score state machine.
//!
//! Pure transitions from a score snapshot plus a "team scored a point"
//! signal to the next snapshot. Handles game, set and match completion,
//! golden point at deuce, the tiebreak at games 6-6, and the final tiebreak
//! to 10 that replaces a third set once sets reach 1-1.
//!
//! Format rules:
//! - No-advantage scoring: at 40-40 the next point takes the game outright.
//! - A set is won at 7 games (7-5, 7-6) or at 6 games with the opponent at
//!   4 or fewer. Games 6-6 enter a tiebreak to 7, margin of two.
//! - Best of 3 sets, but the decisive third set is replaced by a single
//!   tiebreak to 10, margin of two. Its winner wins the match.

use crate::models::score::{GamePoint, Score, TeamSide, Tiebreak};

/// Apply one point for `scoring_team` to `score`.
///
/// Pure and total: any previously-valid score plus either side yields the
/// next valid score.
pub fn update_score(score: &Score, scoring_team: TeamSide) -> Score {
    let mut next = score.clone();

    if let Some(tiebreak) = next.tiebreak {
        resolve_tiebreak_point(&mut next, tiebreak, scoring_team);
        return next;
    }

    let us = scoring_team.index();
    let both_at_forty =
        next.points[0] == GamePoint::Forty && next.points[1] == GamePoint::Forty;

    if both_at_forty {
        // Golden point: the next point at deuce decides the game.
        award_game(&mut next, scoring_team);
    } else if next.points[us] == GamePoint::Forty {
        award_game(&mut next, scoring_team);
    } else {
        next.points[us] = next.points[us].next();
    }

    next
}

/// `true` once either side holds 2 sets.
pub fn is_match_completed(score: &Score) -> bool {
    score.sets[0] == 2 || score.sets[1] == 2
}

/// The side holding 2 sets, if any.
pub fn winner(score: &Score) -> Option<TeamSide> {
    if score.sets[0] == 2 {
        Some(TeamSide::Home)
    } else if score.sets[1] == 2 {
        Some(TeamSide::Away)
    } else {
        None
    }
}

fn resolve_tiebreak_point(score: &mut Score, mut tiebreak: Tiebreak, scoring_team: TeamSide) {
    let us = scoring_team.index();
    let them = scoring_team.opponent().index();

    tiebreak.points[us] += 1;

    let won = tiebreak.points[us] >= tiebreak.target()
        && tiebreak.points[us].saturating_sub(tiebreak.points[them]) >= 2;

    if !won {
        score.tiebreak = Some(tiebreak);
        return;
    }

    if tiebreak.is_final_tiebreak {
        // Match-deciding tiebreak: the set is the match, nothing to reset.
        score.sets[us] += 1;
        score.tiebreak = None;
    } else {
        award_set(score, scoring_team);
    }
}

fn award_game(score: &mut Score, side: TeamSide) {
    let us = side.index();
    let them = side.opponent().index();

    score.games[us] += 1;
    score.points = [GamePoint::Love, GamePoint::Love];

    if score.games[us] == 7 || (score.games[us] == 6 && score.games[them] <= 4) {
        award_set(score, side);
    } else if score.games[us] == 6 && score.games[them] == 6 {
        score.tiebreak = Some(Tiebreak::regular());
    }
}

fn award_set(score: &mut Score, side: TeamSide) {
    score.sets[side.index()] += 1;
    score.games = [0, 0];
    // At one set apiece the format skips a third set and plays a single
    // tiebreak to 10 for the match.
    score.tiebreak = if score.sets == [1, 1] { Some(Tiebreak::match_decider()) } else { None };
}
