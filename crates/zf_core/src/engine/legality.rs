//! Legality predicates
//!
//! All functions are pure and fail closed: when a precondition is not met
//! (players present, ball present, destination in range) they return
//! false rather than erroring. The host guarantees that the *current*
//! zone of a query is valid; destination queries bound-check explicitly.

use super::grid::ZoneIndex;
use super::ruleset::Ruleset;
use super::snapshot::{PitchState, TeamSide};

// ============================================================================
// Possession / occupancy
// ============================================================================

/// True iff `team` currently holds the ball.
#[inline]
pub fn is_in_possession(state: &PitchState<'_>, team: TeamSide) -> bool {
    state.possession == team
}

/// True iff `team` holds the ball and the ball is in `zone`.
#[inline]
pub fn has_ball_in_zone(state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> bool {
    state.possession == team && state.ball == zone
}

/// True iff `team` has at least one player in `zone`.
#[inline]
pub fn has_players_in_zone(
    rules: &Ruleset,
    state: &PitchState<'_>,
    team: TeamSide,
    zone: ZoneIndex,
) -> bool {
    state.players_at(&rules.grid, team, zone) > 0
}

/// A zone is live while players occupy it and the match clock is running.
#[inline]
pub fn can_zone_act(players_in_zone: i32, time_left: i32) -> bool {
    players_in_zone > 0 && time_left > 0
}

/// Common gate for on-ball actions
#[inline]
fn on_ball(rules: &Ruleset, state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> bool {
    has_players_in_zone(rules, state, team, zone) && has_ball_in_zone(state, team, zone)
}

// ============================================================================
// Action predicates
// ============================================================================

/// Shooting requires the ball, a player, and (by default) a position
/// strictly past the half-line toward the opponent goal.
pub fn can_shoot(rules: &Ruleset, state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> bool {
    if !on_ball(rules, state, team, zone) {
        return false;
    }
    if !rules.shots_need_opponent_half {
        return true;
    }
    let midline = rules.grid.midline_col();
    match team {
        TeamSide::Home => zone.x > midline,
        TeamSide::Away => zone.x < midline,
    }
}

/// Dribbling requires the ball and a player, and a lone player in the own
/// keeper zone must stay: it may pass or shoot but not carry the ball out.
pub fn can_dribble(
    rules: &Ruleset,
    state: &PitchState<'_>,
    team: TeamSide,
    zone: ZoneIndex,
) -> bool {
    if !on_ball(rules, state, team, zone) {
        return false;
    }
    if rules.keeper_rule
        && zone == rules.grid.keeper_zone(team)
        && state.players_at(&rules.grid, team, zone) == 1
    {
        return false;
    }
    true
}

/// Passing requires the ball, a player, and at least one reachable
/// teammate in another zone at or ahead of the ball.
pub fn can_pass(rules: &Ruleset, state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> bool {
    if !on_ball(rules, state, team, zone) {
        return false;
    }
    let (first, last) = pass_scan_cols(rules, team, zone);
    for x in first..=last {
        for y in 0..rules.grid.rows {
            if can_pass_to(rules, state, team, zone, x as i32, y as i32) {
                return true;
            }
        }
    }
    false
}

/// Every zone a pass from `zone` may currently target, in scan order.
pub fn pass_targets(
    rules: &Ruleset,
    state: &PitchState<'_>,
    team: TeamSide,
    zone: ZoneIndex,
) -> Vec<ZoneIndex> {
    let mut targets = Vec::new();
    if !on_ball(rules, state, team, zone) {
        return targets;
    }
    let (first, last) = pass_scan_cols(rules, team, zone);
    for x in first..=last {
        for y in 0..rules.grid.rows {
            if can_pass_to(rules, state, team, zone, x as i32, y as i32) {
                targets.push(ZoneIndex::new(x, y));
            }
        }
    }
    targets
}

/// Column range a pass may target from `zone`
fn pass_scan_cols(rules: &Ruleset, team: TeamSide, zone: ZoneIndex) -> (u8, u8) {
    if !rules.forward_passes_only {
        return (0, rules.grid.cols - 1);
    }
    match team {
        TeamSide::Home => (zone.x, rules.grid.cols - 1),
        TeamSide::Away => (0, zone.x),
    }
}

/// Running requires players in the zone, and either company (more than
/// one) or a lone player that is neither carrying the ball nor pinned as
/// goalkeeper.
pub fn can_run(rules: &Ruleset, state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> bool {
    let players = state.players_at(&rules.grid, team, zone);
    if players == 0 {
        return false;
    }
    if players > 1 {
        return true;
    }
    if has_ball_in_zone(state, team, zone) {
        return false;
    }
    !(rules.keeper_rule && zone == rules.grid.keeper_zone(team))
}

/// Aggregate gate: any action at all is legal for `team` in `zone`.
pub fn can_team_act(
    rules: &Ruleset,
    state: &PitchState<'_>,
    team: TeamSide,
    zone: ZoneIndex,
) -> bool {
    can_shoot(rules, state, team, zone)
        || can_dribble(rules, state, team, zone)
        || can_pass(rules, state, team, zone)
        || can_run(rules, state, team, zone)
}

// ============================================================================
// Destination validity
// ============================================================================

/// A dribble may target any in-bounds zone.
#[inline]
pub fn can_dribble_to(rules: &Ruleset, to_x: i32, to_y: i32) -> bool {
    rules.grid.in_bounds(to_x, to_y)
}

/// A run may target any in-bounds zone.
#[inline]
pub fn can_run_to(rules: &Ruleset, to_x: i32, to_y: i32) -> bool {
    rules.grid.in_bounds(to_x, to_y)
}

/// A pass may target any in-bounds zone other than the source that holds
/// at least one teammate. The point query does not re-check possession;
/// [`can_pass`] applies the scan restriction.
pub fn can_pass_to(
    rules: &Ruleset,
    state: &PitchState<'_>,
    team: TeamSide,
    zone: ZoneIndex,
    to_x: i32,
    to_y: i32,
) -> bool {
    let Some(to) = rules.grid.zone(to_x, to_y) else {
        return false;
    };
    to != zone && state.players_at(&rules.grid, team, to) > 0
}
