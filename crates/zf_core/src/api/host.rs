//! Integer-only entry points for the model-checking host
//!
//! The host runtime restricts call signatures to primitive ints and flat
//! int arrays, and return values to bool / int / int array; all
//! probability outputs are fixed-point ×10,000. Every function here
//! evaluates against a process-wide evaluator with the default ruleset
//! and fails closed on malformed input (unknown team id, out-of-range
//! zone): legality degrades to `false`, rates to `0`.

use log::warn;

use super::DEFAULT_EVALUATOR;
use crate::engine::{legality, recovery, PitchState, Ruleset, TeamSide, ZoneIndex};

/// Returned by [`find_nearest_player_to_take_ball`] when the opposing
/// team has no players anywhere. The value is fixed by the host wire
/// contract; the coordinate is far outside any grid.
pub const NO_OPPONENT_SENTINEL: [i32; 2] = [69, 69];

/// A fully parsed zone query
struct Query<'a> {
    state: PitchState<'a>,
    team: TeamSide,
    zone: ZoneIndex,
}

fn rules() -> &'static Ruleset {
    DEFAULT_EVALUATOR.rules()
}

fn parse_query<'a>(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &'a [i32],
    away_counts: &'a [i32],
) -> Option<Query<'a>> {
    let grid = rules().grid;
    let team = TeamSide::from_id(team)?;
    let possession = TeamSide::from_id(possession)?;
    let zone = grid.zone(zone_x, zone_y)?;
    let ball = grid.zone(ball_x, ball_y)?;
    Some(Query { state: PitchState::new(possession, ball, home_counts, away_counts), team, zone })
}

/// Rate queries arrive without an explicit possession/ball pair; the host
/// only issues them for the team on the ball at the queried zone.
fn parse_on_ball_query<'a>(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    home_counts: &'a [i32],
    away_counts: &'a [i32],
) -> Option<Query<'a>> {
    parse_query(team, zone_x, zone_y, team, zone_x, zone_y, home_counts, away_counts)
}

// ============================================================================
// Legality queries
// ============================================================================

pub fn is_team_in_possession_of_ball(team: i32, possession: i32) -> bool {
    TeamSide::from_id(team).is_some() && team == possession
}

/// A zone can act while players occupy it and the clock is running.
pub fn can_zone_act(players_in_zone: i32, time_left: i32) -> bool {
    legality::can_zone_act(players_in_zone, time_left)
}

pub fn does_team_have_ball_in_zone(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
) -> bool {
    TeamSide::from_id(team).is_some()
        && team == possession
        && zone_x == ball_x
        && zone_y == ball_y
        && rules().grid.in_bounds(zone_x, zone_y)
}

pub fn does_team_have_players_in_zone(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    let Some(team) = TeamSide::from_id(team) else {
        return false;
    };
    let Some(zone) = rules().grid.zone(zone_x, zone_y) else {
        return false;
    };
    let counts = match team {
        TeamSide::Home => home_counts,
        TeamSide::Away => away_counts,
    };
    counts.get(zone.flat(rules().grid.rows)).copied().unwrap_or(0) > 0
}

pub fn can_zone_team_shoot(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(false, |q| legality::can_shoot(rules(), &q.state, q.team, q.zone))
}

pub fn can_zone_team_dribble(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(false, |q| legality::can_dribble(rules(), &q.state, q.team, q.zone))
}

pub fn can_zone_team_pass(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(false, |q| legality::can_pass(rules(), &q.state, q.team, q.zone))
}

pub fn can_zone_team_run(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(false, |q| legality::can_run(rules(), &q.state, q.team, q.zone))
}

/// Aggregate gate: true iff any of shoot/dribble/pass/run is legal.
pub fn can_team_zone_act(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(false, |q| legality::can_team_act(rules(), &q.state, q.team, q.zone))
}

pub fn can_dribble_to_zone(to_x: i32, to_y: i32) -> bool {
    legality::can_dribble_to(rules(), to_x, to_y)
}

pub fn can_run_to_zone(to_x: i32, to_y: i32) -> bool {
    legality::can_run_to(rules(), to_x, to_y)
}

pub fn can_pass_to_zone(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    to_x: i32,
    to_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> bool {
    parse_on_ball_query(team, zone_x, zone_y, home_counts, away_counts)
        .map_or(false, |q| legality::can_pass_to(rules(), &q.state, q.team, q.zone, to_x, to_y))
}

// ============================================================================
// Rate queries
// ============================================================================

pub fn shoot_action_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(0, |q| DEFAULT_EVALUATOR.shoot_action_rate(&q.state, q.team, q.zone))
}

pub fn dribble_action_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(0, |q| DEFAULT_EVALUATOR.dribble_action_rate(&q.state, q.team, q.zone))
}

pub fn pass_action_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(0, |q| DEFAULT_EVALUATOR.pass_action_rate(&q.state, q.team, q.zone))
}

pub fn run_action_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    possession: i32,
    ball_x: i32,
    ball_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    parse_query(team, zone_x, zone_y, possession, ball_x, ball_y, home_counts, away_counts)
        .map_or(0, |q| DEFAULT_EVALUATOR.run_action_rate(&q.state, q.team, q.zone))
}

pub fn shoot_success_rate(team: i32, zone_x: i32, zone_y: i32) -> i32 {
    let Some(team) = TeamSide::from_id(team) else {
        return 0;
    };
    let Some(zone) = rules().grid.zone(zone_x, zone_y) else {
        return 0;
    };
    DEFAULT_EVALUATOR.shoot_success_rate(team, zone)
}

pub fn shoot_fail_rate(team: i32, zone_x: i32, zone_y: i32) -> i32 {
    let Some(team) = TeamSide::from_id(team) else {
        return 0;
    };
    let Some(zone) = rules().grid.zone(zone_x, zone_y) else {
        return 0;
    };
    DEFAULT_EVALUATOR.shoot_fail_rate(team, zone)
}

pub fn pass_success_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    to_x: i32,
    to_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    let Some(q) = parse_on_ball_query(team, zone_x, zone_y, home_counts, away_counts) else {
        return 0;
    };
    let Some(to) = rules().grid.zone(to_x, to_y) else {
        return 0;
    };
    DEFAULT_EVALUATOR.pass_success_rate(&q.state, q.team, q.zone, to)
}

pub fn pass_fail_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    to_x: i32,
    to_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    let Some(q) = parse_on_ball_query(team, zone_x, zone_y, home_counts, away_counts) else {
        return 0;
    };
    let Some(to) = rules().grid.zone(to_x, to_y) else {
        return 0;
    };
    DEFAULT_EVALUATOR.pass_fail_rate(&q.state, q.team, q.zone, to)
}

pub fn dribble_success_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    parse_on_ball_query(team, zone_x, zone_y, home_counts, away_counts)
        .map_or(0, |q| DEFAULT_EVALUATOR.dribble_success_rate(&q.state, q.team, q.zone))
}

pub fn dribble_fail_rate(
    team: i32,
    zone_x: i32,
    zone_y: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> i32 {
    parse_on_ball_query(team, zone_x, zone_y, home_counts, away_counts)
        .map_or(0, |q| DEFAULT_EVALUATOR.dribble_fail_rate(&q.state, q.team, q.zone))
}

// ============================================================================
// Recovery query
// ============================================================================

/// Zone `[x, y]` of the opposing player who takes the ball after
/// `losing_team` loses it. Returns [`NO_OPPONENT_SENTINEL`] when no
/// opposing player exists anywhere; that breaks the host's own invariant
/// (a team with zero players) and is logged before the sentinel goes out.
pub fn find_nearest_player_to_take_ball(
    losing_team: i32,
    home_counts: &[i32],
    away_counts: &[i32],
) -> [i32; 2] {
    let Some(team) = TeamSide::from_id(losing_team) else {
        warn!("find_nearest_player_to_take_ball: unknown team id {}", losing_team);
        return NO_OPPONENT_SENTINEL;
    };
    match recovery::find_nearest_opponent(&rules().grid, team, home_counts, away_counts) {
        Some(zone) => [zone.x as i32, zone.y as i32],
        None => NO_OPPONENT_SENTINEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONES: usize = 15;

    fn counts(placed: &[(i32, i32, i32)]) -> Vec<i32> {
        let mut v = vec![0; ZONES];
        for &(x, y, n) in placed {
            v[(x * 3 + y) as usize] = n;
        }
        v
    }

    #[test]
    fn test_scenario_attacking_zone() {
        // Home holds the ball at (3,1) with two players and a runner ahead
        let home = counts(&[(3, 1, 2), (4, 1, 1)]);
        let away = counts(&[(4, 1, 1), (0, 1, 1)]);

        assert!(can_zone_team_shoot(0, 3, 1, 0, 3, 1, &home, &away));
        assert!(can_zone_team_dribble(0, 3, 1, 0, 3, 1, &home, &away));
        assert!(can_zone_team_pass(0, 3, 1, 0, 3, 1, &home, &away));
        assert!(can_zone_team_run(0, 3, 1, 0, 3, 1, &home, &away));
        assert!(can_team_zone_act(0, 3, 1, 0, 3, 1, &home, &away));

        // The defending side cannot act on the ball
        assert!(!can_zone_team_shoot(1, 3, 1, 0, 3, 1, &home, &away));
        assert!(!can_team_zone_act(1, 0, 0, 0, 3, 1, &home, &away));

        // Rates mirror legality
        assert_eq!(shoot_action_rate(0, 3, 1, 0, 3, 1, &home, &away), 96);
        assert_eq!(pass_action_rate(0, 3, 1, 0, 3, 1, &home, &away), 3_743);
        assert_eq!(shoot_action_rate(1, 3, 1, 0, 3, 1, &home, &away), 0);

        // Pass into the occupied (4,1): short class, reduced by intercept
        let s = pass_success_rate(0, 3, 1, 4, 1, &home, &away);
        assert_eq!(s, 5_599);
        assert_eq!(pass_fail_rate(0, 3, 1, 4, 1, &home, &away), 4_400);

        // Dribble at (3,1) is unopposed
        assert_eq!(dribble_fail_rate(0, 3, 1, &home, &away), 0);
        assert_eq!(dribble_success_rate(0, 3, 1, &home, &away), 10_000);
    }

    #[test]
    fn test_fail_closed_on_malformed_input() {
        let home = counts(&[(3, 1, 1)]);
        let away = counts(&[]);

        // Unknown team ids
        assert!(!can_zone_team_shoot(2, 3, 1, 0, 3, 1, &home, &away));
        assert!(!is_team_in_possession_of_ball(-1, -1));
        assert_eq!(shoot_success_rate(2, 3, 1), 0);

        // Out-of-range zones
        assert!(!can_zone_team_pass(0, 5, 1, 0, 3, 1, &home, &away));
        assert_eq!(shoot_success_rate(0, 0, 9), 0);
        assert!(!can_dribble_to_zone(5, 0));
        assert!(!can_run_to_zone(0, -1));
        assert!(!can_pass_to_zone(0, 3, 1, 7, 7, &home, &away));
    }

    #[test]
    fn test_shoot_split_consistency() {
        for x in 0..5 {
            for y in 0..3 {
                for team in 0..2 {
                    let sum = shoot_success_rate(team, x, y) + shoot_fail_rate(team, x, y);
                    assert!(
                        (9_999..=10_000).contains(&sum),
                        "split for team {} zone ({},{}) sums to {}",
                        team,
                        x,
                        y,
                        sum
                    );
                }
            }
        }
    }

    #[test]
    fn test_recovery_sentinel_and_scan() {
        let home = counts(&[]);
        let away = counts(&[(3, 2, 1)]);
        assert_eq!(find_nearest_player_to_take_ball(0, &home, &away), [3, 2]);

        let empty = counts(&[]);
        assert_eq!(find_nearest_player_to_take_ball(0, &empty, &empty), NO_OPPONENT_SENTINEL);
        assert_eq!(find_nearest_player_to_take_ball(9, &empty, &empty), NO_OPPONENT_SENTINEL);
    }

    #[test]
    fn test_possession_helpers() {
        assert!(is_team_in_possession_of_ball(0, 0));
        assert!(!is_team_in_possession_of_ball(0, 1));
        assert!(can_zone_act(3, 90));
        assert!(!can_zone_act(3, 0));

        assert!(does_team_have_ball_in_zone(0, 2, 1, 0, 2, 1));
        assert!(!does_team_have_ball_in_zone(0, 2, 1, 1, 2, 1));
        assert!(!does_team_have_ball_in_zone(0, 2, 1, 0, 2, 0));

        let home = counts(&[(1, 1, 1)]);
        let away = counts(&[]);
        assert!(does_team_have_players_in_zone(0, 1, 1, &home, &away));
        assert!(!does_team_have_players_in_zone(1, 1, 1, &home, &away));
        assert!(!does_team_have_players_in_zone(0, 1, 2, &home, &away));
    }
}
