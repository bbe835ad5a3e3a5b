//! Zone geometry and the shot/pass models derived from it
//!
//! All positions are meters on the physical pitch. Zone centers, goal
//! positions and distances are pure functions of the grid configuration;
//! the caching of repeated lookups lives in [`super::rates`].

use serde::{Deserialize, Serialize};

use super::grid::{GridSpec, ZoneIndex};
use super::pitch_constants::{pitch, shot};
use super::snapshot::TeamSide;

/// Position in meters: .0 along the pitch (goal to goal), .1 across it
pub type MeterPos = (f64, f64);

/// Center of `zone` in meters
pub fn zone_center_m(grid: &GridSpec, zone: ZoneIndex) -> MeterPos {
    (
        (zone.x as f64 + 0.5) * grid.cell_len_x_m(),
        (zone.y as f64 + 0.5) * grid.cell_len_y_m(),
    )
}

/// The goal `team` defends: on its own goal line, vertically centered
pub fn goal_pos_m(team: TeamSide) -> MeterPos {
    let x = match team {
        TeamSide::Home => 0.0,
        TeamSide::Away => pitch::X_LEN_M,
    };
    (x, pitch::Y_LEN_M / 2.0)
}

/// Euclidean distance between two meter positions
#[inline]
pub fn distance_m(a: MeterPos, b: MeterPos) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from the center of `zone` to the goal `team` attacks
pub fn distance_to_opponent_goal_m(grid: &GridSpec, zone: ZoneIndex, team: TeamSide) -> f64 {
    distance_m(zone_center_m(grid, zone), goal_pos_m(team.opponent()))
}

/// Expected goals for a shot from `dist_m` meters: exp(-d / alpha)
#[inline]
pub fn expected_goal(dist_m: f64) -> f64 {
    (-dist_m / shot::ALPHA_M).exp()
}

/// Pass class by zone geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassClass {
    /// Flank-to-center ball along the attacking terminal column
    Cross,
    /// Chebyshev distance <= 1
    Short,
    /// Everything else
    Long,
}

/// Classify a pass from `from` to `to` for `team`.
///
/// Cross wins over Short: a ball into the central terminal zone from its
/// own column is a cross even though it is also adjacent.
pub fn classify_pass(grid: &GridSpec, team: TeamSide, from: ZoneIndex, to: ZoneIndex) -> PassClass {
    let terminal = grid.terminal_col(team);
    if from.x == terminal && to.x == terminal && to.y == grid.rows / 2 {
        return PassClass::Cross;
    }
    if from.chebyshev(to) <= 1 {
        PassClass::Short
    } else {
        PassClass::Long
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zone_center() {
        let grid = GridSpec::default();
        // cell is 11 x 36.5/3 meters
        let c = zone_center_m(&grid, ZoneIndex::new(0, 0));
        assert!((c.0 - 5.5).abs() < EPS, "center x should be 5.5, got {}", c.0);
        assert!((c.1 - 36.5 / 6.0).abs() < EPS, "center y should be {}, got {}", 36.5 / 6.0, c.1);

        let c = zone_center_m(&grid, ZoneIndex::new(4, 1));
        assert!((c.0 - 49.5).abs() < EPS);
        assert!((c.1 - 18.25).abs() < EPS);
    }

    #[test]
    fn test_goal_positions() {
        assert_eq!(goal_pos_m(TeamSide::Home), (0.0, 18.25));
        assert_eq!(goal_pos_m(TeamSide::Away), (55.0, 18.25));
    }

    #[test]
    fn test_distance_to_opponent_goal_is_symmetric_across_teams() {
        let grid = GridSpec::default();
        // Mirrored zones see mirrored goals at the same distance
        let d_home = distance_to_opponent_goal_m(&grid, ZoneIndex::new(3, 0), TeamSide::Home);
        let d_away = distance_to_opponent_goal_m(&grid, ZoneIndex::new(1, 0), TeamSide::Away);
        assert!((d_home - d_away).abs() < EPS, "mirror symmetry: {} vs {}", d_home, d_away);
    }

    #[test]
    fn test_distance_shrinks_toward_goal() {
        let grid = GridSpec::default();
        let mut last = f64::MAX;
        for x in 0..grid.cols {
            let d = distance_to_opponent_goal_m(&grid, ZoneIndex::new(x, 1), TeamSide::Home);
            assert!(d < last, "distance should shrink as Home advances: {} !< {}", d, last);
            last = d;
        }
        // Middle-row terminal zone sits half a cell from the goal line
        assert!((last - 5.5).abs() < EPS, "closest center should be 5.5m out, got {}", last);
    }

    #[test]
    fn test_expected_goal_decay() {
        assert!((expected_goal(0.0) - 1.0).abs() < EPS);
        let near = expected_goal(5.5);
        let far = expected_goal(49.5);
        assert!(near > far, "xg must decay with distance");
        assert!((expected_goal(7.1) - (-1.0f64).exp()).abs() < EPS);
    }

    #[test]
    fn test_pass_classification() {
        let grid = GridSpec::default();
        // Adjacent zone: short
        assert_eq!(
            classify_pass(&grid, TeamSide::Home, ZoneIndex::new(2, 1), ZoneIndex::new(2, 0)),
            PassClass::Short
        );
        // Full-length ball: long
        assert_eq!(
            classify_pass(&grid, TeamSide::Home, ZoneIndex::new(0, 1), ZoneIndex::new(4, 1)),
            PassClass::Long
        );
        // Terminal-column ball into the central zone: cross, for both flanks
        assert_eq!(
            classify_pass(&grid, TeamSide::Home, ZoneIndex::new(4, 0), ZoneIndex::new(4, 1)),
            PassClass::Cross
        );
        assert_eq!(
            classify_pass(&grid, TeamSide::Home, ZoneIndex::new(4, 2), ZoneIndex::new(4, 1)),
            PassClass::Cross
        );
        // Away crosses happen on column 0
        assert_eq!(
            classify_pass(&grid, TeamSide::Away, ZoneIndex::new(0, 2), ZoneIndex::new(0, 1)),
            PassClass::Cross
        );
        // Home passing on Away's terminal column is not a cross
        assert_eq!(
            classify_pass(&grid, TeamSide::Home, ZoneIndex::new(0, 0), ZoneIndex::new(0, 1)),
            PassClass::Short
        );
    }
}
