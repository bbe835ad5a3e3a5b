//! Ball-recovery fallback placement
//!
//! When a possession event fails, the ball falls to the opposing player
//! nearest the losing team's attacking edge. "Nearest" is directional
//! scan order: columns walked from that edge backward, rows ascending
//! within a column.

use log::warn;

use super::grid::{GridSpec, ZoneIndex};
use super::snapshot::TeamSide;

/// Zone of the opposing player who takes the ball from `losing_team`.
///
/// Returns `None` when the opposing team has no players anywhere on the
/// grid. That breaks the host invariant that both teams field players;
/// the caller decides whether that is fatal.
pub fn find_nearest_opponent(
    grid: &GridSpec,
    losing_team: TeamSide,
    home_counts: &[i32],
    away_counts: &[i32],
) -> Option<ZoneIndex> {
    let (taker_counts, cols): (&[i32], Vec<u8>) = match losing_team {
        // Home lost the ball near its attacking edge; walk Away's zones
        // from x = cols-1 down.
        TeamSide::Home => (away_counts, (0..grid.cols).rev().collect()),
        TeamSide::Away => (home_counts, (0..grid.cols).collect()),
    };

    for x in cols {
        for y in 0..grid.rows {
            let zone = ZoneIndex::new(x, y);
            if taker_counts.get(zone.flat(grid.rows)).copied().unwrap_or(0) > 0 {
                return Some(zone);
            }
        }
    }

    warn!("recovery scan found no opposing player (losing_team={:?})", losing_team);
    None
}
