//! Immutable per-call view of the host state
//!
//! The host owns the match state and passes it by value on every query;
//! nothing here is retained between calls. Counts are non-negative and
//! "the ball owner has a player in the ball zone" is assumed, not
//! enforced.

use serde::{Deserialize, Serialize};

use super::grid::{GridSpec, ZoneIndex};

/// Which side a team plays.
///
/// Home is host team 0 and attacks toward increasing x; Away is host
/// team 1 and attacks toward x = 0. No third value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Host team id (0 or 1)
    #[inline]
    pub const fn id(self) -> i32 {
        match self {
            TeamSide::Home => 0,
            TeamSide::Away => 1,
        }
    }

    /// Array slot (0 or 1)
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TeamSide::Home => 0,
            TeamSide::Away => 1,
        }
    }

    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(TeamSide::Home),
            1 => Some(TeamSide::Away),
            _ => None,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// One simulation step's snapshot: possession, ball zone and both
/// per-zone player-count arrays (flat, `x * rows + y` layout).
#[derive(Debug, Clone, Copy)]
pub struct PitchState<'a> {
    pub possession: TeamSide,
    pub ball: ZoneIndex,
    home_counts: &'a [i32],
    away_counts: &'a [i32],
}

impl<'a> PitchState<'a> {
    pub fn new(
        possession: TeamSide,
        ball: ZoneIndex,
        home_counts: &'a [i32],
        away_counts: &'a [i32],
    ) -> Self {
        Self { possession, ball, home_counts, away_counts }
    }

    /// Player count of `team` at `zone`; zero for offsets past the end of
    /// a short host array.
    #[inline]
    pub fn players_at(&self, grid: &GridSpec, team: TeamSide, zone: ZoneIndex) -> i32 {
        self.counts(team).get(zone.flat(grid.rows)).copied().unwrap_or(0)
    }

    /// The flat count array of `team`
    #[inline]
    pub fn counts(&self, team: TeamSide) -> &'a [i32] {
        match team {
            TeamSide::Home => self.home_counts,
            TeamSide::Away => self.away_counts,
        }
    }
}
