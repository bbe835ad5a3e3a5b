//! Zone grid topology
//!
//! The pitch is discretized into a `cols` x `rows` grid of zones. The x
//! axis runs goal line to goal line (Home attacks toward `cols - 1`), the
//! y axis runs touchline to touchline. Flat indexing matches the host's
//! count arrays: `flat = x * rows + y`.

use serde::{Deserialize, Serialize};

use super::pitch_constants::{grid, pitch};
use super::snapshot::TeamSide;

/// A zone on the grid. Both axes are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneIndex {
    pub x: u8,
    pub y: u8,
}

impl ZoneIndex {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Flat offset into a host player-count array
    #[inline]
    pub fn flat(self, rows: u8) -> usize {
        (self.x as usize) * (rows as usize) + (self.y as usize)
    }

    /// Chebyshev distance to another zone
    #[inline]
    pub fn chebyshev(self, other: ZoneIndex) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Grid configuration. Dimensions are configuration values, not inline
/// literals; the reference setup is 5x3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cols: u8,
    pub rows: u8,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { cols: grid::COLS, rows: grid::ROWS }
    }
}

impl GridSpec {
    #[inline]
    pub fn zone_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Cell length (m) along the pitch
    #[inline]
    pub fn cell_len_x_m(&self) -> f64 {
        pitch::X_LEN_M / self.cols as f64
    }

    /// Cell length (m) across the pitch
    #[inline]
    pub fn cell_len_y_m(&self) -> f64 {
        pitch::Y_LEN_M / self.rows as f64
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i32 && y < self.rows as i32
    }

    /// Validated zone from raw host coordinates
    #[inline]
    pub fn zone(&self, x: i32, y: i32) -> Option<ZoneIndex> {
        if self.in_bounds(x, y) {
            Some(ZoneIndex::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Column at the attacking end for `team`
    #[inline]
    pub fn terminal_col(&self, team: TeamSide) -> u8 {
        match team {
            TeamSide::Home => self.cols - 1,
            TeamSide::Away => 0,
        }
    }

    /// Column on the half-line; a shot is only on from strictly past it
    #[inline]
    pub fn midline_col(&self) -> u8 {
        self.cols / 2
    }

    /// The defensive-edge middle-row zone that must keep a goalkeeper
    #[inline]
    pub fn keeper_zone(&self, team: TeamSide) -> ZoneIndex {
        let x = match team {
            TeamSide::Home => 0,
            TeamSide::Away => self.cols - 1,
        };
        ZoneIndex::new(x, self.rows / 2)
    }

    /// Iterate all zones, x-major then y (the flat-array order)
    pub fn zones(self) -> impl Iterator<Item = ZoneIndex> {
        (0..self.cols).flat_map(move |x| (0..self.rows).map(move |y| ZoneIndex::new(x, y)))
    }
}
