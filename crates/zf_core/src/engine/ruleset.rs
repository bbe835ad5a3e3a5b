//! Ruleset configuration
//!
//! The evaluator went through several historical variants (1-D grid,
//! 2-D grid, varying rule strictness). Those differences are unified
//! here as flags on one configuration value; the default is the
//! strictest, final variant.

use serde::{Deserialize, Serialize};

use super::grid::GridSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub grid: GridSpec,
    /// Shots are only legal from strictly past the half-line
    pub shots_need_opponent_half: bool,
    /// Passes may only target zones at or ahead of the ball along the
    /// attack direction
    pub forward_passes_only: bool,
    /// A lone player in the defensive middle zone is pinned as goalkeeper
    /// and may neither dribble nor run out of it
    pub keeper_rule: bool,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            shots_need_opponent_half: true,
            forward_passes_only: true,
            keeper_rule: true,
        }
    }
}
