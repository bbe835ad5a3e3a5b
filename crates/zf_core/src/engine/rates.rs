//! Rate evaluation
//!
//! Converts legal actions into fixed-point integer weights (×10,000) and
//! success/fail splits. All outputs are pure functions of the inputs; the
//! evaluator only holds two read-through memo caches (distance-to-goal
//! per team and zone, expected goal per distance). Both sit behind an
//! `RwLock` so one evaluator can be shared across host threads; a racing
//! fill recomputes the same value.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use super::geometry::{self, PassClass};
use super::grid::ZoneIndex;
use super::legality;
use super::pitch_constants::{duel, pass, rates};
use super::ruleset::Ruleset;
use super::snapshot::{PitchState, TeamSide};

pub struct RateEvaluator {
    rules: Ruleset,
    /// Distance to the attacked goal per (team, zone), lazily filled
    goal_distance: RwLock<Vec<Option<f64>>>,
    /// Expected goal per shot distance, keyed by the f64 bit pattern
    expected_goal: RwLock<HashMap<u64, f64>>,
}

impl Default for RateEvaluator {
    fn default() -> Self {
        Self::new(Ruleset::default())
    }
}

impl RateEvaluator {
    pub fn new(rules: Ruleset) -> Self {
        let slots = 2 * rules.grid.zone_count();
        Self {
            rules,
            goal_distance: RwLock::new(vec![None; slots]),
            expected_goal: RwLock::new(HashMap::new()),
        }
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    // ========================================================================
    // Cached geometry
    // ========================================================================

    #[inline]
    fn distance_slot(&self, team: TeamSide, zone: ZoneIndex) -> usize {
        team.index() * self.rules.grid.zone_count() + zone.flat(self.rules.grid.rows)
    }

    /// Distance (m) from the center of `zone` to the goal `team` attacks.
    pub fn distance_to_goal_m(&self, team: TeamSide, zone: ZoneIndex) -> f64 {
        let slot = self.distance_slot(team, zone);
        {
            let cache = self.goal_distance.read().unwrap_or_else(|e| e.into_inner());
            if let Some(d) = cache[slot] {
                return d;
            }
        }
        let d = geometry::distance_to_opponent_goal_m(&self.rules.grid, zone, team);
        debug!("goal distance fill: team={:?} zone=({},{}) d={:.3}m", team, zone.x, zone.y, d);
        let mut cache = self.goal_distance.write().unwrap_or_else(|e| e.into_inner());
        cache[slot] = Some(d);
        d
    }

    /// Expected goal for a shot from `dist_m`, memoized per distance.
    pub fn expected_goal(&self, dist_m: f64) -> f64 {
        let key = dist_m.to_bits();
        {
            let cache = self.expected_goal.read().unwrap_or_else(|e| e.into_inner());
            if let Some(&x) = cache.get(&key) {
                return x;
            }
        }
        let x = geometry::expected_goal(dist_m);
        debug!("expected goal fill: d={:.3}m xg={:.6}", dist_m, x);
        let mut cache = self.expected_goal.write().unwrap_or_else(|e| e.into_inner());
        *cache.entry(key).or_insert(x)
    }

    // ========================================================================
    // Action rates (legal -> empirical weight, else 0)
    // ========================================================================

    pub fn shoot_action_rate(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        zone: ZoneIndex,
    ) -> i32 {
        if legality::can_shoot(&self.rules, state, team, zone) {
            rates::SHOOT_WEIGHT
        } else {
            0
        }
    }

    pub fn dribble_action_rate(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        zone: ZoneIndex,
    ) -> i32 {
        if legality::can_dribble(&self.rules, state, team, zone) {
            rates::DRIBBLE_WEIGHT
        } else {
            0
        }
    }

    pub fn pass_action_rate(&self, state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> i32 {
        if legality::can_pass(&self.rules, state, team, zone) {
            rates::PASS_WEIGHT
        } else {
            0
        }
    }

    pub fn run_action_rate(&self, state: &PitchState<'_>, team: TeamSide, zone: ZoneIndex) -> i32 {
        if legality::can_run(&self.rules, state, team, zone) {
            rates::RUN_WEIGHT
        } else {
            0
        }
    }

    // ========================================================================
    // Shot outcome
    // ========================================================================

    /// Probability (×SCALE) that a shot from `zone` scores.
    pub fn shoot_success_rate(&self, team: TeamSide, zone: ZoneIndex) -> i32 {
        let xg = self.expected_goal(self.distance_to_goal_m(team, zone));
        (xg * rates::SCALE as f64) as i32
    }

    /// Probability (×SCALE) that a shot from `zone` misses.
    ///
    /// Computed as trunc((1 - xg) * SCALE) from the same cached xg, not as
    /// SCALE - success; the pair can sum to SCALE - 1.
    pub fn shoot_fail_rate(&self, team: TeamSide, zone: ZoneIndex) -> i32 {
        let xg = self.expected_goal(self.distance_to_goal_m(team, zone));
        ((1.0 - xg) * rates::SCALE as f64) as i32
    }

    // ========================================================================
    // Pass outcome
    // ========================================================================

    fn pass_base_rate(class: PassClass) -> f64 {
        match class {
            PassClass::Cross => pass::CROSS_RATE,
            PassClass::Short => pass::SHORT_RATE,
            PassClass::Long => pass::LONG_RATE,
        }
    }

    /// Success probability of a pass, before fixed-point scaling.
    /// Callers gate on [`legality::can_pass_to`]; this does not re-check.
    fn pass_success(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        from: ZoneIndex,
        to: ZoneIndex,
    ) -> f64 {
        let class = geometry::classify_pass(&self.rules.grid, team, from, to);
        let mut p = Self::pass_base_rate(class);
        if state.players_at(&self.rules.grid, team.opponent(), to) > 0 {
            p *= 1.0 - duel::INTERCEPT_RATE;
        }
        p
    }

    /// Probability (×SCALE) that a pass from `from` to `to` reaches a
    /// teammate.
    pub fn pass_success_rate(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        from: ZoneIndex,
        to: ZoneIndex,
    ) -> i32 {
        (self.pass_success(state, team, from, to) * rates::SCALE as f64) as i32
    }

    /// Probability (×SCALE) that the pass is lost.
    pub fn pass_fail_rate(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        from: ZoneIndex,
        to: ZoneIndex,
    ) -> i32 {
        ((1.0 - self.pass_success(state, team, from, to)) * rates::SCALE as f64) as i32
    }

    // ========================================================================
    // Dribble outcome
    // ========================================================================

    /// Probability (×SCALE) that a dribble in `zone` is dispossessed.
    /// Without an opposing player in the zone, failure is impossible.
    pub fn dribble_fail_rate(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        zone: ZoneIndex,
    ) -> i32 {
        if state.players_at(&self.rules.grid, team.opponent(), zone) == 0 {
            return 0;
        }
        (duel::INTERCEPT_RATE * rates::SCALE as f64) as i32
    }

    /// Complement of [`Self::dribble_fail_rate`], always summing to SCALE.
    pub fn dribble_success_rate(
        &self,
        state: &PitchState<'_>,
        team: TeamSide,
        zone: ZoneIndex,
    ) -> i32 {
        rates::SCALE - self.dribble_fail_rate(state, team, zone)
    }
}
