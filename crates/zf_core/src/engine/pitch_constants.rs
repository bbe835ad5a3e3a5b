//! Numeric constants for the zone evaluator
//!
//! Geometry matches a 7-a-side pitch. The empirical action weights were
//! fitted offline against the StatsBomb open event data (proportion of
//! Shot / Carry / Pass events), the shot model against shot-distance
//! scoring frequencies.

/// Pitch geometry (7v7 field)
pub mod pitch {
    /// Field length (m), goal line to goal line
    pub const X_LEN_M: f64 = 55.0;
    /// Field width (m), touchline to touchline
    pub const Y_LEN_M: f64 = 36.5;
}

/// Zone grid defaults
pub mod grid {
    /// Columns along the length of the pitch
    pub const COLS: u8 = 5;
    /// Rows across the width of the pitch
    pub const ROWS: u8 = 3;
}

/// Fixed-point rate encoding
pub mod rates {
    /// Scale factor: probability 1.0 == 10_000
    pub const SCALE: i32 = 10_000;

    // ========================================
    // Empirical action weights (per SCALE)
    // ========================================

    /// Weight of attempting a shot when legal
    pub const SHOOT_WEIGHT: i32 = 96;
    /// Weight of dribbling forward when legal
    pub const DRIBBLE_WEIGHT: i32 = 3_080;
    /// Weight of an off-ball run when legal (shares the carry proportion)
    pub const RUN_WEIGHT: i32 = 3_080;
    /// Weight of passing when legal
    pub const PASS_WEIGHT: i32 = 3_743;
}

/// Shot model
pub mod shot {
    /// Exponential decay length (m): xg = exp(-distance / ALPHA_M)
    pub const ALPHA_M: f64 = 7.1;
}

/// Pass model
pub mod pass {
    /// Base success rate of a short pass (Chebyshev distance <= 1)
    pub const SHORT_RATE: f64 = 0.75;
    /// Base success rate of any longer ground pass
    pub const LONG_RATE: f64 = 0.428571429;
    /// Base success rate of a cross into the central terminal zone
    pub const CROSS_RATE: f64 = 0.342857143;
}

/// Contested-possession model
pub mod duel {
    /// Probability that an opposing player in the target zone wins the ball
    pub const INTERCEPT_RATE: f64 = 0.2533349003937239;
}
