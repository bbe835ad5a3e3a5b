//! # zf_core - Zone-Grid Football Rules & Rate Evaluator
//!
//! Deterministic legality and rate evaluation for a zone-abstracted
//! football match. An external probabilistic model-checking host supplies
//! the full state on every call (possession, ball zone, per-zone player
//! counts for both teams) and consumes booleans and fixed-point integer
//! rates (×10,000) to build its transition distributions.
//!
//! ## Features
//! - Pure, synchronous evaluation; the only retained state is two
//!   geometry memo caches
//! - Integer-only host surface ([`api::host`]) plus a JSON surface
//!   ([`api::json_api`]) for tooling
//! - One configurable [`Ruleset`] unifying the historical rule variants

// Host entry points carry the full flat state in every signature
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;

pub use api::json_api::{evaluate_zone_json, EvalRequest, EvalResponse};
pub use engine::{GridSpec, PitchState, RateEvaluator, Ruleset, TeamSide, ZoneIndex};
pub use error::{EvalError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
