pub mod host;
pub mod json_api;

use once_cell::sync::Lazy;

use crate::engine::RateEvaluator;

pub use json_api::{evaluate_zone_json, EvalRequest, EvalResponse};

/// Process-wide evaluator with the default ruleset, shared by the host
/// surface and the JSON surface so the geometry caches stay warm.
pub(crate) static DEFAULT_EVALUATOR: Lazy<RateEvaluator> = Lazy::new(RateEvaluator::default);
