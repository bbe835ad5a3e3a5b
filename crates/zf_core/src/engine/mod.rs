pub mod geometry;
pub mod grid;
pub mod legality;
pub mod pitch_constants;
pub mod rates;
pub mod recovery;
pub mod ruleset;
pub mod snapshot;

pub use grid::{GridSpec, ZoneIndex};
pub use rates::RateEvaluator;
pub use ruleset::Ruleset;
pub use snapshot::{PitchState, TeamSide};
