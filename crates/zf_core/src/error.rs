use thiserror::Error;

/// Errors surfaced by the JSON boundary.
///
/// Core evaluation never errors: illegal queries fail closed (false / 0)
/// per the host contract. Only the structured API reports malformed
/// requests.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Unknown team id: {0}")]
    UnknownTeam(i32),

    #[error("Zone out of bounds: ({x}, {y})")]
    ZoneOutOfBounds { x: i32, y: i32 },

    #[error("Count array length mismatch: expected {expected}, found {found}")]
    CountLength { expected: usize, found: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            EvalError::MalformedRequest(err.to_string())
        } else {
            EvalError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
