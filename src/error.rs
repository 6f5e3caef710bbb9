use thiserror::Error;

pub type StarplotResult<T> = Result<T, StarplotError>;

#[derive(Debug, Error)]
pub enum StarplotError {
    #[error("invalid axis count: {count} (a starplot needs at least 3 axes)")]
    InvalidAxisCount { count: usize },

    #[error("invalid axis max at index {index}: {value} (must be finite and > 0)")]
    InvalidAxisMax { index: usize, value: f64 },

    #[error("invalid radius: {0} (must be finite and > 0)")]
    InvalidRadius(f64),

    #[error("invalid ease divisor: {0} (must be finite and >= 1)")]
    InvalidEaseDivisor(f64),

    #[error("an object with the name `{0}` already exists")]
    DuplicateName(String),

    #[error("shape mismatch for {field}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("scene backend error: {0}")]
    Backend(String),
}
