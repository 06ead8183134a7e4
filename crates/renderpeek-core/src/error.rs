use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderpeekError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a nested array of numbers, found {found} at depth {depth}")]
    UnexpectedValue { found: &'static str, depth: usize },

    #[error("Ragged array: expected {expected} elements at depth {depth}, found {found}")]
    Ragged {
        depth: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, RenderpeekError>;
