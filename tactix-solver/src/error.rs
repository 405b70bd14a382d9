//! Error types for engine construction and queries.

use tactix_core::{Board, NotationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Grid size outside what a board can hold.
    #[error("grid size must be between 1 and {max}, got {size}", max = Board::MAX_SIZE)]
    InvalidSize { size: u8 },

    /// A move in the history does not follow the notation.
    #[error(transparent)]
    MalformedMove(#[from] NotationError),
}

pub type EngineResult<T> = Result<T, EngineError>;
