//! Move notation and history replay.
//!
//! ```text
//! B2    single cell (row B, column 2)
//! A13   row run: row A, columns 1 through 3
//! AC2   column run: rows A through C, column 2
//! ```
//!
//! Rows are named `A`.. and columns `1`.., one name per grid line.

use thiserror::Error;

use crate::{Board, Direction, Move, Pos};

pub const ROW_NAMES: &[u8; 8] = b"ABCDEFGH";
pub const COLUMN_NAMES: &[u8; 8] = b"12345678";

/// A move string that does not follow the notation grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("move {text:?} must be 2 or 3 characters long")]
    Length { text: String },

    #[error("move {text:?} has {found:?} where a {expected} name was expected")]
    Character {
        text: String,
        found: char,
        expected: &'static str,
    },

    #[error("move {text:?} ends before it starts")]
    InvertedRun { text: String },
}

fn row_index(ch: char, size: u8) -> Option<u8> {
    ROW_NAMES[..size as usize]
        .iter()
        .position(|&name| name as char == ch)
        .map(|i| i as u8)
}

fn column_index(ch: char, size: u8) -> Option<u8> {
    COLUMN_NAMES[..size as usize]
        .iter()
        .position(|&name| name as char == ch)
        .map(|i| i as u8)
}

/// Parse a move written for a board of the given size.
///
/// The direction of a 3-character run is decided by its middle character:
/// a row name means the rows vary (column run), a column name means the
/// columns vary (row run).
pub fn decode(text: &str, size: u8) -> Result<Move, NotationError> {
    debug_assert!((1..=Board::MAX_SIZE).contains(&size));
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 2 && chars.len() != 3 {
        return Err(NotationError::Length { text: text.to_string() });
    }

    let bad = |found: char, expected: &'static str| NotationError::Character {
        text: text.to_string(),
        found,
        expected,
    };

    let row = row_index(chars[0], size).ok_or_else(|| bad(chars[0], "row"))?;

    if chars.len() == 2 {
        let col = column_index(chars[1], size).ok_or_else(|| bad(chars[1], "column"))?;
        return Ok(Move::single(Pos::new(row, col)));
    }

    let last = column_index(chars[2], size).ok_or_else(|| bad(chars[2], "column"))?;

    let (start, end, direction) = if let Some(end_row) = row_index(chars[1], size) {
        (Pos::new(row, last), end_row.checked_sub(row), Direction::Column)
    } else if let Some(first_col) = column_index(chars[1], size) {
        (Pos::new(row, first_col), last.checked_sub(first_col), Direction::Row)
    } else {
        return Err(bad(chars[1], "row or column"));
    };

    let span = end.ok_or_else(|| NotationError::InvertedRun { text: text.to_string() })?;
    Ok(Move::new(start, span + 1, direction))
}

/// Cells named by a move, in ascending order.
pub fn decode_cells(text: &str, size: u8) -> Result<Vec<Pos>, NotationError> {
    Ok(decode(text, size)?.cells().collect())
}

/// Rebuild the board reached by a move history from the full board.
///
/// Moves are applied by clearing their cells; whether each move was legal at
/// that point is not checked, and clearing an already empty cell is a no-op.
pub fn replay<S: AsRef<str>>(history: &[S], size: u8) -> Result<Board, NotationError> {
    let mut board = Board::full(size);
    for text in history {
        let mov = decode(text.as_ref(), size)?;
        board = board.apply(&mov);
    }
    Ok(board)
}
