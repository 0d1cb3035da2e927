//! User-input collection and validation.
//!
//! Boards reach the engine only through this module (or the scenario
//! table), so the engine can assume the permutation invariant without
//! re-checking it.

use std::fmt;

use eightsolver_puzzle::board::SIDE;
use eightsolver_puzzle::{Board, BoardError};

/// The stock demo puzzle offered by the interactive driver (depth 24).
pub const DEFAULT_PUZZLE: [[u8; SIDE]; SIDE] = [[0, 7, 2], [4, 6, 1], [3, 5, 8]];

/// The canonical 8-puzzle goal.
pub const CANONICAL_GOAL: [[u8; SIDE]; SIDE] = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// Why user input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Fewer or more than three rows were supplied.
    WrongRowCount { found: usize },
    /// A row did not contain exactly three entries.
    WrongRowLength { row: usize, found: usize },
    /// An entry was not a digit 0–8.
    NotADigit { row: usize, token: String },
    /// The grid shape was fine but the digits were not a permutation.
    Board(BoardError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount { found } => {
                write!(f, "expected {SIDE} rows, found {found}")
            }
            Self::WrongRowLength { row, found } => {
                write!(f, "row {} must contain exactly {SIDE} numbers, found {found}", row + 1)
            }
            Self::NotADigit { row, token } => {
                write!(f, "row {}: {token:?} is not a digit 0-8", row + 1)
            }
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for InputError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// Parse one whitespace-delimited input row.
///
/// # Errors
///
/// Returns [`InputError`] if the row does not hold exactly three digits 0–8.
pub fn parse_row(row_index: usize, line: &str) -> Result<[u8; SIDE], InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != SIDE {
        return Err(InputError::WrongRowLength {
            row: row_index,
            found: tokens.len(),
        });
    }
    let mut row = [0u8; SIDE];
    for (col, token) in tokens.iter().enumerate() {
        row[col] = token.parse().map_err(|_| InputError::NotADigit {
            row: row_index,
            token: (*token).to_string(),
        })?;
    }
    Ok(row)
}

/// Assemble a validated board from parsed rows.
///
/// # Errors
///
/// Returns [`InputError`] on a wrong row count or any digit violation
/// (range or duplicate) reported by `Board::from_rows`.
pub fn board_from_rows(rows: &[[u8; SIDE]]) -> Result<Board, InputError> {
    let rows: [[u8; SIDE]; SIDE] = rows
        .try_into()
        .map_err(|_| InputError::WrongRowCount { found: rows.len() })?;
    Ok(Board::from_rows(rows)?)
}
