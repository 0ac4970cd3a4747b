//! Error types for the Ball Solitaire crate.

use thiserror::Error;

use crate::engine::Direction;

/// Everything that can go wrong while driving a game or setting up a board.
///
/// All variants are recoverable: a failed command leaves the session's board
/// untouched, and the caller simply reports the message and reads the next
/// input. The exhaustive search never produces these errors, since it only
/// applies moves it generated as legal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    /// The command string did not have the `[c][r] [d]` shape at all.
    #[error("invalid input (expected the form 'c3 u')")]
    InvalidInput,

    #[error("invalid row '{0}' (expected 1-4)")]
    InvalidRow(char),

    #[error("invalid column '{0}' (expected A-D)")]
    InvalidCol(char),

    #[error("invalid direction '{0}' (expected u, d, l or r)")]
    InvalidDirection(char),

    /// The kick points off the board from its origin, before occupancy is
    /// even considered. Kicking up needs two rows of headroom, and likewise
    /// for the other directions.
    #[error("can't kick {0} from there")]
    CannotKick(Direction),

    /// The geometry works but the occupancy rule fails: the origin or the
    /// jumped cell is not a ball, or the landing cell is not empty.
    #[error("illegal move")]
    IllegalMove,

    #[error("position ({row}, {col}) is outside the 4x4 board")]
    OutOfRange { row: usize, col: usize },

    #[error("unrecognized character '{character}' in row {row} col {col}")]
    UnrecognizedCell {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("board description too large: expected at most {expected} {unit}, found {found}")]
    InvalidBoardShape {
        expected: usize,
        found: usize,
        unit: &'static str,
    },
}
