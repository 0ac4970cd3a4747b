use crate::engine::{Board, Cell, BOARD_SIZE};
use crate::error::GameError;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents a row, starting from row 0. If fewer than
/// `BOARD_SIZE` rows are provided, the remaining rows are filled with
/// `Cell::Empty`; likewise, a row string shorter than `BOARD_SIZE` characters
/// leaves the rest of that row empty.
///
/// Valid characters are:
/// - 'O' or 'o': `Cell::Ball`
/// - '.' or ' ': `Cell::Empty`
///
/// Any other character results in an error.
///
/// # Examples
/// ```
/// use ball_solitaire::utils::board_from_rows;
/// use ball_solitaire::engine::Cell;
///
/// let board = board_from_rows(&[
///     "OO.O",
///     "OOOO",
///     "OOOO",
///     "OOOO",
/// ]).unwrap();
/// assert_eq!(board.get(0, 2), Cell::Empty);
/// assert_eq!(board.ball_count(), 15);
///
/// assert!(board_from_rows(&["OXOO"]).is_err());
/// ```
pub fn board_from_rows(rows: &[&str]) -> Result<Board, GameError> {
    if rows.len() > BOARD_SIZE {
        return Err(GameError::InvalidBoardShape {
            expected: BOARD_SIZE,
            found: rows.len(),
            unit: "rows",
        });
    }

    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

    for (r, row_str) in rows.iter().enumerate() {
        if row_str.chars().count() > BOARD_SIZE {
            return Err(GameError::InvalidBoardShape {
                expected: BOARD_SIZE,
                found: row_str.chars().count(),
                unit: "columns",
            });
        }

        for (c, character) in row_str.chars().enumerate() {
            grid[r][c] = match character {
                'O' | 'o' => Cell::Ball,
                '.' | ' ' => Cell::Empty,
                _ => {
                    return Err(GameError::UnrecognizedCell {
                        character,
                        row: r,
                        col: c,
                    })
                }
            };
        }
    }
    Ok(Board::from_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_rows_valid() {
        let board = board_from_rows(&["OO.O", "OOOO", "OOOO", "OOOO"]).unwrap();
        assert_eq!(board.get(0, 2), Cell::Empty);
        assert_eq!(board.get(0, 3), Cell::Ball);
        assert_eq!(board.ball_count(), 15);
    }

    #[test]
    fn test_board_from_rows_space_is_empty() {
        let board = board_from_rows(&["O O", "OOOO"]).unwrap();
        assert_eq!(board.get(0, 1), Cell::Empty);
        assert_eq!(board.get(0, 2), Cell::Ball);
    }

    #[test]
    fn test_board_from_rows_pads_short_input() {
        let board = board_from_rows(&["OO"]).unwrap();
        assert_eq!(board.get(0, 0), Cell::Ball);
        assert_eq!(board.get(0, 2), Cell::Empty);
        assert_eq!(board.get(3, 3), Cell::Empty);
        assert_eq!(board.ball_count(), 2);
    }

    #[test]
    fn test_board_from_rows_empty_input() {
        let board = board_from_rows(&[]).unwrap();
        assert_eq!(board.ball_count(), 0);
    }

    #[test]
    fn test_board_from_rows_invalid_char() {
        let err = board_from_rows(&["OXOO"]).unwrap_err();
        assert_eq!(
            err,
            GameError::UnrecognizedCell {
                character: 'X',
                row: 0,
                col: 1
            }
        );
    }

    #[test]
    fn test_board_from_rows_too_many_rows() {
        let rows = ["OOOO"; BOARD_SIZE + 1];
        assert!(matches!(
            board_from_rows(&rows),
            Err(GameError::InvalidBoardShape { unit: "rows", .. })
        ));
    }

    #[test]
    fn test_board_from_rows_row_too_long() {
        assert!(matches!(
            board_from_rows(&["OOOOO"]),
            Err(GameError::InvalidBoardShape { unit: "columns", .. })
        ));
    }
}
