//! One human-driven game of Ball Solitaire.
//!
//! A `Session` owns the current board, accepts one command at a time, keeps
//! the sequence of accepted moves, and detects the win condition (a single
//! ball remaining). Rendering and input reading live in the presentation
//! layer; the session only parses the command string and returns a typed
//! status for the caller to print.

use crate::engine::{Board, Direction, Move};
use crate::error::GameError;

/// The standard game empties row 0, column C.
pub const STANDARD_START: (usize, usize) = (0, 2);

/// Manages the state and progression of one Ball Solitaire game.
///
/// # Examples
/// ```
/// use ball_solitaire::session::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.ball_count(), 15);
/// // Kick the ball at C3 upward, over C2, into the empty C1.
/// session.apply_command("c3 u").unwrap();
/// assert_eq!(session.ball_count(), 14);
/// assert_eq!(session.moves().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    ball_count: u32,
    moves: Vec<Move>,
}

impl Session {
    /// Creates a session on the standard starting board.
    pub fn new() -> Self {
        let board = Board::new(STANDARD_START.0, STANDARD_START.1)
            .expect("standard start cell is on the board");
        let ball_count = board.ball_count();
        Session {
            board,
            ball_count,
            moves: Vec::new(),
        }
    }

    /// Returns an immutable reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of balls still on the board.
    pub fn ball_count(&self) -> u32 {
        self.ball_count
    }

    /// The moves accepted so far, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The puzzle is solved once a single ball remains.
    pub fn is_won(&self) -> bool {
        self.ball_count == 1
    }

    /// Restarts the game from the standard starting board.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// Parses and applies one command of the form `[c][r] [d]`, e.g. `c3 u`:
    /// column letter A-D, row digit 1-4, then a direction letter (u/d/l/r)
    /// after a space. The column letter is case-insensitive.
    ///
    /// Checks run in a fixed order so each failure keeps its own diagnostic:
    /// command shape, then row, then column, then direction letter, then the
    /// geometric precondition (a kick needs two cells of room toward the
    /// board edge), and only then the occupancy rule. On any error the board
    /// is left unchanged.
    ///
    /// On success the board advances, the ball count drops by one, and the
    /// accepted move is appended to the history.
    pub fn apply_command(&mut self, command: &str) -> Result<Move, GameError> {
        let chars: Vec<char> = command.chars().collect();
        if chars.len() != 4 || chars[2] != ' ' {
            return Err(GameError::InvalidInput);
        }

        let row = match chars[1] {
            c @ '1'..='4' => c as usize - '1' as usize,
            c => return Err(GameError::InvalidRow(c)),
        };
        let col = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='d' => c as usize - 'a' as usize,
            _ => return Err(GameError::InvalidCol(chars[0])),
        };
        let direction = match Direction::from_char(chars[3]) {
            Some(direction) => direction,
            None => return Err(GameError::InvalidDirection(chars[3])),
        };

        let has_room = match direction {
            Direction::Up => row >= 2,
            Direction::Down => row <= 1,
            Direction::Left => col >= 2,
            Direction::Right => col <= 1,
        };
        if !has_room {
            return Err(GameError::CannotKick(direction));
        }

        let mv = Move {
            row,
            col,
            direction,
        };
        self.board = self.board.apply(mv)?;
        self.ball_count -= 1;
        self.moves.push(mv);
        Ok(mv)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    #[test]
    fn test_new_session_standard_start() {
        let session = Session::new();
        assert_eq!(session.ball_count(), 15);
        assert_eq!(session.board().get(0, 2), Cell::Empty);
        assert!(session.moves().is_empty());
        assert!(!session.is_won());
    }

    #[test]
    fn test_apply_command_success() {
        let mut session = Session::new();
        let mv = session.apply_command("C3 u").unwrap();
        assert_eq!(
            mv,
            Move {
                row: 2,
                col: 2,
                direction: Direction::Up
            }
        );
        assert_eq!(session.ball_count(), 14);
        assert_eq!(session.board().get(0, 2), Cell::Ball);
        assert_eq!(session.board().get(1, 2), Cell::Empty);
        assert_eq!(session.board().get(2, 2), Cell::Empty);
        assert_eq!(session.moves(), &[mv]);
    }

    #[test]
    fn test_apply_command_lowercase_column() {
        let mut session = Session::new();
        assert!(session.apply_command("a1 r").is_ok());
        // The ball from A1 leapfrogs B1 into the starting blank at C1.
        assert_eq!(session.board().get(0, 2), Cell::Ball);
    }

    #[test]
    fn test_malformed_commands_rejected() {
        let mut session = Session::new();
        assert_eq!(session.apply_command(""), Err(GameError::InvalidInput));
        assert_eq!(session.apply_command("c3u"), Err(GameError::InvalidInput));
        assert_eq!(
            session.apply_command("c3 up"),
            Err(GameError::InvalidInput)
        );
        assert_eq!(session.ball_count(), 15);
    }

    #[test]
    fn test_row_checked_before_column() {
        let mut session = Session::new();
        // Both coordinates are bad; the row diagnostic wins.
        assert_eq!(
            session.apply_command("e5 u"),
            Err(GameError::InvalidRow('5'))
        );
        assert_eq!(
            session.apply_command("e3 u"),
            Err(GameError::InvalidCol('e'))
        );
    }

    #[test]
    fn test_invalid_direction_letter() {
        let mut session = Session::new();
        assert_eq!(
            session.apply_command("c3 x"),
            Err(GameError::InvalidDirection('x'))
        );
    }

    #[test]
    fn test_geometry_checked_before_occupancy() {
        let mut session = Session::new();
        // A1 is a ball, but kicking up from row 1 has no room for the jump;
        // this must be the geometric diagnostic, not the occupancy one.
        assert_eq!(
            session.apply_command("a1 u"),
            Err(GameError::CannotKick(Direction::Up))
        );
        assert_eq!(
            session.apply_command("a4 d"),
            Err(GameError::CannotKick(Direction::Down))
        );
        assert_eq!(
            session.apply_command("b2 l"),
            Err(GameError::CannotKick(Direction::Left))
        );
        assert_eq!(
            session.apply_command("c2 r"),
            Err(GameError::CannotKick(Direction::Right))
        );
    }

    #[test]
    fn test_illegal_move_leaves_board_unchanged() {
        let mut session = Session::new();
        // D4 kicking left lands on the ball at B4.
        assert_eq!(session.apply_command("d4 l"), Err(GameError::IllegalMove));
        assert_eq!(session.ball_count(), 15);
        assert!(session.moves().is_empty());
        assert_eq!(session.board().get(3, 3), Cell::Ball);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut session = Session::new();
        session.apply_command("c3 u").unwrap();
        session.reset();
        assert_eq!(session.ball_count(), 15);
        assert!(session.moves().is_empty());
        assert_eq!(session.board().get(0, 2), Cell::Empty);
    }

    #[test]
    fn test_full_game_reaches_win() {
        // One known 14-move solution from the standard start.
        let mut session = Session::new();
        let solution = [
            "a1 r", "d1 l", "a3 u", "a1 r", "c2 l", "d3 u", "b4 u", "d4 l",
            "a4 r", "c4 u", "c1 d", "a2 r", "c3 u", "d1 l",
        ];
        for (i, command) in solution.iter().enumerate() {
            assert!(!session.is_won(), "won early, before command {}", i);
            session
                .apply_command(command)
                .unwrap_or_else(|e| panic!("command {} ('{}') failed: {}", i, command, e));
        }
        assert!(session.is_won());
        assert_eq!(session.ball_count(), 1);
        assert_eq!(session.moves().len(), 14);
    }
}
