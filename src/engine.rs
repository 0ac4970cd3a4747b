//! Core game engine for the Ball Solitaire puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Cell`: Represents the two states a board square can hold.
//! - `Direction`: Represents the four directions a ball can be kicked.
//! - `Move`: Identifies one kick by its origin ball and direction.
//! - `Board`: Represents the 4x4 board and includes the single authority for
//!   move legality, move application, and legal-move enumeration.
use crate::error::GameError;

/// Width and height of the board. The board is always square.
pub const BOARD_SIZE: usize = 4;

/// Number of balls on a freshly set up board (all cells but one).
pub const INITIAL_BALLS: u32 = (BOARD_SIZE * BOARD_SIZE - 1) as u32;

/// Represents the state of a single square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An empty square a ball can land on.
    Empty,
    /// A square occupied by a ball.
    Ball,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// This is primarily used for text-based display or serialization of the
    /// board.
    ///
    /// # Examples
    ///
    /// ```
    /// use ball_solitaire::engine::Cell;
    /// assert_eq!(Cell::Ball.to_char(), 'O');
    /// assert_eq!(Cell::Empty.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ball => 'O',
        }
    }
}

/// Direction a ball is kicked toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (row, col) delta of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-letter command form, as typed by the player.
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", word)
    }
}

/// One kick, described from the perspective of the ball being kicked.
///
/// The kicked ball at `(row, col)` leapfrogs the adjacent ball one step along
/// `direction` (the midpoint, which is removed) and lands on the empty square
/// two steps along `direction` (the destination). Moves generated from the
/// blank-origin perspective are translated into this same representation, so
/// a given kick has exactly one `Move` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Move {
    /// The jumped cell, one step from the origin. `None` if off the board.
    pub fn midpoint(&self) -> Option<(usize, usize)> {
        step(self.row, self.col, self.direction, 1)
    }

    /// The landing cell, two steps from the origin. `None` if off the board.
    pub fn destination(&self) -> Option<(usize, usize)> {
        step(self.row, self.col, self.direction, 2)
    }
}

impl std::fmt::Display for Move {
    /// Formats the move in command notation, e.g. `C4 u`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let col_letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{} {}", col_letter, self.row + 1, self.direction.to_char())
    }
}

/// Moves `count` grid steps from `(row, col)` along `direction`, returning
/// `None` when the resulting coordinate leaves the board.
fn step(row: usize, col: usize, direction: Direction, count: isize) -> Option<(usize, usize)> {
    let (dr, dc) = direction.offset();
    let r = row as isize + dr * count;
    let c = col as isize + dc * count;
    if r >= 0 && r < BOARD_SIZE as isize && c >= 0 && c < BOARD_SIZE as isize {
        Some((r as usize, c as usize))
    } else {
        None
    }
}

/// Represents the game board as a 4x4 grid of `Cell`s.
///
/// A `Board` is a value: `apply` returns a new board rather than mutating in
/// place, which lets the search branch one state into many children without
/// aliasing. `Clone` produces a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the standard starting board: every cell holds a ball except the
    /// one at `(empty_row, empty_col)`.
    ///
    /// Returns `GameError::OutOfRange` if the coordinate is off the board.
    ///
    /// # Examples
    /// ```
    /// use ball_solitaire::engine::Board;
    /// let board = Board::new(0, 2).unwrap();
    /// assert_eq!(board.ball_count(), 15);
    /// ```
    pub fn new(empty_row: usize, empty_col: usize) -> Result<Self, GameError> {
        if empty_row >= BOARD_SIZE || empty_col >= BOARD_SIZE {
            return Err(GameError::OutOfRange {
                row: empty_row,
                col: empty_col,
            });
        }
        let mut grid = [[Cell::Ball; BOARD_SIZE]; BOARD_SIZE];
        grid[empty_row][empty_col] = Cell::Empty;
        Ok(Board { grid })
    }

    /// Creates a board from a predefined grid configuration.
    ///
    /// This is useful for testing or setting up specific game scenarios.
    pub fn from_grid(grid: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid }
    }

    /// Returns the cell at the specified row and column.
    ///
    /// # Panics
    /// Panics if `row` or `col` are outside the board dimensions.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Bounds-checked form of [`get`](Board::get), for callers handing
    /// coordinates through from untrusted input.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(self.grid[row][col])
    }

    /// Number of balls currently on the board.
    pub fn ball_count(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Ball)
            .count() as u32
    }

    /// Returns `true` iff `mv` is a legal kick on this board: the origin holds
    /// a ball, the jumped cell holds a ball, and the landing cell exists on
    /// the board and is empty.
    pub fn is_legal(&self, mv: Move) -> bool {
        if mv.row >= BOARD_SIZE || mv.col >= BOARD_SIZE {
            return false;
        }
        let (mid, dest) = match (mv.midpoint(), mv.destination()) {
            (Some(mid), Some(dest)) => (mid, dest),
            _ => return false,
        };
        self.grid[mv.row][mv.col] == Cell::Ball
            && self.grid[mid.0][mid.1] == Cell::Ball
            && self.grid[dest.0][dest.1] == Cell::Empty
    }

    /// Applies `mv` and returns the resulting board: origin and midpoint
    /// become empty, the destination gains the kicked ball. The receiver is
    /// left untouched.
    ///
    /// Returns `GameError::IllegalMove` if `mv` fails [`is_legal`](Board::is_legal).
    pub fn apply(&self, mv: Move) -> Result<Board, GameError> {
        if !self.is_legal(mv) {
            return Err(GameError::IllegalMove);
        }
        // is_legal guarantees both cells exist
        let (mid_r, mid_c) = mv.midpoint().ok_or(GameError::IllegalMove)?;
        let (dest_r, dest_c) = mv.destination().ok_or(GameError::IllegalMove)?;

        let mut next = self.clone();
        next.grid[mv.row][mv.col] = Cell::Empty;
        next.grid[mid_r][mid_c] = Cell::Empty;
        next.grid[dest_r][dest_c] = Cell::Ball;
        Ok(next)
    }

    /// Enumerates every legal kick on this board.
    ///
    /// Internally scans whichever cell kind is scarcer: while empty cells are
    /// rarer than balls (the first half of a game) each empty cell is asked
    /// "which ball could jump into here", and once balls become the rarer kind
    /// each ball is asked "where can it jump out to". The two scans produce
    /// identical move sets on any board; picking the scarcer side just keeps
    /// the number of candidates small. For the standard 15-ball game the
    /// switch happens after the seventh kick.
    pub fn legal_moves(&self) -> Vec<Move> {
        let balls = self.ball_count() as usize;
        let empties = BOARD_SIZE * BOARD_SIZE - balls;
        let scan_empties = empties < balls;

        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.grid[row][col] {
                    Cell::Empty if scan_empties => self.moves_into_blank(row, col, &mut moves),
                    Cell::Ball if !scan_empties => self.moves_from_ball(row, col, &mut moves),
                    _ => {}
                }
            }
        }
        moves
    }

    /// Blank-origin scan: finds every ball that can jump into the empty cell
    /// at `(row, col)`. The ball two steps away in the opposite direction of
    /// travel is the origin of the equivalent ball-framed move.
    fn moves_into_blank(&self, row: usize, col: usize, moves: &mut Vec<Move>) {
        for direction in Direction::ALL {
            let reverse = direction.opposite();
            let origin = match step(row, col, reverse, 2) {
                Some(origin) => origin,
                None => continue,
            };
            let (mid_r, mid_c) = match step(row, col, reverse, 1) {
                Some(mid) => mid,
                None => continue,
            };
            if self.grid[origin.0][origin.1] == Cell::Ball
                && self.grid[mid_r][mid_c] == Cell::Ball
            {
                moves.push(Move {
                    row: origin.0,
                    col: origin.1,
                    direction,
                });
            }
        }
    }

    /// Ball-origin scan: finds every direction the ball at `(row, col)` can
    /// be kicked toward.
    fn moves_from_ball(&self, row: usize, col: usize, moves: &mut Vec<Move>) {
        for direction in Direction::ALL {
            let mv = Move {
                row,
                col,
                direction,
            };
            if self.is_legal(mv) {
                moves.push(mv);
            }
        }
    }
}
