//! Exhaustive breadth-first enumeration of Ball Solitaire solutions.
//!
//! Starting from a board with one designated empty cell, the search expands
//! every reachable line of play and collects each sequence of kicks that
//! reduces the board to a single ball. Sequences are what get counted:
//! two different sequences reaching the same final board are two solutions,
//! and no symmetry reduction is applied. From the standard start (row 0,
//! column C) this yields 210,422 solutions.

use std::collections::VecDeque;

use crate::engine::{Board, Move};
use crate::error::GameError;

/// How many expansions pass between progress reports.
pub const PROGRESS_INTERVAL: usize = 15_000;

/// One complete solution found by the search.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The terminal board, holding a single ball.
    pub board: Board,
    /// The kicks that produced it, in order.
    pub moves: Vec<Move>,
}

/// Periodic snapshot of a running search, for diagnostics only.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    /// States expanded so far.
    pub expanded: usize,
    /// States currently waiting in the frontier.
    pub frontier: usize,
    /// Complete solutions collected so far.
    pub solutions: usize,
}

/// One node of the search tree: a board plus the moves that reached it.
/// Owned exclusively by the frontier or the results; expansion hands each
/// child a fresh board and sequence, never a shared one.
struct SearchState {
    board: Board,
    sequence: Vec<Move>,
}

/// Enumerates every move sequence that reduces `initial` to a single ball.
///
/// The traversal is breadth-first over a FIFO frontier, so shorter lines of
/// play are expanded before longer ones and progress reports climb through
/// the depths in order; completeness does not depend on that order. Each
/// branch ends after exactly `initial.ball_count() - 1` moves (14 for the
/// full game), the point where a solved branch has one ball left.
///
/// `on_progress` is invoked every [`PROGRESS_INTERVAL`] expansions.
///
/// # Panics
/// Panics if a move the engine itself enumerated fails to apply; that is an
/// engine defect, not a caller error.
pub fn solve_bfs<F>(initial: &Board, mut on_progress: F) -> Vec<Solution>
where
    F: FnMut(Progress),
{
    let solution_length = initial.ball_count().saturating_sub(1) as usize;

    let mut frontier = VecDeque::new();
    frontier.push_back(SearchState {
        board: initial.clone(),
        sequence: Vec::new(),
    });

    let mut solutions = Vec::new();
    let mut expanded = 0usize;

    while let Some(state) = frontier.pop_front() {
        for mv in state.board.legal_moves() {
            let child_board = state
                .board
                .apply(mv)
                .expect("enumerated move must be legal");
            let mut child_sequence = state.sequence.clone();
            child_sequence.push(mv);

            if child_sequence.len() == solution_length {
                solutions.push(Solution {
                    board: child_board,
                    moves: child_sequence,
                });
            } else {
                frontier.push_back(SearchState {
                    board: child_board,
                    sequence: child_sequence,
                });
            }
        }

        expanded += 1;
        if expanded % PROGRESS_INTERVAL == 0 {
            on_progress(Progress {
                expanded,
                frontier: frontier.len(),
                solutions: solutions.len(),
            });
        }
    }

    solutions
}

/// Enumerates every solution from a fresh board whose only empty cell is
/// `(empty_row, empty_col)`.
///
/// Returns `GameError::OutOfRange` for a start cell off the board. Progress
/// is discarded; drive [`solve_bfs`] directly to observe it.
pub fn enumerate_from_start(
    empty_row: usize,
    empty_col: usize,
) -> Result<Vec<Solution>, GameError> {
    let board = Board::new(empty_row, empty_col)?;
    Ok(solve_bfs(&board, |_| {}))
}
