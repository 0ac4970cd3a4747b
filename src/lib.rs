//! # Ball Solitaire
//!
//! This library provides the core game logic for the Ball Solitaire puzzle
//! (a 4x4 peg-solitaire variant from Super Mario RPG) and a breadth-first
//! enumerator that discovers every move sequence solving the puzzle.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `exhaustive_solver`: Takes a starting empty cell and enumerates every
//!   sequence of legal kicks that reduces the board to a single ball.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), cell states
//!   (`Cell`), kick directions (`Direction`), and all move mechanics
//!   (legality, application, enumeration).
//! - `session`: Manages one human-driven game (`Session`), one accepted
//!   command at a time, with move history and win detection.
//! - `solver`: Provides the `solve_bfs` function for enumerating every
//!   complete solution reachable from a starting board.
//! - `error`: Defines the crate-wide `GameError` type.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.

pub mod engine;
pub mod error;
pub mod session;
pub mod solver;
pub mod utils;
