//! Eightsolver Puzzle: the 8-puzzle domain model.
//!
//! This crate is the pure bottom layer of the workspace. It knows what a
//! board is, which moves are legal, and how far a board is from a goal.
//! It knows nothing about frontiers, queues, or timeouts.
//!
//! # Crate dependency graph
//!
//! ```text
//! eightsolver_puzzle  ←  eightsolver_search  ←  eightsolver_harness
//! (boards, moves)        (frontier, engine)     (input, scenarios, reports)
//! ```
//!
//! # Key types
//!
//! - [`Board`] — a validated 3×3 permutation grid (0 is the blank)
//! - [`Move`] — the four blank-travel directions in fixed enumeration order
//! - [`GoalIndex`] — per-goal heuristic tables (misplaced tile, Manhattan)

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod heuristic;
pub mod moves;

pub use board::{Board, BoardError};
pub use heuristic::GoalIndex;
pub use moves::Move;
