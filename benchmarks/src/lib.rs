//! Shared helpers for the eightsolver benchmark suites.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use eightsolver_harness::input::CANONICAL_GOAL;
use eightsolver_harness::scenario::{benchmark_suite, Scenario};
use eightsolver_puzzle::Board;
use eightsolver_search::{search, SearchConfig, SearchOutcome, SearchStrategy};

/// The canonical goal board.
///
/// # Panics
///
/// Panics if the canonical goal constant is invalid, which would be a
/// fixture bug.
#[must_use]
pub fn goal_board() -> Board {
    Board::from_rows(CANONICAL_GOAL).expect("canonical goal is valid")
}

/// Suite scenario with the given depth label.
///
/// # Panics
///
/// Panics if the ladder carries no instance at that depth. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn scenario_at_depth(depth: u32) -> Scenario {
    benchmark_suite()
        .into_iter()
        .find(|scenario| scenario.expected_depth == depth)
        .unwrap_or_else(|| panic!("no suite instance at depth {depth}"))
}

/// Run one search with the stock configuration.
///
/// # Panics
///
/// Panics if the run fails to reach the goal. Benchmark instances are
/// all solvable, so a miss means the engine regressed.
#[must_use]
pub fn run_to_goal(initial: &Board, strategy: SearchStrategy) -> SearchOutcome {
    let outcome = search(initial, &goal_board(), strategy, &SearchConfig::default());
    assert!(
        outcome.termination.is_goal(),
        "{strategy} failed to solve a benchmark instance"
    );
    outcome
}
