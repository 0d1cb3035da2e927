//! The experiment suite: depth-tagged instances and the strategy sweep.

use std::time::Duration;

use eightsolver_puzzle::board::SIDE;
use eightsolver_puzzle::Board;
use eightsolver_search::{search, SearchConfig, SearchStrategy};

use crate::input::CANONICAL_GOAL;

/// A benchmark instance with its known optimal solution depth.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Optimal number of moves to the canonical goal.
    pub expected_depth: u32,
    /// The initial configuration.
    pub rows: [[u8; SIDE]; SIDE],
}

impl Scenario {
    /// The scenario's initial board.
    ///
    /// # Panics
    ///
    /// Panics if the scenario table holds an invalid grid; the table is
    /// compile-time data, so this is a fixture bug, not a runtime input.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_rows(self.rows).expect("scenario table holds valid boards")
    }
}

/// The depth 0–24 instance ladder the experiment driver sweeps.
#[must_use]
pub fn benchmark_suite() -> Vec<Scenario> {
    vec![
        Scenario {
            expected_depth: 0,
            rows: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        },
        Scenario {
            expected_depth: 2,
            rows: [[1, 2, 3], [4, 5, 6], [0, 7, 8]],
        },
        Scenario {
            expected_depth: 4,
            rows: [[1, 2, 3], [5, 0, 6], [4, 7, 8]],
        },
        Scenario {
            expected_depth: 8,
            rows: [[1, 3, 6], [5, 0, 2], [4, 7, 8]],
        },
        Scenario {
            expected_depth: 12,
            rows: [[1, 3, 6], [5, 0, 7], [4, 8, 2]],
        },
        Scenario {
            expected_depth: 16,
            rows: [[1, 6, 7], [5, 0, 3], [4, 8, 2]],
        },
        Scenario {
            expected_depth: 20,
            rows: [[7, 1, 2], [4, 8, 5], [6, 3, 0]],
        },
        Scenario {
            expected_depth: 24,
            rows: [[0, 7, 2], [4, 6, 1], [3, 5, 8]],
        },
    ]
}

/// One strategy's measurements on one scenario.
#[derive(Debug, Clone)]
pub struct SuiteRow {
    pub strategy: SearchStrategy,
    pub expected_depth: u32,
    /// Depth actually found (`None` on timeout/exhaustion).
    pub solution_depth: Option<u32>,
    pub nodes_expanded: u64,
    pub max_frontier_size: u64,
    pub elapsed: Duration,
    pub timed_out: bool,
}

/// All measurements from one suite sweep.
#[derive(Debug, Clone, Default)]
pub struct SuiteResults {
    pub rows: Vec<SuiteRow>,
}

impl SuiteResults {
    /// Rows for one strategy, in scenario order.
    pub fn for_strategy(&self, strategy: SearchStrategy) -> impl Iterator<Item = &SuiteRow> {
        self.rows.iter().filter(move |row| row.strategy == strategy)
    }
}

/// Run every strategy against every scenario and collect the measurements.
///
/// Scenarios run in table order, strategies in [`SearchStrategy::ALL`]
/// order, so the result rows are reproducible run to run (times aside).
#[must_use]
pub fn run_suite(scenarios: &[Scenario], config: &SearchConfig) -> SuiteResults {
    let goal = Board::from_rows(CANONICAL_GOAL).expect("canonical goal is valid");
    let mut results = SuiteResults::default();

    for scenario in scenarios {
        let initial = scenario.board();
        for strategy in SearchStrategy::ALL {
            let outcome = search(&initial, &goal, strategy, config);
            results.rows.push(SuiteRow {
                strategy,
                expected_depth: scenario.expected_depth,
                solution_depth: outcome.solution_depth(),
                nodes_expanded: outcome.metrics.nodes_expanded,
                max_frontier_size: outcome.metrics.max_frontier_size,
                elapsed: outcome.metrics.elapsed,
                timed_out: outcome.metrics.timed_out,
            });
        }
    }

    results
}
