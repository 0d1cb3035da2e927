//! Priority policies and per-call search configuration.

use std::fmt;
use std::time::Duration;

use eightsolver_puzzle::{Board, GoalIndex};

/// The three interchangeable priority policies.
///
/// The engine orders its frontier by f = g + h and obtains h through
/// [`SearchStrategy::heuristic`], the single variation point. It never
/// matches on the variant itself, so all three policies share one code
/// path through the frontier and expansion loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Uniform cost search: h is always 0, so priority is g alone.
    UniformCost,
    /// A* with the misplaced-tile heuristic.
    MisplacedTile,
    /// A* with the Manhattan-distance heuristic.
    ManhattanDistance,
}

impl SearchStrategy {
    /// All strategies, in the order the experiment suite runs them.
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::UniformCost,
        SearchStrategy::MisplacedTile,
        SearchStrategy::ManhattanDistance,
    ];

    /// h(n) for the given board under this policy.
    ///
    /// Uniform cost never computes a heuristic; the other two delegate to
    /// the goal index tables.
    #[must_use]
    pub fn heuristic(self, board: &Board, goal: &GoalIndex) -> u32 {
        match self {
            SearchStrategy::UniformCost => 0,
            SearchStrategy::MisplacedTile => goal.misplaced_tiles(board),
            SearchStrategy::ManhattanDistance => goal.manhattan_distance(board),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::UniformCost => "Uniform Cost Search",
            SearchStrategy::MisplacedTile => "A* (Misplaced Tile)",
            SearchStrategy::ManhattanDistance => "A* (Manhattan Distance)",
        };
        write!(f, "{name}")
    }
}

/// Per-call search configuration.
///
/// Threaded explicitly into [`crate::search::search`]; there is no global
/// timeout constant anywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget for one run. Checked once per expansion, so a
    /// single expansion can overrun it slightly (cooperative, not
    /// preemptive).
    pub timeout: Duration,
}

impl SearchConfig {
    /// The stock budget: 600 seconds.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

    /// Configuration with the given timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}
