//! Search nodes and the frontier ordering key.

use eightsolver_puzzle::{Board, Move};

/// A node in the search tree.
///
/// Nodes live in an arena (`Vec<SearchNode>`) owned by the engine for the
/// duration of one run; `parent` is an index into that arena, so parent
/// links form a tree and never a reference cycle. A node is write-once
/// after construction, with a single exception: the goal node receives the
/// final `nodes_expanded` / `max_frontier_size` stamp when the run ends.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Index of this node in the engine's arena.
    pub id: usize,
    /// Arena index of the parent (`None` for the root).
    pub parent: Option<usize>,
    /// The board at this node.
    pub board: Board,
    /// The move that produced this node from its parent (`None` for the root).
    pub action: Option<Move>,
    /// g(n): moves from the initial board. Every move costs 1.
    pub path_cost: u32,
    /// h(n): the active policy's estimate for this board.
    pub heuristic_cost: u32,
    /// Monotonic counter for the FIFO tie-break among equal-f entries.
    pub insertion_order: u64,
    /// Stamped on the goal node when the run ends; zero otherwise.
    pub nodes_expanded: u64,
    /// Stamped on the goal node when the run ends; zero otherwise.
    pub max_frontier_size: u64,
}

impl SearchNode {
    /// f(n) = g(n) + h(n), the frontier priority.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.path_cost + self.heuristic_cost
    }

    /// The key this node is ordered by in the frontier.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            total_cost: self.total_cost(),
            insertion_order: self.insertion_order,
        }
    }
}

/// The frontier ordering key: ascending f, ties broken by insertion order.
///
/// Two nodes with equal f compare equal in priority regardless of their
/// boards; the insertion counter makes extraction stable (FIFO among ties)
/// so repeated runs pop nodes in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub total_cost: u32,
    pub insertion_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_cost
            .cmp(&other.total_cost)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}
