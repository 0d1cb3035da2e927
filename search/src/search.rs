//! The best-first expansion loop.
//!
//! One call to [`search`] runs one search to termination. The engine owns
//! the frontier, the explored set, and the node arena for exactly that
//! call; nothing is shared across runs and nothing survives the return
//! except the [`SearchOutcome`].

use std::time::Instant;

use eightsolver_puzzle::{Board, GoalIndex, Move};

use crate::frontier::Frontier;
use crate::metrics::{RunMetrics, Termination};
use crate::node::SearchNode;
use crate::strategy::{SearchConfig, SearchStrategy};

/// Result of a search run.
///
/// Always carries the full node arena and metrics regardless of how the
/// run terminated; check [`SearchOutcome::termination`] or `goal_node` to
/// branch on the result. Exhaustion and timeout are normal negative
/// results, not errors.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The goal node (if the goal was reached), with the final metrics
    /// stamp applied.
    pub goal_node: Option<SearchNode>,
    /// Every node created during the run, indexed by `SearchNode::id`.
    pub nodes: Vec<SearchNode>,
    /// Why the run stopped.
    pub termination: Termination,
    /// Aggregate counters for the run.
    pub metrics: RunMetrics,
}

impl SearchOutcome {
    /// The solution path from the initial board to the goal, or `None` if
    /// the run ended without reaching it.
    #[must_use]
    pub fn solution_path(&self) -> Option<Vec<PathStep>> {
        match self.termination {
            Termination::GoalReached { node_id } => {
                Some(reconstruct_path(&self.nodes, node_id))
            }
            Termination::FrontierExhausted | Termination::TimedOut => None,
        }
    }

    /// Number of moves in the solution (g of the goal node).
    #[must_use]
    pub fn solution_depth(&self) -> Option<u32> {
        self.goal_node.as_ref().map(|node| node.path_cost)
    }
}

/// One step of a reconstructed solution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// The board at this step.
    pub board: Board,
    /// The move that led here (`None` for the initial board).
    pub action: Option<Move>,
    /// g at this step.
    pub path_cost: u32,
    /// h at this step under the run's policy.
    pub heuristic_cost: u32,
}

/// Walk parent links from `goal_id` to the root and reverse, yielding the
/// root-to-goal step sequence.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNode], goal_id: usize) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current = Some(goal_id);

    while let Some(id) = current {
        let node = &nodes[id];
        path.push(PathStep {
            board: node.board,
            action: node.action,
            path_cost: node.path_cost,
            heuristic_cost: node.heuristic_cost,
        });
        current = node.parent;
    }

    path.reverse();
    path
}

/// Run best-first search from `initial` toward `goal` under the given
/// policy and configuration.
///
/// The caller is responsible for supplying validated boards (see
/// `Board::from_rows`); the engine does not re-validate. Solvability is
/// not checked up front: an unsolvable instance exhausts the finite
/// state space or hits the timeout, whichever comes first.
///
/// The loop replicates a specific metric protocol that downstream
/// consumers compare literally:
/// - `nodes_expanded` and the per-depth counter are bumped at pop time,
///   before the goal test, so the goal pop itself is counted;
/// - `max_frontier_size` starts at 1 for the root and is sampled after
///   each pop but before that node's children are pushed, and is not
///   sampled on the goal iteration;
/// - the timeout is checked once per iteration, before the pop.
#[must_use]
pub fn search(
    initial: &Board,
    goal: &Board,
    strategy: SearchStrategy,
    config: &SearchConfig,
) -> SearchOutcome {
    let start = Instant::now();
    let goal_index = GoalIndex::new(goal);

    let mut frontier = Frontier::new();
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut insertion_counter: u64 = 0;
    let mut metrics = RunMetrics {
        max_frontier_size: 1,
        ..RunMetrics::default()
    };

    let root = SearchNode {
        id: 0,
        parent: None,
        board: *initial,
        action: None,
        path_cost: 0,
        heuristic_cost: strategy.heuristic(initial, &goal_index),
        insertion_order: insertion_counter,
        nodes_expanded: 0,
        max_frontier_size: 0,
    };
    insertion_counter += 1;
    frontier.mark_explored(initial.fingerprint());
    frontier.push(root.frontier_key(), root.id);
    nodes.push(root);

    let termination = loop {
        if frontier.is_empty() {
            break Termination::FrontierExhausted;
        }
        if start.elapsed() > config.timeout {
            metrics.timed_out = true;
            break Termination::TimedOut;
        }

        let Some(node_id) = frontier.pop() else {
            // Checked non-empty above; keep the negative branch total.
            break Termination::FrontierExhausted;
        };

        metrics.nodes_expanded += 1;
        *metrics
            .per_depth_expansions
            .entry(nodes[node_id].path_cost)
            .or_insert(0) += 1;

        if nodes[node_id].board == *goal {
            // The only post-construction write a node ever sees.
            nodes[node_id].nodes_expanded = metrics.nodes_expanded;
            nodes[node_id].max_frontier_size = metrics.max_frontier_size;
            break Termination::GoalReached { node_id };
        }

        // Sampled after the pop, before the children go in. Moving this
        // sample changes the reported value; downstream comparisons
        // depend on this exact placement.
        let queued = frontier.len() as u64;
        if queued > metrics.max_frontier_size {
            metrics.max_frontier_size = queued;
        }

        let parent_board = nodes[node_id].board;
        let child_cost = nodes[node_id].path_cost + 1;
        for (child_board, mv) in parent_board.successors() {
            if !frontier.mark_explored(child_board.fingerprint()) {
                continue;
            }
            let child = SearchNode {
                id: nodes.len(),
                parent: Some(node_id),
                board: child_board,
                action: Some(mv),
                path_cost: child_cost,
                heuristic_cost: strategy.heuristic(&child_board, &goal_index),
                insertion_order: insertion_counter,
                nodes_expanded: 0,
                max_frontier_size: 0,
            };
            insertion_counter += 1;
            frontier.push(child.frontier_key(), child.id);
            nodes.push(child);
        }
    };

    metrics.elapsed = start.elapsed();

    let goal_node = match termination {
        Termination::GoalReached { node_id } => Some(nodes[node_id].clone()),
        Termination::FrontierExhausted | Termination::TimedOut => None,
    };

    SearchOutcome {
        goal_node,
        nodes,
        termination,
        metrics,
    }
}
