//! Determinism locks: repeated runs on the same input and policy must
//! reproduce every reported number and the exact solution path. The fixed
//! successor enumeration order and the FIFO tie-break are what make this
//! hold; these tests are the tripwire for anyone touching either.

use eightsolver_puzzle::Board;
use eightsolver_search::{search, SearchConfig, SearchStrategy};

fn goal() -> Board {
    Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap()
}

fn depth_12_instance() -> Board {
    Board::from_rows([[1, 3, 6], [5, 0, 7], [4, 8, 2]]).unwrap()
}

#[test]
fn ten_runs_reproduce_all_counters_and_the_path() {
    for strategy in SearchStrategy::ALL {
        let first = search(
            &depth_12_instance(),
            &goal(),
            strategy,
            &SearchConfig::default(),
        );
        assert!(first.termination.is_goal(), "{strategy}: goal not reached");

        for i in 1..=10 {
            let run = search(
                &depth_12_instance(),
                &goal(),
                strategy,
                &SearchConfig::default(),
            );
            assert_eq!(
                run.metrics.nodes_expanded, first.metrics.nodes_expanded,
                "{strategy} run {i}: nodes_expanded differs"
            );
            assert_eq!(
                run.metrics.max_frontier_size, first.metrics.max_frontier_size,
                "{strategy} run {i}: max_frontier_size differs"
            );
            assert_eq!(
                run.metrics.per_depth_expansions, first.metrics.per_depth_expansions,
                "{strategy} run {i}: per-depth histogram differs"
            );
            assert_eq!(
                run.solution_path(),
                first.solution_path(),
                "{strategy} run {i}: solution path differs"
            );
        }
    }
}

#[test]
fn per_depth_histogram_accounts_for_every_expansion() {
    for strategy in SearchStrategy::ALL {
        let outcome = search(
            &depth_12_instance(),
            &goal(),
            strategy,
            &SearchConfig::default(),
        );
        let histogram_total: u64 = outcome.metrics.per_depth_expansions.values().sum();
        assert_eq!(
            histogram_total, outcome.metrics.nodes_expanded,
            "{strategy}: per-depth counts must sum to nodes_expanded"
        );
    }
}

#[test]
fn arena_ids_match_positions_and_parents_precede_children() {
    let outcome = search(
        &depth_12_instance(),
        &goal(),
        SearchStrategy::ManhattanDistance,
        &SearchConfig::default(),
    );
    for (position, node) in outcome.nodes.iter().enumerate() {
        assert_eq!(node.id, position, "arena id must be the arena index");
        if let Some(parent) = node.parent {
            assert!(parent < node.id, "parents are created before children");
        } else {
            assert_eq!(node.id, 0, "only the root lacks a parent");
        }
    }
}
