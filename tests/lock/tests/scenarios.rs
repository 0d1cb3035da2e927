//! Concrete end-to-end scenarios: trivial instances with pinned numbers,
//! the heuristic strength ordering on a deep instance, duplicate-state
//! guarantees, and the negative-result paths.

use std::collections::BTreeSet;
use std::time::Duration;

use eightsolver_puzzle::{Board, Move};
use eightsolver_search::{search, SearchConfig, SearchStrategy, Termination};

fn goal() -> Board {
    Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap()
}

#[test]
fn already_solved_input_pins_depth_and_expansions() {
    for strategy in SearchStrategy::ALL {
        let outcome = search(&goal(), &goal(), strategy, &SearchConfig::default());

        assert_eq!(outcome.solution_depth(), Some(0), "{strategy}");
        assert_eq!(outcome.metrics.nodes_expanded, 1, "{strategy}");
        assert_eq!(outcome.metrics.max_frontier_size, 1, "{strategy}");

        let path = outcome.solution_path().unwrap();
        assert_eq!(path.len(), 1, "{strategy}: no moves in the path");
    }
}

#[test]
fn one_move_input_pins_the_two_step_path() {
    let initial = Board::from_rows([[1, 2, 3], [4, 5, 0], [7, 8, 6]]).unwrap();

    for strategy in SearchStrategy::ALL {
        let outcome = search(&initial, &goal(), strategy, &SearchConfig::default());
        let path = outcome.solution_path().unwrap();

        assert_eq!(path.len(), 2, "{strategy}");
        assert_eq!(path[0].board, initial);
        assert_eq!(path[0].action, None);
        assert_eq!(path[0].path_cost, 0);
        assert_eq!(path[1].board, goal());
        assert_eq!(path[1].action, Some(Move::Down), "{strategy}");
        assert_eq!(path[1].path_cost, 1);
        assert_eq!(path[1].heuristic_cost, 0);
    }
}

#[test]
fn heuristic_strength_orders_expansion_counts_at_depth_20() {
    let initial = Board::from_rows([[7, 1, 2], [4, 8, 5], [6, 3, 0]]).unwrap();
    let config = SearchConfig::default();

    let ucs = search(&initial, &goal(), SearchStrategy::UniformCost, &config);
    let misplaced = search(&initial, &goal(), SearchStrategy::MisplacedTile, &config);
    let manhattan = search(&initial, &goal(), SearchStrategy::ManhattanDistance, &config);

    // All three find depth 20.
    for outcome in [&ucs, &misplaced, &manhattan] {
        assert_eq!(outcome.solution_depth(), Some(20));
    }

    let n_ucs = ucs.metrics.nodes_expanded;
    let n_misplaced = misplaced.metrics.nodes_expanded;
    let n_manhattan = manhattan.metrics.nodes_expanded;

    assert!(
        n_manhattan <= n_misplaced && n_misplaced <= n_ucs,
        "expected manhattan <= misplaced <= ucs, got {n_manhattan} / {n_misplaced} / {n_ucs}"
    );
    assert!(
        n_manhattan * 2 < n_ucs,
        "a depth-20 instance must separate the informed and uninformed searches \
         substantially, got {n_manhattan} vs {n_ucs}"
    );
}

#[test]
fn no_state_is_generated_twice_in_a_run() {
    let initial = Board::from_rows([[1, 6, 7], [5, 0, 3], [4, 8, 2]]).unwrap();

    for strategy in SearchStrategy::ALL {
        let outcome = search(&initial, &goal(), strategy, &SearchConfig::default());

        let mut fingerprints = BTreeSet::new();
        for node in &outcome.nodes {
            assert!(
                fingerprints.insert(node.board.fingerprint()),
                "{strategy}: state generated twice:\n{}",
                node.board
            );
        }
        // Expansions draw from generated nodes, so unique generation
        // bounds expansions from above.
        assert!(
            outcome.metrics.nodes_expanded <= outcome.nodes.len() as u64,
            "{strategy}: more expansions than generated nodes"
        );
    }
}

#[test]
fn unsolvable_input_exhausts_rather_than_errors() {
    let unsolvable = Board::from_rows([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    let outcome = search(
        &unsolvable,
        &goal(),
        SearchStrategy::ManhattanDistance,
        &SearchConfig::default(),
    );

    assert_eq!(outcome.termination, Termination::FrontierExhausted);
    assert!(outcome.goal_node.is_none());
    assert!(!outcome.metrics.timed_out);
    assert!(
        outcome.metrics.nodes_expanded > 0,
        "exhaustion still reports the work done"
    );
}

#[test]
fn tiny_timeout_on_a_deep_instance_reports_timed_out() {
    let initial = Board::from_rows([[0, 7, 2], [4, 6, 1], [3, 5, 8]]).unwrap();
    let outcome = search(
        &initial,
        &goal(),
        SearchStrategy::UniformCost,
        &SearchConfig::with_timeout(Duration::from_nanos(1)),
    );

    assert_eq!(outcome.termination, Termination::TimedOut);
    assert!(outcome.metrics.timed_out);
    assert!(outcome.goal_node.is_none());
    assert!(outcome.solution_path().is_none());
}

#[test]
fn default_timeout_solves_the_deepest_suite_instance() {
    // Depth 24, the deepest instance the experiment ladder carries.
    let initial = Board::from_rows([[0, 7, 2], [4, 6, 1], [3, 5, 8]]).unwrap();
    let outcome = search(
        &initial,
        &goal(),
        SearchStrategy::ManhattanDistance,
        &SearchConfig::default(),
    );

    assert_eq!(outcome.solution_depth(), Some(24));
    assert!(!outcome.metrics.timed_out);
}
