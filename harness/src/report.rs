//! Result rendering and the chart-ready results artifact.
//!
//! Text rendering feeds the interactive driver. The JSON artifact replaces
//! chart generation: a plotting layer consumes `suite_results.json`
//! instead of this crate linking a plotting stack.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use eightsolver_search::{SearchOutcome, SearchStrategy, Termination};

use crate::scenario::SuiteResults;

/// Render a finished run as the driver's solution text.
///
/// Shows each step's g(n)/h(n) and grid, then the summary counters, or the
/// appropriate negative notice for exhaustion and timeout.
///
/// # Panics
///
/// Panics if a goal-terminated outcome carries no path. The engine
/// guarantees it does, so that would be an engine bug.
#[must_use]
pub fn render_solution(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    match outcome.termination {
        Termination::TimedOut => {
            out.push_str("Search timed out before reaching the goal.\n");
            let _ = writeln!(
                out,
                "Nodes expanded before the deadline: {}",
                outcome.metrics.nodes_expanded
            );
            return out;
        }
        Termination::FrontierExhausted => {
            out.push_str("No solution found.\n");
            return out;
        }
        Termination::GoalReached { .. } => {}
    }

    let path = outcome
        .solution_path()
        .expect("goal termination always yields a path");

    out.push_str("Goal state!\n\n");
    for step in &path {
        let _ = writeln!(
            out,
            "The best state to expand with g(n) = {} and h(n) = {} is...",
            step.path_cost, step.heuristic_cost
        );
        let _ = writeln!(out, "{}", step.board);
    }

    let _ = writeln!(out, "The solution depth was {}", path.len() - 1);
    let _ = writeln!(
        out,
        "Number of nodes expanded: {}",
        outcome.metrics.nodes_expanded
    );
    let _ = writeln!(out, "Max queue size: {}", outcome.metrics.max_frontier_size);
    out
}

/// Project suite measurements into the chart-ready JSON shape: one series
/// per strategy, parallel arrays over the scenario ladder.
#[must_use]
pub fn suite_results_json(results: &SuiteResults) -> serde_json::Value {
    let mut strategies = serde_json::Map::new();

    for strategy in SearchStrategy::ALL {
        let rows: Vec<_> = results.for_strategy(strategy).collect();
        let depths: Vec<u32> = rows.iter().map(|r| r.expected_depth).collect();
        let times: Vec<f64> = rows.iter().map(|r| r.elapsed.as_secs_f64()).collect();
        let nodes: Vec<u64> = rows.iter().map(|r| r.nodes_expanded).collect();
        let queue: Vec<u64> = rows.iter().map(|r| r.max_frontier_size).collect();
        let solved: Vec<bool> = rows
            .iter()
            .map(|r| r.solution_depth == Some(r.expected_depth))
            .collect();

        strategies.insert(
            strategy.to_string(),
            serde_json::json!({
                "depths": depths,
                "times": times,
                "nodes": nodes,
                "queue": queue,
                "solved": solved,
            }),
        );
    }

    serde_json::Value::Object(strategies)
}

/// Write the suite results artifact to disk as pretty-printed JSON.
///
/// # Errors
///
/// Returns any filesystem error from the write.
pub fn write_suite_results(path: &Path, results: &SuiteResults) -> io::Result<()> {
    let value = suite_results_json(results);
    let bytes = serde_json::to_vec_pretty(&value)?;
    std::fs::write(path, bytes)
}
