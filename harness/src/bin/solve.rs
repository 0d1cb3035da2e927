//! Interactive 8-puzzle driver.
//!
//! Mirrors the classic assignment flow: pick the default puzzle, type a
//! custom one, or sweep the experiment suite; then pick a strategy and
//! read the rendered solution.

use std::io::{self, BufRead, Write};
use std::path::Path;

use eightsolver_harness::input::{board_from_rows, parse_row, CANONICAL_GOAL, DEFAULT_PUZZLE};
use eightsolver_harness::report::{render_solution, write_suite_results};
use eightsolver_harness::scenario::{benchmark_suite, run_suite};
use eightsolver_puzzle::board::SIDE;
use eightsolver_puzzle::Board;
use eightsolver_search::{search, SearchConfig, SearchStrategy};

const RESULTS_FILE: &str = "suite_results.json";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the 8-Puzzle Solver!");
    println!("Type '1' to use the default puzzle, '2' to create your own, or '3' to run the experiments.");

    let initial = match prompt(&mut lines, "Enter your choice: ")?.trim() {
        "1" => Board::from_rows(DEFAULT_PUZZLE).expect("default puzzle is valid"),
        "2" => match read_custom_board(&mut lines)? {
            Some(board) => board,
            None => return Ok(()),
        },
        "3" => return run_experiments(),
        other => {
            println!("Invalid choice {other:?}! Please enter '1', '2', or '3'.");
            return Ok(());
        }
    };

    println!("\nSelect algorithm:");
    println!("(1) Uniform Cost Search");
    println!("(2) A* with Misplaced Tile Heuristic");
    println!("(3) A* with Manhattan Distance Heuristic");

    let strategy = match prompt(&mut lines, "Please enter your choice: ")?.trim() {
        "1" => SearchStrategy::UniformCost,
        "2" => SearchStrategy::MisplacedTile,
        "3" => SearchStrategy::ManhattanDistance,
        other => {
            println!("Invalid choice {other:?}! Please enter 1, 2, or 3.");
            return Ok(());
        }
    };

    let goal = Board::from_rows(CANONICAL_GOAL).expect("canonical goal is valid");
    let outcome = search(&initial, &goal, strategy, &SearchConfig::default());
    println!("\n{}", render_solution(&outcome));
    Ok(())
}

/// Print a prompt and read one line.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    lines.next().unwrap_or_else(|| Ok(String::new()))
}

/// Read three rows from the user and validate them into a board.
fn read_custom_board(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<Board>> {
    println!("\nEnter your puzzle, using 0 to represent the blank space.");
    println!("Delimit numbers with spaces and press RETURN after each row.\n");

    let mut rows = Vec::with_capacity(SIDE);
    for row_index in 0..SIDE {
        let line = prompt(lines, &format!("Enter row {}: ", row_index + 1))?;
        match parse_row(row_index, &line) {
            Ok(row) => rows.push(row),
            Err(err) => {
                println!("Invalid row: {err}");
                return Ok(None);
            }
        }
    }

    match board_from_rows(&rows) {
        Ok(board) => Ok(Some(board)),
        Err(err) => {
            println!("Invalid puzzle: {err}");
            Ok(None)
        }
    }
}

/// Sweep the benchmark suite with every strategy and save the artifact.
fn run_experiments() -> io::Result<()> {
    println!("\nRunning the experiment suite (depths 0-24, all strategies)...");
    let results = run_suite(&benchmark_suite(), &SearchConfig::default());

    for row in &results.rows {
        let depth = row
            .solution_depth
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "{:<24} depth {:>2} -> found {:>2}, expanded {:>7}, max queue {:>6}, {:.3}s{}",
            row.strategy.to_string(),
            row.expected_depth,
            depth,
            row.nodes_expanded,
            row.max_frontier_size,
            row.elapsed.as_secs_f64(),
            if row.timed_out { " (timed out)" } else { "" },
        );
    }

    write_suite_results(Path::new(RESULTS_FILE), &results)?;
    println!("\nWrote {RESULTS_FILE}");
    Ok(())
}
