//! Eightsolver Search: the generic best-first search engine.
//!
//! One engine, three interchangeable priority policies (uniform cost,
//! A* misplaced tile, A* Manhattan distance). The engine owns the frontier,
//! the explored set, and the node arena for exactly one run; everything is
//! discarded when [`search::search`] returns.
//!
//! # Key types
//!
//! - [`SearchNode`] — write-once node in the engine-owned arena
//! - [`Frontier`] — min-f binary heap plus the explored fingerprint set
//! - [`SearchStrategy`] — the enumerated priority policy
//! - [`SearchConfig`] — per-call configuration (timeout)
//! - [`RunMetrics`] / [`Termination`] — what a run reports back
//! - [`SearchOutcome`] — terminal node, arena, and metrics

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod frontier;
pub mod metrics;
pub mod node;
pub mod search;
pub mod strategy;

pub use frontier::Frontier;
pub use metrics::{RunMetrics, Termination};
pub use node::{FrontierKey, SearchNode};
pub use search::{search, PathStep, SearchOutcome};
pub use strategy::{SearchConfig, SearchStrategy};
