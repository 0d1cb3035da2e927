//! Eightsolver Harness: everything around the engine.
//!
//! The harness owns the thin outer layers the engine deliberately excludes:
//! collecting and validating user input, running the experiment suite, and
//! rendering or exporting results. It contains no search logic; it hands
//! validated boards to `eightsolver_search` and formats what comes back.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod report;
pub mod scenario;
