//! Monte Carlo match-outcome simulation from per-shot expected goals (xG).

pub mod config;
pub mod error;
pub mod outcomes;
pub mod parse;
pub mod report;
pub mod simulate;
pub mod summary;
