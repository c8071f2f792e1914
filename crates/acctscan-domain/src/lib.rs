//! Pure account evaluation (no IO).
//!
//! Input: account records loaded elsewhere, a rule configuration, and the evaluation time.
//! Output: per-account scan results + an aggregate summary.

#![forbid(unsafe_code)]

pub mod policy;
pub mod rules;

mod engine;
mod summary;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{Scanner, evaluate, scan};
pub use summary::summarize;
