//! Rendering utilities for report surfaces (Markdown, CSV) and the account list filters.

#![forbid(unsafe_code)]

mod csv;
mod filter;
mod markdown;

#[cfg(test)]
mod test_support;

pub use csv::render_csv;
pub use filter::{AccountFilter, matches_search, select_accounts};
pub use markdown::render_markdown;
