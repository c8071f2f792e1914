//! Use case orchestration for acctscan.
//!
//! This crate provides the application layer: use cases that coordinate the store, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI and server crates depend on this; they only handle transport, I/O, and exit codes.

#![forbid(unsafe_code)]

mod clock;
mod config;
mod explain;
mod render;
mod report;
mod scan;
mod schema;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::load_config;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_csv, render_markdown};
pub use report::{FailOn, fail_on_exit_code, parse_report_json, serialize_report};
pub use scan::ScanService;
pub use schema::{SchemaKind, schema_json};
