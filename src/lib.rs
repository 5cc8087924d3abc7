//! logreport: multi-format report emission for pre-computed log
//! analytics.
//!
//! The heavy lifting lives in the workspace crates; this package adds
//! the CLI and the data-mapping input loader.

pub mod cli;
pub mod input;

// Re-export the core surface for convenience
pub use logreport_core::{DataSet, EmitError, InputFormat, Row, Scalar};
pub use logreport_reports::{build_reports, emit, render, Align, EmitOptions, ReportSpec};
