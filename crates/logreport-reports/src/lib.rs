//! Report emission for logreport.
//!
//! This crate turns a pre-computed analytics data mapping into a
//! single report artifact:
//! - Report specifications (one declarative descriptor per section)
//! - Script-context escaping and slug generation
//! - Template resolution and rendering per `(input, output)` pair
//! - Plain-text table formatting
//! - The output sink (file or stdout)

pub mod emitter;
pub mod escape;
pub mod sink;
pub mod spec;
pub mod template;
pub mod text_table;

pub use emitter::{emit, render, EmitOptions};
pub use escape::{dispatch_value, escape_script, slugify};
pub use spec::{build_reports, Align, ReportSpec};
pub use template::{RenderContext, TemplateStore};
