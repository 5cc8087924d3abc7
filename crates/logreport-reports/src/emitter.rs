//! The multi-format emission pipeline.
//!
//! `emit` is a straight-line sequence: resolve formats, build the
//! report set, render the whole artifact in memory, write once. All
//! state is scoped to the single call; nothing is shared or cached
//! across invocations.

use std::path::PathBuf;

use log::debug;

use logreport_core::{DataSet, EmitError, InputFormat};

use crate::sink;
use crate::spec::build_reports;
use crate::template::{RenderContext, TemplateStore};

/// Options for one emission.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Which report specification and template family to use.
    pub input_format: String,
    /// Output serialization: `html`, `json` or `txt`.
    pub output_format: String,
    /// Report destination; standard output when absent.
    pub output_file: Option<PathBuf>,
    /// Page heading, typically the analyzed log's name.
    pub title: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            input_format: InputFormat::DEFAULT.as_str().to_string(),
            output_format: "html".to_string(),
            output_file: None,
            title: "Log Report".to_string(),
        }
    }
}

/// Render the report artifact for `data` as a string.
///
/// Fails with `UnsupportedInputFormat` when no report specification
/// exists for `options.input_format`, and with `TemplateNotFound`
/// when the `(input, output)` pair has no template.
pub fn render(data: &DataSet, options: &EmitOptions) -> Result<String, EmitError> {
    let input: InputFormat = options.input_format.parse()?;
    let store = TemplateStore::new()?;
    let key = store.resolve(input.as_str(), &options.output_format)?;

    let reports = build_reports(data, input);
    debug!(
        "rendering {} reports ({} data series) via template `{}`",
        reports.len(),
        data.len(),
        key
    );

    let context = RenderContext {
        title: &options.title,
        input_format: input.as_str(),
        output_format: &options.output_format,
        reports: &reports,
        data,
    };
    store.render(&key, &context)
}

/// Render the report and hand it to the output sink.
///
/// Rendering happens fully in memory before the sink is touched, so a
/// failed call never leaves a truncated artifact behind.
pub fn emit(data: &DataSet, options: &EmitOptions) -> Result<(), EmitError> {
    let output = render(data, options)?;
    sink::write(&output, options.output_file.as_deref())
}
