//! Template resolution and rendering.
//!
//! Top-level templates are addressed by `(input_format,
//! output_format)` pair; partials by bare name, invoked from the
//! top-level templates with an explicit parameter hash. Templates see
//! only the [`RenderContext`] they are handed, never caller state.

use std::collections::BTreeSet;

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output,
    RenderContext as HandlebarsRenderContext, RenderErrorReason,
};
use serde::Serialize;
use serde_json::Value;

use logreport_core::{DataSet, EmitError};

use crate::escape::{escape_script, slugify};
use crate::spec::ReportSpec;
use crate::text_table;

/// Embedded template resources: top-level templates keyed by
/// `{input}.{output}`, partials by bare name.
const TEMPLATES: &[(&str, &str)] = &[
    ("apache.html", include_str!("../templates/apache.html.hbs")),
    ("apache.json", include_str!("../templates/apache.json.hbs")),
    ("apache.txt", include_str!("../templates/apache.txt.hbs")),
    (
        "report_section",
        include_str!("../templates/report_section.html.hbs"),
    ),
    (
        "report_table",
        include_str!("../templates/report_table.html.hbs"),
    ),
];

/// Everything a template execution may see.
///
/// Built fresh for each `emit` call and discarded afterwards;
/// templates format this context but cannot modify it.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub input_format: &'a str,
    pub output_format: &'a str,
    pub reports: &'a [ReportSpec],
    pub data: &'a DataSet,
}

/// Registry of the embedded templates plus the render-time helpers.
pub struct TemplateStore {
    registry: Handlebars<'static>,
    names: BTreeSet<&'static str>,
}

impl TemplateStore {
    pub fn new() -> Result<Self, EmitError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_helper("slug", Box::new(slug_helper));
        registry.register_helper("dispatch", Box::new(dispatch_helper));
        registry.register_helper("json", Box::new(json_helper));
        registry.register_helper("to_json", Box::new(to_json_helper));
        registry.register_helper("chart_rows", Box::new(chart_rows_helper));
        registry.register_helper("text_table", Box::new(text_table_helper));

        let mut names = BTreeSet::new();
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, *source)
                .map_err(|e| EmitError::Render {
                    message: format!("invalid template `{}`: {}", name, e),
                })?;
            names.insert(*name);
        }

        Ok(TemplateStore { registry, names })
    }

    /// Resolve an `(input, output)` pair to its template key.
    pub fn resolve(&self, input_format: &str, output_format: &str) -> Result<String, EmitError> {
        let key = format!("{}.{}", input_format, output_format);
        if self.names.contains(key.as_str()) {
            Ok(key)
        } else {
            Err(EmitError::TemplateNotFound { key })
        }
    }

    /// Execute a top-level template against the render context,
    /// producing the full artifact in memory.
    pub fn render(&self, key: &str, context: &RenderContext<'_>) -> Result<String, EmitError> {
        self.registry
            .render(key, context)
            .map_err(|e| EmitError::Render {
                message: e.to_string(),
            })
    }

    /// Execute a named sub-template against an explicit variable set.
    pub fn render_partial<T: Serialize>(&self, name: &str, vars: &T) -> Result<String, EmitError> {
        if !self.names.contains(name) {
            return Err(EmitError::TemplateNotFound {
                key: name.to_string(),
            });
        }
        self.registry
            .render(name, vars)
            .map_err(|e| EmitError::Render {
                message: e.to_string(),
            })
    }
}

fn param_value<'a>(
    h: &'a Helper,
    helper_name: &'static str,
) -> Result<&'a Value, RenderErrorReason> {
    h.param(0)
        .map(|p| p.value())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper_name, 0))
}

/// `{{slug title}}`: anchor identifier for a report title.
fn slug_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HandlebarsRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let title = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&slugify(title))?;
    Ok(())
}

/// `{{dispatch cell}}`: script-safe textual form of a cell value.
fn dispatch_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HandlebarsRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = param_value(h, "dispatch")?;
    out.write(&dispatch_json(value))?;
    Ok(())
}

/// `{{json value}}`: compact JSON serialization of a context value.
fn json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HandlebarsRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = param_value(h, "json")?;
    out.write(&value.to_string())?;
    Ok(())
}

/// `{{to_json value}}`: pretty JSON, used by the json output format.
fn to_json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HandlebarsRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = param_value(h, "to_json")?;
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| RenderErrorReason::NestedError(Box::new(e)))?;
    out.write(&text)?;
    Ok(())
}

/// `{{chart_rows report}}`: the report rows as a script array of
/// records keyed by column name, ready to feed a chart.
fn chart_rows_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HandlebarsRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let report = param_value(h, "chart_rows")?;
    out.write(&chart_rows(report))?;
    Ok(())
}

/// `{{text_table report}}`: the report as an aligned plain-text table.
fn text_table_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HandlebarsRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = param_value(h, "text_table")?;
    let report: ReportSpec = serde_json::from_value(value.clone())
        .map_err(|e| RenderErrorReason::NestedError(Box::new(e)))?;
    out.write(&text_table::render_table(&report))?;
    Ok(())
}

/// Script-safe textual form of a JSON cell value, unquoted.
fn dispatch_json(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => escape_script(s),
        Value::Null => String::new(),
        other => escape_script(&other.to_string()),
    }
}

/// Script literal form: numbers bare, everything else quoted.
fn js_literal(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        other => format!("\"{}\"", dispatch_json(other)),
    }
}

fn chart_rows(report: &Value) -> String {
    let header: Vec<&str> = report
        .get("header")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let empty = Vec::new();
    let rows = report
        .get("rows")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let mut out = String::from("[");
    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            out.push_str(", ");
        }
        out.push('{');
        if let Some(cells) = row.as_array() {
            for (column, cell) in cells.iter().enumerate() {
                if column > 0 {
                    out.push_str(", ");
                }
                match header.get(column) {
                    Some(name) => out.push_str(&format!("\"{}\": ", name)),
                    None => out.push_str(&format!("\"column_{}\": ", column)),
                }
                out.push_str(&js_literal(cell));
            }
        }
        out.push('}');
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use logreport_core::InputFormat;
    use serde_json::json;

    fn empty_context<'a>(reports: &'a [ReportSpec], data: &'a DataSet) -> RenderContext<'a> {
        RenderContext {
            title: "Test Report",
            input_format: InputFormat::Apache.as_str(),
            output_format: "txt",
            reports,
            data,
        }
    }

    #[test]
    fn test_resolve_known_pairs() {
        let store = TemplateStore::new().unwrap();
        for output in ["html", "json", "txt"] {
            assert_eq!(
                store.resolve("apache", output).unwrap(),
                format!("apache.{}", output)
            );
        }
    }

    #[test]
    fn test_resolve_unknown_pair() {
        let store = TemplateStore::new().unwrap();
        let err = store.resolve("apache", "pdf").unwrap_err();
        match err {
            EmitError::TemplateNotFound { key } => assert_eq!(key, "apache.pdf"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_render_partial_requires_registered_name() {
        let store = TemplateStore::new().unwrap();
        let err = store.render_partial("nonexistent", &json!({})).unwrap_err();
        assert!(matches!(err, EmitError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_render_partial_with_explicit_vars() {
        let store = TemplateStore::new().unwrap();
        let report = json!({
            "title": "Statuses",
            "header": ["Status", "Count"],
            "rows": [["200", 10]],
            "column_alignment": ["left", "right"]
        });
        let html = store
            .render_partial("report_table", &json!({ "report": report }))
            .unwrap();
        assert!(html.contains("<th>Status</th>"));
        assert!(html.contains("<td>200</td>"));
        assert!(html.contains("<td>10</td>"));
    }

    #[test]
    fn test_render_txt_contains_titles() {
        let data = DataSet::new();
        let reports = crate::spec::build_reports(&data, InputFormat::Apache);
        let store = TemplateStore::new().unwrap();
        let key = store.resolve("apache", "txt").unwrap();
        let text = store.render(&key, &empty_context(&reports, &data)).unwrap();
        for report in &reports {
            assert!(text.contains(&report.title), "missing {}", report.title);
        }
    }

    #[test]
    fn test_chart_rows_records() {
        let report = json!({
            "header": ["Day", "Hits"],
            "rows": [["2024-01-01", 120], ["it's", 3]]
        });
        let rows = chart_rows(&report);
        assert_eq!(
            rows,
            "[{\"Day\": \"2024-01-01\", \"Hits\": 120}, {\"Day\": \"it \\'s\", \"Hits\": 3}]"
        );
    }

    #[test]
    fn test_dispatch_json() {
        assert_eq!(dispatch_json(&json!(42)), "42");
        assert_eq!(dispatch_json(&json!(3.14)), "3.14");
        assert_eq!(dispatch_json(&json!("a\nb")), "a\\nb");
        assert_eq!(dispatch_json(&Value::Null), "");
    }
}
