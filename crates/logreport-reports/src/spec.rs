//! Report specifications.
//!
//! One descriptor per report section, produced as pure declarative
//! data. New report types are added by appending a descriptor here;
//! rendering and escaping never need to change. Chart specs are
//! static Vega-Lite fragments parameterized only by the data fields
//! they reference; the charting library evaluates them against the
//! rows at render time.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use logreport_core::{DataSet, InputFormat, Row};

/// Column alignment tag, used by plain-text rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of one report section.
///
/// Immutable once produced; the display order of a report set is the
/// order `build_reports` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSpec {
    /// Section heading; also the source of the anchor slug.
    pub title: String,
    /// Ordered column names.
    pub header: Vec<String>,
    /// Data rows, sourced from one series of the data mapping.
    pub rows: Vec<Row>,
    /// One tag per header column.
    pub column_alignment: Vec<Align>,
    /// Vega-Lite fragment describing how to plot `rows`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_spec: Option<Value>,
    /// DataTables directives for the interactive table widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_options: Option<String>,
    /// Grid placement override for wide reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_hint: Option<String>,
}

/// Build the ordered report set for an input format.
///
/// Pure function of `(data, format)`: identical input yields an
/// identical descriptor sequence, and `data` is never mutated. A
/// missing series key degrades to a report with empty rows.
pub fn build_reports(data: &DataSet, format: InputFormat) -> Vec<ReportSpec> {
    match format {
        InputFormat::Apache => apache_reports(data),
    }
}

fn report(
    data: &DataSet,
    title: &str,
    series: &str,
    header: &[&str],
    alignment: &[Align],
) -> ReportSpec {
    debug_assert_eq!(header.len(), alignment.len());
    ReportSpec {
        title: title.to_string(),
        header: header.iter().map(|s| s.to_string()).collect(),
        rows: data.series(series).to_vec(),
        column_alignment: alignment.to_vec(),
        chart_spec: None,
        widget_options: None,
        layout_hint: None,
    }
}

/// DataTables column hint shared by the path-keyed reports.
const PATH_COLUMN_OPTIONS: &str = "columnDefs: [{ width: '40%', targets: 0 } ]";

/// Text label overlay used on most bar/line charts.
fn text_layer(field: &str) -> Value {
    json!({
        "mark": {
            "type": "text",
            "align": "middle",
            "baseline": "top",
            "dx": -10,
            "yOffset": -15
        },
        "encoding": {
            "text": {"field": field, "type": "quantitative"},
            "y": {"field": field, "type": "quantitative"}
        }
    })
}

/// Bar chart of hits keyed by a nominal field, with a label overlay.
fn labeled_bar_chart(x_field: &str) -> Value {
    json!({
        "layer": [
            {"mark": "bar"},
            {
                "mark": {
                    "type": "text",
                    "align": "middle",
                    "baseline": "top",
                    "dx": -10,
                    "yOffset": -15
                },
                "encoding": {
                    "text": {"field": "Hits", "type": "quantitative"}
                }
            }
        ],
        "encoding": {
            "x": {"field": x_field, "type": "nominal"},
            "y": {"field": "Hits", "type": "quantitative"}
        }
    })
}

fn apache_reports(data: &DataSet) -> Vec<ReportSpec> {
    use Align::{Left, Right};

    vec![
        ReportSpec {
            chart_spec: Some(json!({
                "layer": [
                    {
                        "mark": {
                            "type": "line",
                            "point": {"filled": false, "fill": "white"}
                        },
                        "encoding": {
                            "y": {"field": "Hits", "type": "quantitative"}
                        }
                    },
                    {
                        "mark": {
                            "type": "text",
                            "color": "#3E5772",
                            "align": "middle",
                            "baseline": "top",
                            "dx": -10,
                            "yOffset": -15
                        },
                        "encoding": {
                            "text": {"field": "Hits", "type": "quantitative"},
                            "y": {"field": "Hits", "type": "quantitative"}
                        }
                    },
                    {
                        "mark": {
                            "type": "line",
                            "color": "#A52A2A",
                            "point": {"color": "#A52A2A", "filled": false, "fill": "white"}
                        },
                        "encoding": {
                            "y": {"field": "Visits", "type": "quantitative"}
                        }
                    },
                    {
                        "mark": {
                            "type": "text",
                            "color": "#A52A2A",
                            "align": "middle",
                            "baseline": "top",
                            "dx": -10,
                            "yOffset": -15
                        },
                        "encoding": {
                            "text": {"field": "Visits", "type": "quantitative"},
                            "y": {"field": "Visits", "type": "quantitative"}
                        }
                    }
                ],
                "encoding": {
                    "x": {"field": "Day", "type": "temporal"}
                }
            })),
            ..report(
                data,
                "Daily Distribution",
                "daily_distribution",
                &["Day", "DOW", "Hits", "Visits", "Size"],
                &[Left, Left, Right, Right, Right],
            )
        },
        ReportSpec {
            chart_spec: Some(json!({
                "layer": [
                    {"mark": "bar"},
                    text_layer("Hits")
                ],
                "encoding": {
                    "x": {"field": "Hour", "type": "nominal"},
                    "y": {"field": "Hits", "type": "quantitative"}
                }
            })),
            ..report(
                data,
                "Time Distribution",
                "time_distribution",
                &["Hour", "Hits", "Visits", "Size"],
                &[Left, Right, Right, Right],
            )
        },
        ReportSpec {
            widget_options: Some(PATH_COLUMN_OPTIONS.to_string()),
            ..report(
                data,
                "20_ and 30_ on HTML pages",
                "most_requested_pages",
                &["Path", "Hits", "Visits", "Size", "Status"],
                &[Left, Right, Right, Right, Right],
            )
        },
        ReportSpec {
            widget_options: Some(PATH_COLUMN_OPTIONS.to_string()),
            ..report(
                data,
                "20_ and 30_ on other resources",
                "most_requested_resources",
                &["Path", "Hits", "Visits", "Size", "Status"],
                &[Left, Right, Right, Right, Right],
            )
        },
        ReportSpec {
            widget_options: Some(PATH_COLUMN_OPTIONS.to_string()),
            ..report(
                data,
                "40_ and 50_x on HTML pages",
                "missed_pages",
                &["Path", "Hits", "Visits", "Status"],
                &[Left, Right, Right, Right],
            )
        },
        ReportSpec {
            widget_options: Some(PATH_COLUMN_OPTIONS.to_string()),
            ..report(
                data,
                "40_ and 50_ on other resources",
                "missed_resources",
                &["Path", "Hits", "Visits", "Status"],
                &[Left, Right, Right, Right],
            )
        },
        ReportSpec {
            chart_spec: Some(json!({
                "mark": "bar",
                "encoding": {
                    "x": {"field": "Status", "type": "nominal"},
                    "y": {"field": "Count", "type": "quantitative"}
                }
            })),
            ..report(
                data,
                "Statuses",
                "statuses",
                &["Status", "Count"],
                &[Left, Right],
            )
        },
        ReportSpec {
            chart_spec: Some(json!({
                "transform": [{"fold": ["S_2xx", "S_3xx", "S_4xx"]}],
                "mark": "bar",
                "encoding": {
                    "x": {
                        "field": "Date",
                        "type": "ordinal",
                        "timeUnit": "day"
                    },
                    "y": {
                        "aggregate": "sum",
                        "field": "value",
                        "type": "quantitative"
                    },
                    "color": {
                        "field": "key",
                        "type": "nominal",
                        "scale": {
                            "domain": ["S_2xx", "S_3xx", "S_4xx"],
                            "range": ["#228b22", "#ff8c00", "#a52a2a"]
                        }
                    }
                }
            })),
            ..report(
                data,
                "Daily Statuses",
                "statuses_by_day",
                &["Date", "S_2xx", "S_3xx", "S_4xx"],
                &[Left, Right, Right, Right],
            )
        },
        ReportSpec {
            chart_spec: Some(labeled_bar_chart("Browser")),
            ..report(
                data,
                "Browsers",
                "browsers",
                &["Browser", "Hits", "Visits", "Size"],
                &[Left, Right, Right, Right],
            )
        },
        ReportSpec {
            chart_spec: Some(labeled_bar_chart("Platform")),
            ..report(
                data,
                "Platforms",
                "platforms",
                &["Platform", "Hits", "Visits", "Size"],
                &[Left, Right, Right, Right],
            )
        },
        report(
            data,
            "IPs",
            "ips",
            &["IPs", "Hits", "Visits", "Size", "Country"],
            &[Left, Right, Right, Right, Right],
        ),
        ReportSpec {
            layout_hint: Some("small-12 cell".to_string()),
            ..report(
                data,
                "Referers",
                "referers",
                &["Referers", "Hits", "Visits", "Size"],
                &[Left, Right, Right, Right],
            )
        },
    ]
}
