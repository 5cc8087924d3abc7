use std::path::PathBuf;

use logreport::input::load_data;
use logreport::{build_reports, emit, render, DataSet, EmitError, EmitOptions, InputFormat, Scalar};
use tempfile::tempdir;

fn example_data() -> DataSet {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("example").join("access.json");
    load_data(Some(&path)).expect("example data mapping should load")
}

fn options(output_format: &str) -> EmitOptions {
    EmitOptions {
        output_format: output_format.to_string(),
        title: "access.log".to_string(),
        ..EmitOptions::default()
    }
}

/// Every supported format pair produces a non-empty artifact that
/// names every report section.
#[test]
fn test_all_format_pairs_cover_all_titles() {
    let data = example_data();
    let titles: Vec<String> = build_reports(&data, InputFormat::Apache)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles.len(), 12);

    for output_format in ["html", "json", "txt"] {
        let artifact = render(&data, &options(output_format)).unwrap();
        assert!(!artifact.is_empty());
        for title in &titles {
            assert!(
                artifact.contains(title),
                "{} output missing `{}`",
                output_format,
                title
            );
        }
    }
}

#[test]
fn test_emit_writes_report_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("report.html");
    let mut opts = options("html");
    opts.output_file = Some(path.clone());

    emit(&example_data(), &opts)?;

    let html = std::fs::read_to_string(&path)?;
    assert!(html.contains("<h1>access.log</h1>"));
    assert!(html.contains("id=\"daily-distribution\""));
    assert!(html.contains("vegaEmbed"));
    Ok(())
}

#[test]
fn test_json_artifact_roundtrips_row_data() -> anyhow::Result<()> {
    let artifact = render(&example_data(), &options("json"))?;
    let value: serde_json::Value = serde_json::from_str(&artifact)?;

    let reports = value["reports"].as_array().unwrap();
    let statuses = reports
        .iter()
        .find(|r| r["title"] == "Statuses")
        .expect("Statuses report present");
    assert_eq!(statuses["rows"][0][0], "200");
    assert_eq!(statuses["rows"][0][1], 3100);
    Ok(())
}

#[test]
fn test_txt_artifact_renders_tables() -> anyhow::Result<()> {
    let artifact = render(&example_data(), &options("txt"))?;
    assert!(artifact.contains("Statuses"));
    assert!(artifact.contains("3100"));
    assert!(artifact.contains("Firefox"));
    Ok(())
}

#[test]
fn test_missing_series_degrade_to_empty_sections() {
    let mut data = DataSet::new();
    data.insert(
        "statuses",
        vec![vec![Scalar::from("200"), Scalar::Int(1)]],
    );

    for output_format in ["html", "json", "txt"] {
        let artifact = render(&data, &options(output_format)).unwrap();
        assert!(artifact.contains("Referers"));
    }
}

#[test]
fn test_unsupported_input_format_performs_no_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.html");
    let mut opts = options("html");
    opts.input_format = "nonexistent".to_string();
    opts.output_file = Some(path.clone());

    let err = emit(&example_data(), &opts).unwrap_err();
    assert!(matches!(err, EmitError::UnsupportedInputFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn test_unregistered_output_format_performs_no_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    let mut opts = options("pdf");
    opts.output_file = Some(path.clone());

    let err = emit(&example_data(), &opts).unwrap_err();
    assert!(matches!(err, EmitError::TemplateNotFound { .. }));
    assert!(!path.exists());
}
