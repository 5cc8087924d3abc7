use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None
)]
pub struct Args {
    /// JSON file with the pre-computed data mapping; reads standard
    /// input when omitted
    pub data: Option<PathBuf>,

    /// Input format the data mapping was computed from
    #[arg(short, long, default_value = "apache")]
    pub input_format: String,

    /// Output serialization: html, json or txt
    #[arg(short, long, default_value = "html")]
    pub output_format: String,

    /// Write the report here instead of standard output
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Report page heading
    #[arg(short, long, default_value = "Log Report")]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["logreport"]);
        assert_eq!(args.input_format, "apache");
        assert_eq!(args.output_format, "html");
        assert!(args.data.is_none());
        assert!(args.output_file.is_none());
    }

    #[test]
    fn test_explicit_args() {
        let args = Args::parse_from([
            "logreport",
            "access.json",
            "--output-format",
            "txt",
            "--output-file",
            "report.txt",
            "--title",
            "March access log",
        ]);
        assert_eq!(args.data.unwrap(), PathBuf::from("access.json"));
        assert_eq!(args.output_format, "txt");
        assert_eq!(args.output_file.unwrap(), PathBuf::from("report.txt"));
        assert_eq!(args.title, "March access log");
    }
}
