use anyhow::Result;
use clap::Parser;
use log::debug;

use logreport_reports::{emit, EmitOptions};

use crate::cli::args::Args;
use crate::input::load_data;

pub struct RootCommand;

impl RootCommand {
    pub fn execute() -> Result<()> {
        let args = Args::parse();

        let data = load_data(args.data.as_deref())?;
        debug!("loaded {} data series", data.len());

        let options = EmitOptions {
            input_format: args.input_format,
            output_format: args.output_format,
            output_file: args.output_file,
            title: args.title,
        };
        emit(&data, &options)?;
        Ok(())
    }
}
