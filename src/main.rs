use anyhow::Result;

use logreport::cli::RootCommand;

fn main() -> Result<()> {
    env_logger::init();
    RootCommand::execute()
}
