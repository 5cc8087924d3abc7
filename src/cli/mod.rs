pub mod args;
pub mod root;

pub use args::Args;
pub use root::RootCommand;
