pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat, SourceArgs};
pub use commands::run;
