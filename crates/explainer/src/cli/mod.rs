//! Command-line interface module.

mod commands;
mod run;

pub use commands::{Cli, parse_error_exit_code};
pub use run::run_pipeline;
