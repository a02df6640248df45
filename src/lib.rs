//! git-merged
//!
//! Reports, for every local and remote branch of a repository, whether the
//! branch tip is already an ancestor of a designated main branch.
//!
//! The crate is organised the same way a small git tool usually is:
//!
//! - `areas`: the repository handle and its reference store
//! - `artifacts`: value types (branch names, object ids, the report table)
//! - `commands`: the `merged` command driving the pipeline
//! - `config`: run configuration built once from the command line
//! - `errors`: typed failures for every pipeline stage

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

/// Output formats accepted by `--format`
///
/// Only the table renderer exists; the flag is kept so scripts passing
/// `--format TABLE` keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
