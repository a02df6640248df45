//! Run configuration
//!
//! Built once in `main` from the parsed command line and handed to the
//! pipeline by reference.

use crate::OutputFormat;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `--trace` wins over `--verbose`
    pub fn from_flags(verbose: bool, trace: bool) -> Self {
        if trace {
            LogLevel::Trace
        } else if verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    pub fn as_level(&self) -> tracing::Level {
        match self {
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// How the report reaches the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presentation {
    pub color: bool,
    pub pager: bool,
}

impl Presentation {
    /// Colour and paging only make sense on a terminal.
    ///
    /// `NO_COLOR` is honoured by `colored` itself; `NO_PAGER` is checked by
    /// the caller and passed in as `pager_disabled`.
    pub fn detect(
        no_color: bool,
        no_pager: bool,
        pager_disabled: bool,
        stdout_is_terminal: bool,
    ) -> Self {
        Self {
            color: stdout_is_terminal && !no_color,
            pager: stdout_is_terminal && !no_pager && !pager_disabled,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    main_branch: BranchName,
    format: OutputFormat,
    log_level: LogLevel,
    presentation: Presentation,
}

impl Config {
    pub fn try_new(
        main_branch: &str,
        format: OutputFormat,
        log_level: LogLevel,
        presentation: Presentation,
    ) -> Result<Self> {
        Ok(Self {
            main_branch: BranchName::try_parse(main_branch.to_string())?,
            format,
            log_level,
            presentation,
        })
    }

    pub fn main_branch(&self) -> &BranchName {
        &self.main_branch
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }
}
