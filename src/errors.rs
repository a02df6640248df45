//! Failures of the merge-status pipeline
//!
//! Every stage returns one of these variants. None of them is recoverable:
//! the binary reports the first one it sees and exits.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MergedError {
    #[error("failed to open repository at {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("invalid branch name '{name}': {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("failed to resolve revision '{name}'")]
    Resolve {
        name: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to enumerate references")]
    Enumerate(#[source] git2::Error),

    #[error("failed to check whether {candidate} is an ancestor of {target}")]
    Ancestry {
        candidate: ObjectId,
        target: ObjectId,
        #[source]
        source: git2::Error,
    },

    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MergedError>;
