//! Git references (branches, remotes, tags)
//!
//! Only branch references take part in the merge report:
//!
//! - Symbolic references (`HEAD`, `refs/remotes/origin/HEAD`) are skipped,
//!   the same way `git show-ref` omits HEAD
//! - Of the direct references, only `refs/heads/*` and `refs/remotes/*` pass
//!
//! Enumeration order is whatever libgit2 yields; nothing is sorted.

use crate::artifacts::branch::ref_name::{BranchRef, RefName};
use crate::errors::{MergedError, Result};
use derive_new::new;
use git2::ReferenceType;
use tracing::trace;

#[derive(new)]
pub struct Refs<'r> {
    git: &'r git2::Repository,
}

impl<'r> Refs<'r> {
    /// Lazily list every local and remote branch
    ///
    /// The iterator yields an error and should be abandoned if libgit2 fails
    /// to read the next reference.
    pub fn branches(&self) -> Result<impl Iterator<Item = Result<BranchRef>> + use<'r>> {
        let references = self.git.references().map_err(MergedError::Enumerate)?;

        Ok(references.filter_map(|reference| match reference {
            Ok(reference) => Self::to_branch_ref(&reference).map(Ok),
            Err(e) => Some(Err(MergedError::Enumerate(e))),
        }))
    }

    fn to_branch_ref(reference: &git2::Reference<'_>) -> Option<BranchRef> {
        let name = RefName::new(String::from_utf8_lossy(reference.name_bytes()).into_owned());

        if reference.kind() == Some(ReferenceType::Symbolic) {
            trace!(name = %name, "skipping symbolic reference");
            return None;
        }

        let kind = name.kind();
        if !kind.is_branch() {
            trace!(name = %name, ?kind, "skipping non-branch reference");
            return None;
        }

        let oid = reference.target()?;
        Some(BranchRef::new(name, oid.into()))
    }
}
