use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{MergedError, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;
use tracing::{debug, trace};

pub struct Repository {
    path: Box<Path>,
    git: git2::Repository,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Repository {
    /// Open the repository rooted exactly at `path`
    ///
    /// Parent directories are not searched, so running from a subdirectory
    /// of a work tree fails just like running outside of one.
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let git = git2::Repository::open(path).map_err(|source| MergedError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened repository");

        Ok(Repository {
            path: path.into(),
            git,
            writer: RefCell::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn refs(&self) -> Refs<'_> {
        Refs::new(&self.git)
    }

    /// Resolve a branch name to the commit at its tip
    ///
    /// Short names are expanded the way `git rev-parse` does it, so both
    /// `master` and `origin/master` resolve.
    pub fn resolve_branch(&self, name: &BranchName) -> Result<ObjectId> {
        let to_error = |source: git2::Error| MergedError::Resolve {
            name: name.to_string(),
            source,
        };

        let reference = self
            .git
            .resolve_reference_from_short_name(name.as_ref())
            .map_err(to_error)?;
        let commit = reference.peel_to_commit().map_err(to_error)?;
        let oid = ObjectId::from(commit.id());

        debug!(name = %name, oid = %oid.to_short_oid(), "resolved main branch");
        Ok(oid)
    }

    /// Whether `candidate` is `target` or one of its ancestors
    ///
    /// The candidate commit must exist in the object database; a dangling
    /// reference is an error rather than "not merged".
    pub fn is_ancestor(&self, candidate: &ObjectId, target: &ObjectId) -> Result<bool> {
        let to_error = |source: git2::Error| MergedError::Ancestry {
            candidate: *candidate,
            target: *target,
            source,
        };

        self.git.find_commit(candidate.as_oid()).map_err(to_error)?;

        if candidate == target {
            return Ok(true);
        }

        let is_ancestor = self
            .git
            .graph_descendant_of(target.as_oid(), candidate.as_oid())
            .map_err(to_error)?;
        trace!(
            candidate = %candidate.to_short_oid(),
            target = %target.to_short_oid(),
            is_ancestor,
            "ancestry check"
        );

        Ok(is_ancestor)
    }
}
