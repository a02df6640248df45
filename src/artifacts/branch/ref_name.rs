//! Reference names and the kinds they encode
//!
//! The kind of a reference is fully determined by its namespace:
//!
//! - `refs/heads/*`: local branches
//! - `refs/remotes/*`: remote-tracking branches
//! - `refs/tags/*`: tags
//! - `refs/notes/*`: notes
//!
//! Symbolic references (`HEAD`, `refs/remotes/origin/HEAD`) are told apart by
//! their type, not their name, so they are filtered by the reference store.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

const REFS_PREFIX: &str = "refs/";
const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";
const REMOTE_BRANCH_PREFIX: &str = "refs/remotes/";
const TAG_PREFIX: &str = "refs/tags/";
const NOTE_PREFIX: &str = "refs/notes/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    LocalBranch,
    RemoteBranch,
    Tag,
    Note,
    Other,
}

impl RefKind {
    pub fn is_branch(&self) -> bool {
        matches!(self, RefKind::LocalBranch | RefKind::RemoteBranch)
    }
}

/// Full reference name, e.g. `refs/remotes/origin/feature`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct RefName(String);

impl RefName {
    pub fn kind(&self) -> RefKind {
        if self.0.starts_with(LOCAL_BRANCH_PREFIX) {
            RefKind::LocalBranch
        } else if self.0.starts_with(REMOTE_BRANCH_PREFIX) {
            RefKind::RemoteBranch
        } else if self.0.starts_with(TAG_PREFIX) {
            RefKind::Tag
        } else if self.0.starts_with(NOTE_PREFIX) {
            RefKind::Note
        } else {
            RefKind::Other
        }
    }

    /// Name as shown to users: `feature` or `origin/feature`
    pub fn short_name(&self) -> &str {
        [
            LOCAL_BRANCH_PREFIX,
            REMOTE_BRANCH_PREFIX,
            TAG_PREFIX,
            NOTE_PREFIX,
            REFS_PREFIX,
        ]
        .iter()
        .find_map(|prefix| self.0.strip_prefix(prefix))
        .unwrap_or(self.0.as_str())
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A branch reference together with the commit it pointed at when read
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchRef {
    name: RefName,
    oid: ObjectId,
}

impl BranchRef {
    pub fn name(&self) -> &RefName {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }
}
