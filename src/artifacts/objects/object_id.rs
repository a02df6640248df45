//! Git object identifier (SHA-1 hash)
//!
//! A thin wrapper around [`git2::Oid`] so the rest of the crate never has to
//! name libgit2 types when it only cares about commit identity.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc1234")

use crate::artifacts::objects::SHORT_OBJECT_ID_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(git2::Oid);

impl ObjectId {
    pub fn as_oid(&self) -> git2::Oid {
        self.0
    }

    /// Get abbreviated form of the object ID
    pub fn to_short_oid(&self) -> String {
        let mut oid = self.0.to_string();
        oid.truncate(SHORT_OBJECT_ID_LENGTH);
        oid
    }
}

impl From<git2::Oid> for ObjectId {
    fn from(oid: git2::Oid) -> Self {
        Self(oid)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
