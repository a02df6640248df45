//! Git object identifiers
//!
//! Objects themselves are never parsed here; libgit2 owns the object
//! database. Only commit identities travel through the pipeline.

pub mod object_id;

/// Length of an abbreviated object id, as printed by `git log --oneline`
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
