//! Value types used by the merge-status pipeline
//!
//! - `branch`: branch and reference names, reference kinds
//! - `core`: shared output utilities (pager wrapper)
//! - `objects`: commit identifiers
//! - `report`: the merge-status table

pub mod branch;
pub mod core;
pub mod objects;
pub mod report;
