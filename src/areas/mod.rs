//! Repository components
//!
//! - `refs`: reference enumeration (local and remote branches)
//! - `repository`: repository handle, revision resolution, ancestry checks

pub mod refs;
pub mod repository;
