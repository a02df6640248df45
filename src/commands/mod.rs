//! Command implementations
//!
//! - `merged`: report which branches are merged into the main branch

pub mod merged;
