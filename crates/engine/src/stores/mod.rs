//! In-memory state storage modules.
//!
//! Stores manage runtime state for the lifetime of the process:
//! - `StudyGroupStore` - live study group aggregates, one lock per group

pub mod study_group;

pub use study_group::StudyGroupStore;
