//! Aggregate mutation outcomes
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified. A hosting application can log them, publish them, or
//! ignore them.

pub mod study_group_events;

pub use study_group_events::StudyGroupUpdate;
