//! Use cases - orchestration on top of the domain aggregates.

pub mod study_group;

pub use study_group::{StudyGroupUseCaseError, StudyGroupUseCases};
