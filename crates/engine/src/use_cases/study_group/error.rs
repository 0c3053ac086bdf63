//! Study group use case errors.

use studygroup_domain::{DomainError, StudyGroupId};

/// Errors that can occur during study group operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StudyGroupUseCaseError {
    #[error("Study group not found: {0}")]
    GroupNotFound(StudyGroupId),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
