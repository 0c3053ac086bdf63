//! Error types for the study group domain
//!
//! Every failure is a local validation failure raised before any mutation
//! happens, so callers can report it and carry on with the aggregate unchanged.

use thiserror::Error;

use crate::ids::MemberId;
use crate::value_objects::GroupState;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email string does not look like `local@domain.tld`
    #[error("Invalid email format: {value:?}")]
    InvalidEmailFormat { value: String },

    /// A study group needs room for at least two members
    #[error("Invalid group size: {requested} (a study group needs at least 2 members)")]
    InvalidGroupSize { requested: u32 },

    #[error("Study group is not recruiting (current state: {state})")]
    GroupNotRecruiting { state: GroupState },

    #[error("Study group is full: {current}/{max} members")]
    GroupFull { current: usize, max: u32 },

    #[error("Member {member_id} is already in the study group")]
    DuplicateMember { member_id: MemberId },

    #[error("The study group leader cannot be expelled")]
    CannotExpelLeader,

    #[error("Member {member_id} is not in the study group")]
    MemberNotFound { member_id: MemberId },

    #[error("Not enough members to start: {current} (minimum 2)")]
    InsufficientMembers { current: usize },

    #[error("Study group is not in progress (current state: {state})")]
    GroupNotInProgress { state: GroupState },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn invalid_email(value: impl Into<String>) -> Self {
        Self::InvalidEmailFormat {
            value: value.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
