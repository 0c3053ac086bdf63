//! Study group mutation outcomes.

use serde::{Deserialize, Serialize};

use crate::ids::MemberId;
use crate::value_objects::GroupState;

/// Outcome of a successful `StudyGroup` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudyGroupUpdate {
    MemberAdded {
        member_id: MemberId,
        member_count: usize,
    },
    MemberExpelled {
        member_id: MemberId,
        member_count: usize,
    },
    StateChanged {
        from: GroupState,
        to: GroupState,
    },
    /// `end_study` on a group that had already ended
    AlreadyEnded,
    AttendanceRecorded {
        member_id: MemberId,
        attendance_count: u32,
    },
}

impl StudyGroupUpdate {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MemberAdded { .. } => "member_added",
            Self::MemberExpelled { .. } => "member_expelled",
            Self::StateChanged { .. } => "state_changed",
            Self::AlreadyEnded => "already_ended",
            Self::AttendanceRecorded { .. } => "attendance_recorded",
        }
    }
}
