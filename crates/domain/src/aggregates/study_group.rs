//! StudyGroup aggregate - membership, lifecycle, and attendance
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: members are only reachable through aggregate methods
//! - **Valid by construction**: `create()` validates size and leader email
//! - **Snapshots out**: `members()` hands back an owned copy, never a borrow
//!   into the collection
//! - **Outcomes**: every mutation returns a `StudyGroupUpdate`
//!
//! Every method checks all of its preconditions before touching state, so a
//! returned error means the aggregate is unchanged.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::Member;
use crate::error::DomainError;
use crate::events::StudyGroupUpdate;
use crate::ids::{MemberId, StudyGroupId};
use crate::value_objects::{Email, GroupState};

/// Smallest capacity a group may be created with.
pub const MIN_GROUP_SIZE: u32 = 2;

/// Fewest members needed to start studying.
const MIN_MEMBERS_TO_START: usize = 2;

/// A study group and its members.
///
/// # Invariants
///
/// - `members.len() <= max_members`
/// - the leader is always one of the members
/// - member ids are unique
/// - state only moves forward: `Recruiting -> InProgress -> Ended`
///
/// # Example
///
/// ```
/// use studygroup_domain::{Email, GroupState, Member, MemberId, StudyGroup};
///
/// let mut group = StudyGroup::create("Alice", "alice@example.com", 3).unwrap();
/// let bob = Member::new(MemberId::new(), "Bob", Email::new("bob@example.com").unwrap());
/// let bob_id = bob.id();
///
/// group.add_member(bob).unwrap();
/// group.start_study().unwrap();
/// group.record_attendance(bob_id).unwrap();
///
/// assert_eq!(group.state(), GroupState::InProgress);
/// assert_eq!(group.member(bob_id).unwrap().attendance_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StudyGroup {
    // Identity
    id: StudyGroupId,
    leader_id: MemberId,

    // Configuration
    max_members: u32,

    // Lifecycle
    state: GroupState,

    // Membership, in join order
    members: Vec<Member>,
}

impl StudyGroup {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new group in `Recruiting` with the leader as its only member.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidGroupSize` if `max_members < 2` (checked first)
    /// - `DomainError::InvalidEmailFormat` if `leader_email` is malformed
    pub fn create(
        leader_nickname: impl Into<String>,
        leader_email: impl Into<String>,
        max_members: u32,
    ) -> Result<Self, DomainError> {
        if max_members < MIN_GROUP_SIZE {
            return Err(DomainError::InvalidGroupSize {
                requested: max_members,
            });
        }

        let email = Email::new(leader_email)?;
        let leader = Member::new(MemberId::new(), leader_nickname, email);

        Ok(Self {
            id: StudyGroupId::new(),
            leader_id: leader.id(),
            max_members,
            state: GroupState::Recruiting,
            members: vec![leader],
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> StudyGroupId {
        self.id
    }

    #[inline]
    pub fn leader_id(&self) -> MemberId {
        self.leader_id
    }

    #[inline]
    pub fn max_members(&self) -> u32 {
        self.max_members
    }

    #[inline]
    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Returns a copy of the members in join order.
    ///
    /// Changing the returned vector or its elements has no effect on the group.
    pub fn members(&self) -> Vec<Member> {
        self.members.clone()
    }

    /// Returns a copy of the member with the given id, if present.
    pub fn member(&self, member_id: MemberId) -> Option<Member> {
        self.find(member_id).cloned()
    }

    /// Returns a copy of the leader.
    pub fn leader(&self) -> Option<Member> {
        self.member(self.leader_id)
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn contains_member(&self, member_id: MemberId) -> bool {
        self.find(member_id).is_some()
    }

    /// Whether another member could join right now.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_members as usize
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Append a member to the group.
    ///
    /// Preconditions are checked in order: the group is recruiting, it has
    /// room, and the member is not already in it.
    pub fn add_member(&mut self, member: Member) -> Result<StudyGroupUpdate, DomainError> {
        if self.state != GroupState::Recruiting {
            return Err(DomainError::GroupNotRecruiting { state: self.state });
        }
        if self.is_full() {
            return Err(DomainError::GroupFull {
                current: self.members.len(),
                max: self.max_members,
            });
        }
        let member_id = member.id();
        if self.contains_member(member_id) {
            return Err(DomainError::DuplicateMember { member_id });
        }

        self.members.push(member);
        Ok(StudyGroupUpdate::MemberAdded {
            member_id,
            member_count: self.members.len(),
        })
    }

    /// Remove a member from the group. Allowed in every state.
    pub fn expel_member(&mut self, member_id: MemberId) -> Result<StudyGroupUpdate, DomainError> {
        if member_id == self.leader_id {
            return Err(DomainError::CannotExpelLeader);
        }
        let index = self
            .members
            .iter()
            .position(|m| m.id() == member_id)
            .ok_or(DomainError::MemberNotFound { member_id })?;

        // Vec::remove keeps the relative order of the rest
        self.members.remove(index);
        Ok(StudyGroupUpdate::MemberExpelled {
            member_id,
            member_count: self.members.len(),
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Move from `Recruiting` to `InProgress`.
    pub fn start_study(&mut self) -> Result<StudyGroupUpdate, DomainError> {
        if self.state != GroupState::Recruiting {
            return Err(DomainError::GroupNotRecruiting { state: self.state });
        }
        if self.members.len() < MIN_MEMBERS_TO_START {
            return Err(DomainError::InsufficientMembers {
                current: self.members.len(),
            });
        }

        Ok(self.transition_to(GroupState::InProgress))
    }

    /// Move to `Ended` from any state. Ending an ended group is a no-op.
    pub fn end_study(&mut self) -> StudyGroupUpdate {
        if self.state == GroupState::Ended {
            return StudyGroupUpdate::AlreadyEnded;
        }
        self.transition_to(GroupState::Ended)
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    /// Credit one attended session to a member of an in-progress group.
    pub fn record_attendance(
        &mut self,
        member_id: MemberId,
    ) -> Result<StudyGroupUpdate, DomainError> {
        if self.state != GroupState::InProgress {
            return Err(DomainError::GroupNotInProgress { state: self.state });
        }
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id() == member_id)
            .ok_or(DomainError::MemberNotFound { member_id })?;

        member.record_attendance();
        Ok(StudyGroupUpdate::AttendanceRecorded {
            member_id,
            attendance_count: member.attendance_count(),
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn find(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == member_id)
    }

    fn transition_to(&mut self, next: GroupState) -> StudyGroupUpdate {
        let previous = std::mem::replace(&mut self.state, next);
        StudyGroupUpdate::StateChanged {
            from: previous,
            to: next,
        }
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format.
#[derive(Serialize, Deserialize)]
struct StudyGroupWireFormat {
    id: StudyGroupId,
    leader_id: MemberId,
    max_members: u32,
    state: GroupState,
    members: Vec<Member>,
}

impl StudyGroupWireFormat {
    /// Rebuild the aggregate, rejecting data that breaks an invariant.
    fn into_aggregate(self) -> Result<StudyGroup, String> {
        if self.max_members < MIN_GROUP_SIZE {
            return Err(DomainError::InvalidGroupSize {
                requested: self.max_members,
            }
            .to_string());
        }
        if self.members.len() > self.max_members as usize {
            return Err(format!(
                "study group has {} members but allows at most {}",
                self.members.len(),
                self.max_members
            ));
        }
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].iter().any(|m| m.id() == member.id()) {
                return Err(DomainError::DuplicateMember {
                    member_id: member.id(),
                }
                .to_string());
            }
        }
        if !self.members.iter().any(|m| m.id() == self.leader_id) {
            return Err(format!("leader {} is not a member", self.leader_id));
        }

        Ok(StudyGroup {
            id: self.id,
            leader_id: self.leader_id,
            max_members: self.max_members,
            state: self.state,
            members: self.members,
        })
    }
}

impl Serialize for StudyGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = StudyGroupWireFormat {
            id: self.id,
            leader_id: self.leader_id,
            max_members: self.max_members,
            state: self.state,
            members: self.members.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StudyGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = StudyGroupWireFormat::deserialize(deserializer)?;
        wire.into_aggregate().map_err(DeError::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
