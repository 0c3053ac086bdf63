//! Member entity - a participant in exactly one study group

use serde::{Deserialize, Serialize};

use crate::ids::MemberId;
use crate::value_objects::Email;

/// A study group member.
///
/// Identity is the [`MemberId`]; nickname and email are fixed once the member
/// exists. The only mutation is [`Member::record_attendance`]. Whether a member
/// may be credited at a given moment is decided by the owning `StudyGroup`,
/// not here.
///
/// # Example
///
/// ```
/// use studygroup_domain::{Email, Member, MemberId};
///
/// let mut bob = Member::new(MemberId::new(), "Bob", Email::new("bob@example.com").unwrap());
/// assert_eq!(bob.attendance_count(), 0);
///
/// bob.record_attendance();
/// assert_eq!(bob.attendance_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    nickname: String,
    email: Email,
    #[serde(default)]
    attendance_count: u32,
}

impl Member {
    pub fn new(id: MemberId, nickname: impl Into<String>, email: Email) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            email,
            attendance_count: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> MemberId {
        self.id
    }

    #[inline]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Number of sessions this member has been credited with.
    #[inline]
    pub fn attendance_count(&self) -> u32 {
        self.attendance_count
    }

    /// Credit the member with one attended session.
    pub fn record_attendance(&mut self) {
        self.attendance_count = self.attendance_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Member {
        Member::new(
            MemberId::new(),
            "Bob",
            Email::new("bob@example.com").unwrap(),
        )
    }

    #[test]
    fn new_member_has_no_attendance() {
        let member = bob();
        assert_eq!(member.nickname(), "Bob");
        assert_eq!(member.email().as_str(), "bob@example.com");
        assert_eq!(member.attendance_count(), 0);
    }

    #[test]
    fn record_attendance_increments_by_one() {
        let mut member = bob();
        member.record_attendance();
        member.record_attendance();
        assert_eq!(member.attendance_count(), 2);
    }

    #[test]
    fn clones_are_independent() {
        let original = bob();
        let mut copy = original.clone();
        copy.record_attendance();
        assert_eq!(original.attendance_count(), 0);
        assert_eq!(copy.id(), original.id());
    }

    #[test]
    fn deserialize_defaults_attendance_and_validates_email() {
        let id = MemberId::new();
        let json = format!(
            r#"{{"id":"{}","nickname":"Bob","email":"bob@example.com"}}"#,
            id
        );
        let member: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(member.id(), id);
        assert_eq!(member.attendance_count(), 0);

        let bad = format!(r#"{{"id":"{}","nickname":"Bob","email":"nope"}}"#, id);
        assert!(serde_json::from_str::<Member>(&bad).is_err());
    }
}
