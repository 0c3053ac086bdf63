//! Study group use cases.
//!
//! Thin orchestration over the `StudyGroup` aggregate: look the group up,
//! lock it, call exactly one aggregate method, log the outcome. All rules live
//! in the aggregate; nothing here touches members directly.

mod error;

use std::sync::Arc;

use studygroup_domain::{
    DomainError, Email, Member, MemberId, StudyGroup, StudyGroupId, StudyGroupUpdate,
};

use crate::stores::StudyGroupStore;

pub use error::StudyGroupUseCaseError;

/// Container for study group use cases.
pub struct StudyGroupUseCases {
    store: Arc<StudyGroupStore>,
    default_max_members: u32,
}

impl StudyGroupUseCases {
    pub fn new(store: Arc<StudyGroupStore>, default_max_members: u32) -> Self {
        Self {
            store,
            default_max_members,
        }
    }

    /// Create and register a new group led by the given member.
    ///
    /// Uses the configured default capacity when `max_members` is `None`.
    pub async fn create_group(
        &self,
        leader_nickname: impl Into<String>,
        leader_email: impl Into<String>,
        max_members: Option<u32>,
    ) -> Result<StudyGroup, StudyGroupUseCaseError> {
        let max_members = max_members.unwrap_or(self.default_max_members);

        let group = StudyGroup::create(leader_nickname, leader_email, max_members).map_err(|e| {
            tracing::warn!(max_members, error = %e, "Failed to create study group");
            e
        })?;

        tracing::info!(
            group_id = %group.id(),
            leader_id = %group.leader_id(),
            max_members,
            "Study group created"
        );

        self.store.insert(group.clone());
        Ok(group)
    }

    /// Build a fresh member from a nickname and email and add it to the group.
    pub async fn join_group(
        &self,
        group_id: StudyGroupId,
        nickname: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<MemberId, StudyGroupUseCaseError> {
        let email = Email::new(email).map_err(|e| {
            tracing::warn!(group_id = %group_id, error = %e, "Rejected join request");
            e
        })?;
        let member = Member::new(MemberId::new(), nickname, email);
        let member_id = member.id();

        self.add_member(group_id, member).await?;
        Ok(member_id)
    }

    pub async fn add_member(
        &self,
        group_id: StudyGroupId,
        member: Member,
    ) -> Result<StudyGroupUpdate, StudyGroupUseCaseError> {
        self.apply(group_id, "add_member", move |group| group.add_member(member))
            .await
    }

    pub async fn expel_member(
        &self,
        group_id: StudyGroupId,
        member_id: MemberId,
    ) -> Result<StudyGroupUpdate, StudyGroupUseCaseError> {
        self.apply(group_id, "expel_member", |group| group.expel_member(member_id))
            .await
    }

    pub async fn start_study(
        &self,
        group_id: StudyGroupId,
    ) -> Result<StudyGroupUpdate, StudyGroupUseCaseError> {
        self.apply(group_id, "start_study", StudyGroup::start_study)
            .await
    }

    pub async fn end_study(
        &self,
        group_id: StudyGroupId,
    ) -> Result<StudyGroupUpdate, StudyGroupUseCaseError> {
        self.apply(group_id, "end_study", |group| Ok(group.end_study()))
            .await
    }

    pub async fn record_attendance(
        &self,
        group_id: StudyGroupId,
        member_id: MemberId,
    ) -> Result<StudyGroupUpdate, StudyGroupUseCaseError> {
        self.apply(group_id, "record_attendance", |group| {
            group.record_attendance(member_id)
        })
        .await
    }

    /// Current members of the group, in join order.
    pub async fn members(
        &self,
        group_id: StudyGroupId,
    ) -> Result<Vec<Member>, StudyGroupUseCaseError> {
        self.store
            .with_group(group_id, |group| group.members())
            .await
            .ok_or(StudyGroupUseCaseError::GroupNotFound(group_id))
    }

    /// Snapshot of the whole aggregate.
    pub async fn get(&self, group_id: StudyGroupId) -> Result<StudyGroup, StudyGroupUseCaseError> {
        self.store
            .snapshot(group_id)
            .await
            .ok_or(StudyGroupUseCaseError::GroupNotFound(group_id))
    }

    pub fn list_ids(&self) -> Vec<StudyGroupId> {
        self.store.ids()
    }

    /// Lock the group, run one aggregate operation, and log what happened.
    async fn apply<F>(
        &self,
        group_id: StudyGroupId,
        action: &'static str,
        op: F,
    ) -> Result<StudyGroupUpdate, StudyGroupUseCaseError>
    where
        F: FnOnce(&mut StudyGroup) -> Result<StudyGroupUpdate, DomainError>,
    {
        let Some(result) = self.store.with_group(group_id, op).await else {
            tracing::warn!(group_id = %group_id, action, "Study group not found");
            return Err(StudyGroupUseCaseError::GroupNotFound(group_id));
        };

        match result {
            Ok(update) => {
                tracing::info!(
                    group_id = %group_id,
                    action,
                    outcome = update.event_type(),
                    "Study group updated"
                );
                Ok(update)
            }
            Err(e) => {
                tracing::warn!(group_id = %group_id, action, error = %e, "Study group operation rejected");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studygroup_domain::GroupState;

    fn use_cases() -> StudyGroupUseCases {
        StudyGroupUseCases::new(Arc::new(StudyGroupStore::new()), 3)
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn registers_group_with_default_capacity() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();

            assert_eq!(group.max_members(), 3);
            assert_eq!(uc.list_ids(), vec![group.id()]);
            assert_eq!(uc.get(group.id()).await.unwrap().member_count(), 1);
        }

        #[tokio::test]
        async fn explicit_capacity_wins() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", Some(5))
                .await
                .unwrap();
            assert_eq!(group.max_members(), 5);
        }

        #[tokio::test]
        async fn invalid_input_registers_nothing() {
            let uc = use_cases();

            let err = uc.create_group("Leo", "bad-email", None).await.unwrap_err();
            assert!(matches!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::InvalidEmailFormat { .. })
            ));

            let err = uc
                .create_group("Leo", "leo@example.com", Some(1))
                .await
                .unwrap_err();
            assert_eq!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::InvalidGroupSize { requested: 1 })
            );
            assert!(uc.list_ids().is_empty());
        }
    }

    mod membership {
        use super::*;

        #[tokio::test]
        async fn join_adds_member_in_order() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();

            let bob_id = uc
                .join_group(group.id(), "Bob", "bob@example.com")
                .await
                .unwrap();

            let members = uc.members(group.id()).await.unwrap();
            let names: Vec<&str> = members.iter().map(Member::nickname).collect();
            assert_eq!(names, vec!["Alice", "Bob"]);
            assert_eq!(members[1].id(), bob_id);
        }

        #[tokio::test]
        async fn join_rejects_bad_email_without_touching_group() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();

            let err = uc
                .join_group(group.id(), "Bob", "not-an-email")
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::InvalidEmailFormat { .. })
            ));
            assert_eq!(uc.members(group.id()).await.unwrap().len(), 1);
        }

        #[tokio::test]
        async fn join_full_group_is_rejected() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", Some(2))
                .await
                .unwrap();
            uc.join_group(group.id(), "Bob", "bob@example.com")
                .await
                .unwrap();

            let err = uc
                .join_group(group.id(), "Carol", "carol@example.com")
                .await
                .unwrap_err();
            assert_eq!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::GroupFull { current: 2, max: 2 })
            );
        }

        #[tokio::test]
        async fn expel_leader_is_rejected() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();

            let err = uc
                .expel_member(group.id(), group.leader_id())
                .await
                .unwrap_err();
            assert_eq!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::CannotExpelLeader)
            );
        }

        #[tokio::test]
        async fn expel_removes_member() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();
            let bob_id = uc
                .join_group(group.id(), "Bob", "bob@example.com")
                .await
                .unwrap();

            uc.expel_member(group.id(), bob_id).await.unwrap();
            assert!(!uc.get(group.id()).await.unwrap().contains_member(bob_id));
        }
    }

    mod lifecycle {
        use super::*;

        #[tokio::test]
        async fn full_session_flow() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();
            let id = group.id();
            let bob_id = uc.join_group(id, "Bob", "bob@example.com").await.unwrap();

            uc.start_study(id).await.unwrap();
            let update = uc.record_attendance(id, bob_id).await.unwrap();
            assert_eq!(
                update,
                StudyGroupUpdate::AttendanceRecorded {
                    member_id: bob_id,
                    attendance_count: 1
                }
            );

            uc.end_study(id).await.unwrap();
            assert_eq!(uc.get(id).await.unwrap().state(), GroupState::Ended);
            assert_eq!(
                uc.end_study(id).await.unwrap(),
                StudyGroupUpdate::AlreadyEnded
            );

            let err = uc.record_attendance(id, bob_id).await.unwrap_err();
            assert_eq!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::GroupNotInProgress {
                    state: GroupState::Ended
                })
            );
        }

        #[tokio::test]
        async fn start_alone_is_rejected() {
            let uc = use_cases();
            let group = uc
                .create_group("Alice", "alice@example.com", None)
                .await
                .unwrap();

            let err = uc.start_study(group.id()).await.unwrap_err();
            assert_eq!(
                err,
                StudyGroupUseCaseError::Domain(DomainError::InsufficientMembers { current: 1 })
            );
        }
    }

    #[tokio::test]
    async fn unknown_group_is_not_found() {
        let uc = use_cases();
        let missing = StudyGroupId::new();

        assert_eq!(
            uc.start_study(missing).await.unwrap_err(),
            StudyGroupUseCaseError::GroupNotFound(missing)
        );
        assert_eq!(
            uc.join_group(missing, "Bob", "bob@example.com")
                .await
                .unwrap_err(),
            StudyGroupUseCaseError::GroupNotFound(missing)
        );
        assert!(uc.members(missing).await.is_err());
        assert!(uc.get(missing).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_joins_never_overfill() {
        let uc = Arc::new(StudyGroupUseCases::new(Arc::new(StudyGroupStore::new()), 5));
        let group = uc
            .create_group("Alice", "alice@example.com", None)
            .await
            .unwrap();
        let id = group.id();

        let mut handles = Vec::new();
        for i in 0..20 {
            let uc = Arc::clone(&uc);
            handles.push(tokio::spawn(async move {
                uc.join_group(id, format!("m{i}"), format!("m{i}@example.com"))
                    .await
            }));
        }

        let mut joined = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                joined += 1;
            }
        }

        assert_eq!(joined, 4);
        assert_eq!(uc.members(id).await.unwrap().len(), 5);
    }
}
