//! In-memory study group registry.
//!
//! Each aggregate sits behind its own mutex so that calls against different
//! groups never contend, while calls against the same group run one at a time.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use studygroup_domain::{StudyGroup, StudyGroupId};

/// Registry of live study groups keyed by id.
pub struct StudyGroupStore {
    groups: DashMap<StudyGroupId, Arc<Mutex<StudyGroup>>>,
}

impl StudyGroupStore {
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    /// Register a group, returning its id.
    pub fn insert(&self, group: StudyGroup) -> StudyGroupId {
        let id = group.id();
        self.groups.insert(id, Arc::new(Mutex::new(group)));
        id
    }

    /// Clone of the group's current state.
    pub async fn snapshot(&self, id: StudyGroupId) -> Option<StudyGroup> {
        let handle = self.handle(id)?;
        let group = handle.lock().await;
        Some(group.clone())
    }

    /// Run `f` against the group while holding its lock.
    ///
    /// Returns `None` if no group with that id is registered.
    pub async fn with_group<R, F>(&self, id: StudyGroupId, f: F) -> Option<R>
    where
        F: FnOnce(&mut StudyGroup) -> R,
    {
        let handle = self.handle(id)?;
        let mut group = handle.lock().await;
        Some(f(&mut *group))
    }

    pub fn ids(&self) -> Vec<StudyGroupId> {
        self.groups.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    // The map guard is released before the caller awaits the mutex.
    fn handle(&self, id: StudyGroupId) -> Option<Arc<Mutex<StudyGroup>>> {
        self.groups.get(&id).map(|entry| Arc::clone(entry.value()))
    }
}

impl Default for StudyGroupStore {
    fn default() -> Self {
        Self::new()
    }
}
