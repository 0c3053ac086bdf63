//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{ConfigError, EngineConfig};
use crate::stores::StudyGroupStore;
use crate::use_cases::StudyGroupUseCases;

/// Main application state.
///
/// Holds the configuration, the shared group store, and the use cases that
/// operate on it. A hosting application builds one `App` and shares it.
pub struct App {
    pub config: EngineConfig,
    pub store: Arc<StudyGroupStore>,
    pub study_groups: StudyGroupUseCases,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        let store = Arc::new(StudyGroupStore::new());
        let study_groups = StudyGroupUseCases::new(store.clone(), config.default_max_members);

        Self {
            config,
            store,
            study_groups,
        }
    }

    /// Build an `App` from environment configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = EngineConfig::from_env()?;
        tracing::info!(
            default_max_members = config.default_max_members,
            "Study group engine configured"
        );
        Ok(Self::new(config))
    }
}
