//! Study group engine library.
//!
//! In-process hosting layer for the study group domain.
//!
//! ## Structure
//!
//! - `stores/` - In-memory aggregate registry with one lock per group
//! - `use_cases/` - Orchestration over the domain aggregate, with logging
//! - `infrastructure/` - Configuration and tracing setup
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
pub use infrastructure::{init_tracing, ConfigError, EngineConfig};
pub use use_cases::{StudyGroupUseCaseError, StudyGroupUseCases};
