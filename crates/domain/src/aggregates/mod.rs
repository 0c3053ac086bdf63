//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns mutation outcomes from mutations
//!
//! # Rustic DDD Principles
//!
//! | Classic DDD Pattern | Rustic Equivalent |
//! |---------------------|-------------------|
//! | Private fields + getters | Private fields + `#[inline]` accessors |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Defensive copies | Accessors return owned clones |
//! | Value Object immutability | Newtypes with no `&mut` methods |
//! | Domain Events | Return enums from mutations |

pub mod study_group;

pub use study_group::{StudyGroup, MIN_GROUP_SIZE};
