//! Study group domain model.
//!
//! Pure in-memory domain: identifiers, the `Email` and `GroupState` value
//! objects, the `Member` entity, and the `StudyGroup` aggregate that owns all
//! membership, lifecycle, and attendance rules. No I/O happens here.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{StudyGroup, MIN_GROUP_SIZE};
pub use entities::Member;
pub use error::DomainError;
pub use events::StudyGroupUpdate;
pub use ids::{MemberId, StudyGroupId};
pub use value_objects::{Email, GroupState};
