//! Value objects - immutable, validated at construction, compared by value

pub mod email;
pub mod group_state;

pub use email::Email;
pub use group_state::GroupState;
