//! Entities owned by aggregates

pub mod member;

pub use member::Member;
