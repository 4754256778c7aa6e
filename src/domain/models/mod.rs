//! Leaf domain models, one file per aggregate.

pub mod family;
pub mod job;
pub mod money;
pub mod person;
