//! Domain types for the Passage context.

pub mod navigation;
pub mod queries;
