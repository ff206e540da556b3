//! Domain types for the Timeline context.

pub mod enhanced;
pub mod events;
pub mod queries;
