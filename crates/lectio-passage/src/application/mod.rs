//! Application services for the Passage context.

pub mod query_handlers;
