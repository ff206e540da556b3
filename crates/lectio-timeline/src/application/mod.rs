//! Application services for the Timeline context.

pub mod query_handlers;
