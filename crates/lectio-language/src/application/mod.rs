//! Application services for the Language context.

pub mod query_handlers;
