//! Domain logic for the Language context.

pub mod fallback;
pub mod locale;
pub mod queries;
pub mod version_filter;
