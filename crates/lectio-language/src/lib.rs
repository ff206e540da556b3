//! Lectio — Language context.
//!
//! Responsible for locale tags, the language a caller is served in, and
//! choosing which versions to offer them.

pub mod application;
pub mod domain;
