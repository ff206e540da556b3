//! Lectio — Passage context.
//!
//! Responsible for retrieving passage text with client-selected options,
//! listing version features and book names, and moving between chapters.

pub mod application;
pub mod domain;
