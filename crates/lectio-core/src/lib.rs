//! Lectio Core — shared domain types and collaborator contracts.
//!
//! This crate defines the option vocabulary, the value types passed to
//! and returned from the corpus, and the traits every context depends
//! on. It contains no infrastructure code.

pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod options;
pub mod query;
pub mod session;
