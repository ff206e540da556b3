//! Lectio — Timeline context.
//!
//! Responsible for attaching resolved passage text to historical timeline
//! events without altering the events themselves.

pub mod application;
pub mod domain;
