//! Shared test doubles and fixtures for the Lectio workspace.

mod corpus;
pub mod fixtures;
mod logging;

pub use corpus::{CorpusCall, FailingCorpus, InMemoryCorpus};
pub use logging::init_test_tracing;
