//! Query abstractions and cache-key declarations.
//!
//! Every read operation is idempotent, so each query can describe the key
//! a caching layer would store its result under. The core never stores
//! anything itself.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Trait that all queries implement.
pub trait Query: Send + Sync + std::fmt::Debug {
    /// The type name for this query (for logging and cache keys).
    fn query_type(&self) -> &'static str;

    /// Correlation ID to trace this query through the system.
    fn correlation_id(&self) -> Uuid;

    /// The key the result may be cached under, or `None` if the result
    /// must not be cached.
    fn cache_key(&self) -> Option<CacheKey>;
}

/// Operation name plus the full, normalised argument tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CacheKey {
    operation: &'static str,
    arguments: Vec<String>,
}

impl CacheKey {
    /// Starts a key for `operation` with no arguments.
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            arguments: Vec::new(),
        }
    }

    /// Appends an argument. Absent arguments are recorded as well so that
    /// `(a, None)` and `(a, Some(""))` stay distinct.
    #[must_use]
    pub fn arg(mut self, value: Option<impl fmt::Display>) -> Self {
        self.arguments.push(match value {
            Some(value) => format!("={value}"),
            None => "-".to_owned(),
        });
        self
    }

    /// The operation name.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// SHA-256 hex digest of the key, for stores that need fixed-size keys.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.operation.as_bytes());
        for argument in &self.arguments {
            hasher.update([0u8]);
            hasher.update(argument.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation, self.arguments.join(","))
    }
}
