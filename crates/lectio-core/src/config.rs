//! Runtime configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Environment variable selecting the navigation edge policy.
pub const EDGE_POLICY_ENV: &str = "LECTIO_EDGE_POLICY";

/// Environment variable holding the language used when no session
/// language is known.
pub const DEFAULT_LANGUAGE_ENV: &str = "LECTIO_DEFAULT_LANGUAGE";

/// What chapter navigation does when the corpus has no further chapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Stay on the current reference.
    #[default]
    Clamp,
    /// Fail with `DomainError::NoSiblingChapter`.
    Reject,
}

impl FromStr for EdgePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            other => Err(DomainError::Configuration(format!(
                "{EDGE_POLICY_ENV} must be `clamp` or `reject`, got `{other}`"
            ))),
        }
    }
}

/// Configuration shared by the query handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LectioConfig {
    /// Behaviour at the first and last chapter of the corpus.
    pub edge_policy: EdgePolicy,
    /// Language used when a session carries an empty language.
    pub default_language: String,
}

impl Default for LectioConfig {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::default(),
            default_language: "en".to_owned(),
        }
    }
}

impl LectioConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if a variable is set to an
    /// invalid value.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if a variable is set to an
    /// invalid value.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let mut config = Self::default();
        if let Some(policy) = lookup(EDGE_POLICY_ENV) {
            config.edge_policy = policy.parse()?;
        }
        if let Some(language) = lookup(DEFAULT_LANGUAGE_ENV) {
            let language = language.trim();
            if language.is_empty() {
                return Err(DomainError::Configuration(format!(
                    "{DEFAULT_LANGUAGE_ENV} must not be empty"
                )));
            }
            language.clone_into(&mut config.default_language);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_with_uses_defaults_when_unset() {
        let config = LectioConfig::from_env_with(|_| None).unwrap();
        assert_eq!(config, LectioConfig::default());
        assert_eq!(config.edge_policy, EdgePolicy::Clamp);
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn test_from_env_with_reads_both_variables() {
        // Arrange
        let lookup = |key: &str| match key {
            EDGE_POLICY_ENV => Some("Reject".to_owned()),
            DEFAULT_LANGUAGE_ENV => Some(" fr ".to_owned()),
            _ => None,
        };

        // Act
        let config = LectioConfig::from_env_with(lookup).unwrap();

        // Assert
        assert_eq!(config.edge_policy, EdgePolicy::Reject);
        assert_eq!(config.default_language, "fr");
    }

    #[test]
    fn test_from_env_with_rejects_unknown_policy() {
        let result = LectioConfig::from_env_with(|key| {
            (key == EDGE_POLICY_ENV).then(|| "wrap".to_owned())
        });
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_from_env_with_rejects_blank_default_language() {
        let result = LectioConfig::from_env_with(|key| {
            (key == DEFAULT_LANGUAGE_ENV).then(String::new)
        });
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: LectioConfig =
            serde_json::from_value(serde_json::json!({ "edge_policy": "reject" })).unwrap();
        assert_eq!(config.edge_policy, EdgePolicy::Reject);
        assert_eq!(config.default_language, "en");
    }
}
