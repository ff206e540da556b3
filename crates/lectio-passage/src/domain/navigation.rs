//! Chapter navigation at the edges of the corpus.
//!
//! The corpus decides which chapter is adjacent; this module only decides
//! what happens when it reports that there is none.

use lectio_core::config::EdgePolicy;
use lectio_core::error::DomainError;
use lectio_core::model::{Direction, Reference};

/// Turns the corpus answer for a sibling lookup into the reference to
/// show next.
///
/// # Errors
///
/// Returns `DomainError::NoSiblingChapter` when `sibling` is `None` and
/// `policy` is `EdgePolicy::Reject`.
pub fn resolve_sibling(
    current: Reference,
    direction: Direction,
    sibling: Option<Reference>,
    policy: EdgePolicy,
) -> Result<Reference, DomainError> {
    match (sibling, policy) {
        (Some(sibling), _) => Ok(sibling),
        (None, EdgePolicy::Clamp) => Ok(current),
        (None, EdgePolicy::Reject) => Err(DomainError::NoSiblingChapter {
            reference: current,
            direction,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(text: &str) -> Reference {
        Reference::new(text).unwrap()
    }

    #[test]
    fn test_resolve_sibling_returns_corpus_answer_when_present() {
        let resolved = resolve_sibling(
            reference("Gen 50"),
            Direction::Forward,
            Some(reference("Exod 1")),
            EdgePolicy::Reject,
        );
        assert_eq!(resolved, Ok(reference("Exod 1")));
    }

    #[test]
    fn test_resolve_sibling_clamps_at_edge() {
        let resolved = resolve_sibling(reference("Rev 22"), Direction::Forward, None, EdgePolicy::Clamp);
        assert_eq!(resolved, Ok(reference("Rev 22")));
    }

    #[test]
    fn test_resolve_sibling_rejects_at_edge() {
        // Act
        let resolved = resolve_sibling(reference("Gen 1"), Direction::Backward, None, EdgePolicy::Reject);

        // Assert
        let err = resolved.unwrap_err();
        assert_eq!(err.to_string(), "no previous chapter from Gen 1");
        match err {
            DomainError::NoSiblingChapter { reference: r, direction } => {
                assert_eq!(r, reference("Gen 1"));
                assert_eq!(direction, Direction::Backward);
            }
            other => panic!("expected NoSiblingChapter, got {other:?}"),
        }
    }
}
