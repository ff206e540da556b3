//! Fixture builders for domain values used across test suites.

use lectio_core::model::{BibleVersion, Reference, Version, VersionCategory};
use lectio_core::options::{LookupOption, LookupOptionSet};
use lectio_core::session::{ClientSession, SessionContext, User};

/// Builds a `BibleVersion` with no features.
#[must_use]
pub fn bible_version(
    initials: &str,
    name: &str,
    language_code: &str,
    category: VersionCategory,
) -> BibleVersion {
    BibleVersion {
        initials: initials.to_owned(),
        name: name.to_owned(),
        language_code: language_code.to_owned(),
        language_name: language_code.to_owned(),
        category,
        features: LookupOptionSet::new(),
    }
}

/// A spread of versions covering modern, ancient and commentary modules.
#[must_use]
pub fn sample_versions() -> Vec<BibleVersion> {
    let mut esv = bible_version("ESV", "English Standard Version", "en", VersionCategory::Bible);
    esv.features = [LookupOption::Headers, LookupOption::Notes, LookupOption::VerseNumbers]
        .into_iter()
        .collect();
    vec![
        esv,
        bible_version("KJV", "King James Version", "en", VersionCategory::Bible),
        bible_version("LUT", "Luther Bibel 1912", "de", VersionCategory::Bible),
        bible_version("CUV", "Chinese Union Version", "zh", VersionCategory::Bible),
        bible_version("SBLG", "SBL Greek New Testament", "grc", VersionCategory::Bible),
        bible_version("WLC", "Westminster Leningrad Codex", "he", VersionCategory::Bible),
        bible_version("Vulg", "Latin Vulgate", "la", VersionCategory::Bible),
        bible_version("MHC", "Matthew Henry Concise", "en", VersionCategory::Commentary),
    ]
}

/// A version identifier, for tests that know the input is valid.
///
/// # Panics
///
/// Panics if `initials` is blank.
#[must_use]
pub fn version(initials: &str) -> Version {
    Version::new(initials).expect("fixture version must not be blank")
}

/// A reference, for tests that know the input is valid.
///
/// # Panics
///
/// Panics if `text` is blank.
#[must_use]
pub fn reference(text: &str) -> Reference {
    Reference::new(text).expect("fixture reference must not be blank")
}

/// A session with no authenticated user.
#[must_use]
pub fn anonymous_session(client_language: &str) -> SessionContext {
    SessionContext::anonymous(ClientSession {
        language: client_language.to_owned(),
    })
}

/// A session with an authenticated user.
#[must_use]
pub fn user_session(user_language: &str, client_language: &str) -> SessionContext {
    SessionContext::authenticated(
        User {
            email_address: "reader@example.com".to_owned(),
            name: "Reader".to_owned(),
            language: user_language.to_owned(),
        },
        ClientSession {
            language: client_language.to_owned(),
        },
    )
}
