//! Language selection when a request does not name one.

use lectio_core::session::SessionContext;

/// The language a caller should be served in.
///
/// An authenticated user's stored language always wins, even when the
/// client session says otherwise; the client session is only consulted
/// for anonymous callers.
#[must_use]
pub fn resolve_language(session: SessionContext) -> String {
    match session.user {
        Some(user) => user.language,
        None => session.client_session.language,
    }
}

/// Like `resolve_language`, but substitutes `default_language` when the
/// winning source holds a blank language.
#[must_use]
pub fn resolve_language_or(session: SessionContext, default_language: &str) -> String {
    let language = resolve_language(session);
    if language.trim().is_empty() {
        default_language.to_owned()
    } else {
        language
    }
}

/// Reads the "all versions" flag. Only a case-insensitive `true` counts;
/// anything else, including absence, is `false`.
#[must_use]
pub fn parse_all_versions(raw: Option<&str>) -> bool {
    raw.is_some_and(|raw| raw.eq_ignore_ascii_case("true"))
}
