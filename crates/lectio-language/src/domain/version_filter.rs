//! Narrowing the version list offered in the version picker, and editing
//! the comma-separated version list a user builds up in it.

use std::collections::HashSet;

use lectio_core::model::{BibleVersion, VersionCategory};
use serde::{Deserialize, Serialize};

/// Language codes treated as ancient.
const ANCIENT_LANGUAGES: [&str; 3] = ["grc", "la", "he"];

const ENGLISH: &str = "en";

/// The text after the last comma of a version list, or the whole input
/// when there is no comma.
#[must_use]
pub fn last_token(input: &str) -> &str {
    input.rsplit(',').next().unwrap_or(input)
}

/// Collapses runs of commas into a single comma.
#[must_use]
pub fn sanitize_versions(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    for c in input.chars() {
        if c == ',' && sanitized.ends_with(',') {
            continue;
        }
        sanitized.push(c);
    }
    sanitized
}

/// Adds `selected` to the end of a version list unless it is already the
/// last entry.
#[must_use]
pub fn append_version(current: &str, selected: &str) -> String {
    if current.trim().is_empty() {
        return sanitize_versions(selected);
    }
    if current.to_lowercase().ends_with(&selected.to_lowercase()) {
        return current.to_owned();
    }
    sanitize_versions(&format!("{current},{selected}"))
}

/// Which kind of module to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFilter {
    /// Bibles only.
    #[default]
    Bibles,
    /// Commentaries only.
    Commentaries,
    /// No explicit choice; commentaries are still left out.
    Any,
}

impl ResourceFilter {
    fn keeps(self, category: VersionCategory) -> bool {
        match self {
            Self::Bibles | Self::Any => category == VersionCategory::Bible,
            Self::Commentaries => category == VersionCategory::Commentary,
        }
    }

    /// Stable name used in cache keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bibles => "bibles",
            Self::Commentaries => "commentaries",
            Self::Any => "any",
        }
    }
}

/// Which languages to show, relative to the caller's language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFilter {
    /// Every language.
    All,
    /// The caller's language only.
    #[default]
    Mine,
    /// The caller's language and English.
    MineAndEnglish,
    /// Greek, Latin and Hebrew.
    Ancient,
}

impl LanguageFilter {
    fn keeps(self, language_code: &str, current_language: &str) -> bool {
        match self {
            Self::All => true,
            Self::Mine => language_code == current_language,
            Self::MineAndEnglish => language_code == current_language || language_code == ENGLISH,
            Self::Ancient => ANCIENT_LANGUAGES.contains(&language_code),
        }
    }

    /// Stable name used in cache keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mine => "mine",
            Self::MineAndEnglish => "mine_and_english",
            Self::Ancient => "ancient",
        }
    }
}

/// Criteria for the version picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFilter {
    /// Free text typed by the user. When present it matches initials or
    /// name and overrides the other criteria.
    #[serde(default)]
    pub search: Option<String>,
    /// Kind of module.
    #[serde(default)]
    pub resource: ResourceFilter,
    /// Language selection.
    #[serde(default)]
    pub language: LanguageFilter,
}

impl VersionFilter {
    /// The effective search term, lower-cased.
    ///
    /// Only the last entry of a comma-separated search counts, so a user
    /// typing `ESV,ki` is searching for `ki`. An entry that is already the
    /// initials of a known version is a finished selection, not a search.
    fn search_term(&self, versions: &[BibleVersion]) -> Option<String> {
        let term = last_token(self.search.as_deref()?).trim().to_lowercase();
        if term.is_empty() || versions.iter().any(|v| v.initials.to_lowercase() == term) {
            return None;
        }
        Some(term)
    }

    /// Returns the versions to show, in their original order.
    ///
    /// A search term matches initials or name and overrides the resource
    /// and language criteria. Under [`LanguageFilter::Ancient`] each
    /// initials appear once, with or without a search.
    #[must_use]
    pub fn apply<'a>(
        &self,
        versions: &'a [BibleVersion],
        current_language: &str,
    ) -> Vec<&'a BibleVersion> {
        let search = self.search_term(versions);

        let mut seen = HashSet::new();
        versions
            .iter()
            .filter(|v| match &search {
                Some(term) => {
                    v.initials.to_lowercase().contains(term.as_str())
                        || v.name.to_lowercase().contains(term.as_str())
                }
                None => {
                    self.resource.keeps(v.category)
                        && self.language.keeps(&v.language_code, current_language)
                }
            })
            .filter(|&v| self.language != LanguageFilter::Ancient || seen.insert(v.initials.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lectio_test_support::fixtures::{bible_version, sample_versions};

    use super::*;

    fn initials<'a>(versions: &[&'a BibleVersion]) -> Vec<&'a str> {
        versions.iter().map(|v| v.initials.as_str()).collect()
    }

    #[test]
    fn test_last_token_takes_text_after_final_comma() {
        assert_eq!(last_token("ESV,KJV,lu"), "lu");
        assert_eq!(last_token("ESV"), "ESV");
        assert_eq!(last_token("ESV,"), "");
    }

    #[test]
    fn test_sanitize_versions_collapses_comma_runs() {
        assert_eq!(sanitize_versions("ESV,,,KJV,,"), "ESV,KJV,");
        assert_eq!(sanitize_versions("ESV"), "ESV");
    }

    #[test]
    fn test_append_version_to_blank_list() {
        assert_eq!(append_version("  ", "ESV"), "ESV");
    }

    #[test]
    fn test_append_version_skips_repeat_of_last_entry() {
        assert_eq!(append_version("ESV,kjv", "KJV"), "ESV,kjv");
    }

    #[test]
    fn test_append_version_appends_and_sanitises() {
        assert_eq!(append_version("ESV,", "KJV"), "ESV,KJV");
        assert_eq!(append_version("ESV", "KJV"), "ESV,KJV");
    }

    #[test]
    fn test_default_filter_shows_bibles_in_my_language() {
        let versions = sample_versions();

        let shown = VersionFilter::default().apply(&versions, "en");

        assert_eq!(initials(&shown), vec!["ESV", "KJV"]);
    }

    #[test]
    fn test_search_matches_initials_or_name_and_ignores_other_criteria() {
        // Arrange
        let versions = sample_versions();
        let filter = VersionFilter {
            search: Some("ESV,luther".to_owned()),
            resource: ResourceFilter::Commentaries,
            language: LanguageFilter::Ancient,
        };

        // Act
        let shown = filter.apply(&versions, "en");

        // Assert
        assert_eq!(initials(&shown), vec!["LUT"]);
    }

    #[test]
    fn test_blank_search_term_falls_back_to_criteria() {
        let versions = sample_versions();
        let filter = VersionFilter {
            search: Some("ESV,".to_owned()),
            ..VersionFilter::default()
        };

        let shown = filter.apply(&versions, "de");

        assert_eq!(initials(&shown), vec!["LUT"]);
    }

    #[test]
    fn test_completed_version_entry_shows_full_criteria_list() {
        // Arrange
        let versions = sample_versions();
        let filter = VersionFilter {
            search: Some("KJV,esv".to_owned()),
            ..VersionFilter::default()
        };

        // Act
        let shown = filter.apply(&versions, "en");

        // Assert
        assert_eq!(initials(&shown), vec!["ESV", "KJV"]);
    }

    #[test]
    fn test_unfinished_entry_still_searches() {
        let versions = sample_versions();
        let filter = VersionFilter {
            search: Some("standard".to_owned()),
            language: LanguageFilter::All,
            ..VersionFilter::default()
        };

        assert_eq!(initials(&filter.apply(&versions, "en")), vec!["ESV"]);
    }

    #[test]
    fn test_ancient_search_results_keep_each_version_once() {
        // Arrange
        let mut versions = sample_versions();
        versions.push(bible_version("SBLG", "SBL Greek New Testament", "grc", VersionCategory::Bible));
        let filter = VersionFilter {
            search: Some("greek".to_owned()),
            language: LanguageFilter::Ancient,
            ..VersionFilter::default()
        };

        // Act
        let shown = filter.apply(&versions, "en");

        // Assert
        assert_eq!(initials(&shown), vec!["SBLG"]);
    }

    #[test]
    fn test_commentaries_filter_keeps_only_commentaries() {
        let versions = sample_versions();
        let filter = VersionFilter {
            resource: ResourceFilter::Commentaries,
            language: LanguageFilter::All,
            ..VersionFilter::default()
        };

        assert_eq!(initials(&filter.apply(&versions, "en")), vec!["MHC"]);
    }

    #[test]
    fn test_any_resource_still_drops_commentaries() {
        let versions = sample_versions();
        let filter = VersionFilter {
            resource: ResourceFilter::Any,
            language: LanguageFilter::All,
            ..VersionFilter::default()
        };

        let shown = filter.apply(&versions, "en");

        assert!(!initials(&shown).contains(&"MHC"));
        assert_eq!(shown.len(), 7);
    }

    #[test]
    fn test_mine_and_english_keeps_both_languages() {
        let versions = sample_versions();
        let filter = VersionFilter {
            language: LanguageFilter::MineAndEnglish,
            ..VersionFilter::default()
        };

        assert_eq!(
            initials(&filter.apply(&versions, "zh")),
            vec!["ESV", "KJV", "CUV"]
        );
    }

    #[test]
    fn test_ancient_keeps_original_languages_once_each() {
        // Arrange
        let mut versions = sample_versions();
        versions.push(bible_version("SBLG", "SBL Greek New Testament", "grc", VersionCategory::Bible));
        let filter = VersionFilter {
            language: LanguageFilter::Ancient,
            ..VersionFilter::default()
        };

        // Act
        let shown = filter.apply(&versions, "en");

        // Assert
        assert_eq!(initials(&shown), vec!["SBLG", "WLC", "Vulg"]);
    }
}
