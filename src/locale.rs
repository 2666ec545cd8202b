//! Locale tag helpers.

use anyhow::{Result, anyhow};
use unic_langid::LanguageIdentifier;

/// Locale used for the TMX header's `srclang` and `adminlang` attributes.
pub const ADMIN_LOCALE: &str = "en-US";

/// Source locale a memory falls back to when none is configured.
pub const DEFAULT_SOURCE_LOCALE: &str = "en-US";

/// Parses the language identifier of a BCP 47 tag.
///
/// Both `-` and `_` separate subtags. Extension and private-use sequences
/// (`-u-ca-gregory`, `-x-legacy`) must be well-formed but are otherwise
/// ignored; the returned identifier covers what precedes them.
///
/// # Errors
///
/// Returns an error naming the offending tag.
pub fn parse_locale(tag: &str) -> Result<LanguageIdentifier> {
    let invalid = |reason: &dyn std::fmt::Display| {
        anyhow!(
            "Invalid locale tag: '{tag}' ({reason})\n\n\
             Expected a BCP 47 tag, e.g. en-US, de, zh-Hant-TW, de-CH-1996."
        )
    };

    if tag.trim().is_empty() {
        return Err(invalid(&"empty tag"));
    }

    let subtags: Vec<&str> = tag.split(['-', '_']).collect();
    let cut = subtags
        .iter()
        .skip(1)
        .position(|subtag| subtag.len() == 1)
        .map_or(subtags.len(), |pos| pos + 1);
    let (identifier, extensions) = subtags.split_at(cut);

    if !extensions.is_empty() && !is_extension_sequence(extensions) {
        return Err(invalid(&"malformed extension"));
    }

    identifier
        .join("-")
        .parse::<LanguageIdentifier>()
        .map_err(|err| invalid(&err))
}

/// `singleton 1*("-" (1*8alphanum))`, repeated.
fn is_extension_sequence(subtags: &[&str]) -> bool {
    subtags.len() >= 2
        && subtags.last().is_some_and(|last| last.len() > 1)
        && subtags
            .iter()
            .all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
