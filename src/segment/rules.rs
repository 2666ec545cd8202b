//! Per-locale sentence boundary suppressions.

use regex::Regex;
use std::sync::LazyLock;

use crate::locale::parse_locale;

/// Words ending in a period that never close a sentence, keyed by language
/// subtag or by lowercased `language-region`. Entries for a region extend
/// the entries for its language.
static ABBREVIATIONS: &[(&str, &[&str])] = &[
    (
        "en",
        &[
            "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "St.", "Jr.", "Sr.", "Mt.", "vs.", "approx.",
            "Jan.", "Feb.", "Mar.", "Apr.", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.", "No.",
            "Vol.", "Fig.", "Co.", "Corp.", "Ltd.",
        ],
    ),
    ("en-gb", &["Capt.", "Col.", "Gen.", "Rev.", "Hon.", "Sgt.", "Lt."]),
    (
        "de",
        &[
            "Dr.", "Hr.", "Hrn.", "Fr.", "Prof.", "bzw.", "ca.", "evtl.", "ggf.", "inkl.", "Nr.",
            "Str.", "usw.", "vgl.", "zzgl.", "Tel.", "Abs.", "Jan.", "Feb.", "Okt.", "Dez.",
        ],
    ),
    (
        "fr",
        &[
            "M.", "MM.", "Mme.", "Mlle.", "Dr.", "Pr.", "av.", "bd.", "env.", "etc.", "p.", "cf.",
            "janv.", "févr.", "oct.", "déc.",
        ],
    ),
    (
        "es",
        &[
            "Sr.", "Sra.", "Srta.", "Dr.", "Dra.", "Ud.", "Uds.", "pág.", "núm.", "aprox.",
            "tel.", "Avda.",
        ],
    ),
    ("it", &["Sig.", "Sigg.", "Dott.", "Prof.", "pag.", "ecc.", "tel.", "n."]),
    ("pt", &["Sr.", "Sra.", "Dr.", "Dra.", "Prof.", "pág.", "núm.", "tel.", "Av."]),
    ("nl", &["dhr.", "mevr.", "dr.", "prof.", "blz.", "nr.", "ca.", "jl.", "mr."]),
    ("sv", &["dvs.", "bl.a.", "t.ex.", "osv.", "ca.", "nr.", "tel.", "kl."]),
    ("ru", &["г.", "гг.", "ул.", "д.", "им.", "т.е.", "т.к.", "т.д.", "т.п.", "др.", "стр."]),
];

/// Single capital letter with a period, as in initials ("J. Smith").
#[allow(clippy::unwrap_used)]
static INITIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Lu}\.$").unwrap());

/// Letter groups joined by periods, as in "U.S." or "e.g.".
#[allow(clippy::unwrap_used)]
static DOTTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:\p{L}{1,2}\.){2,}$").unwrap());

/// Script family deciding which generic suppressions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptFamily {
    /// Space-delimited alphabetic scripts (Latin, Cyrillic, Greek).
    Alphabetic,
    /// Chinese, Japanese, Korean: no generic suppressions.
    Ideographic,
}

impl ScriptFamily {
    fn of(language: &str) -> Self {
        match language {
            "ja" | "zh" | "ko" | "yue" => Self::Ideographic,
            _ => Self::Alphabetic,
        }
    }
}

/// Sentence boundary rules resolved for one locale.
#[derive(Debug, Clone, Copy)]
pub struct SentenceRules {
    regional: &'static [&'static str],
    language: &'static [&'static str],
    family: ScriptFamily,
}

impl SentenceRules {
    /// Returns `true` if a period ending `token` must not close a sentence.
    pub fn suppresses(&self, token: &str) -> bool {
        if self.regional.contains(&token) || self.language.contains(&token) {
            return true;
        }

        match self.family {
            ScriptFamily::Alphabetic => INITIAL.is_match(token) || DOTTED.is_match(token),
            ScriptFamily::Ideographic => false,
        }
    }
}

/// Resolves the rules for `locale`. Locales without a table entry get only
/// the generic rules of their script family.
///
/// Tags that do not parse get the generic alphabetic rules.
pub fn rules_for(locale: &str) -> SentenceRules {
    let id = parse_locale(locale).unwrap_or_default();
    let language = id.language.as_str();
    let regional = id
        .region
        .map(|region| format!("{language}-{}", region.as_str().to_ascii_lowercase()));

    SentenceRules {
        regional: regional.as_deref().map(lookup).unwrap_or_default(),
        language: lookup(language),
        family: ScriptFamily::of(language),
    }
}

fn lookup(key: &str) -> &'static [&'static str] {
    ABBREVIATIONS
        .iter()
        .find(|(locale, _)| *locale == key)
        .map_or(&[], |(_, words)| *words)
}
