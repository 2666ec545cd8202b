//! Resource records produced by string extractors.
//!
//! A resource is one localizable value (a plain string, an ordered array of
//! strings, or a set of plural forms) in its source locale, optionally
//! carrying a translation into a single target locale.
//!
//! Records arrive as JSON:
//!
//! ```json
//! [
//!   {
//!     "kind": "plural",
//!     "sourcePlurals": { "one": "one file", "other": "{n} files" },
//!     "targetPlurals": { "one": "eine Datei", "other": "{n} Dateien" },
//!     "sourceLocale": "en-US",
//!     "targetLocale": "de-DE",
//!     "project": "webapp"
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A CLDR plural category.
///
/// Variants are declared in CLDR order, which is the order plural forms are
/// visited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plural forms of one message, keyed by category.
pub type PluralForms = BTreeMap<PluralCategory, String>;

/// The localizable value of a resource, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourceValue {
    String {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
    Array {
        #[serde(rename = "sourceArray")]
        source: Vec<String>,
        #[serde(rename = "targetArray", default, skip_serializing_if = "Option::is_none")]
        target: Option<Vec<String>>,
    },
    Plural {
        #[serde(rename = "sourcePlurals")]
        source: PluralForms,
        #[serde(rename = "targetPlurals", default, skip_serializing_if = "Option::is_none")]
        target: Option<PluralForms>,
    },
}

/// One extracted resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(flatten)]
    pub value: ResourceValue,
    pub source_locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_locale: Option<String>,
    /// Kind of file the value came from, empty when unknown.
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Resource {
    /// Creates a resource with no target and no metadata.
    pub fn new(value: ResourceValue, source_locale: impl Into<String>) -> Self {
        Self {
            value,
            source_locale: source_locale.into(),
            target_locale: None,
            data_type: String::new(),
            context: None,
            flavor: None,
            project: None,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_target_locale(mut self, locale: impl Into<String>) -> Self {
        self.target_locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}

/// Parses a JSON array of resource records.
pub fn parse_resources(json: &str) -> Result<Vec<Resource>> {
    serde_json::from_str(json).context("Failed to parse resource records")
}
