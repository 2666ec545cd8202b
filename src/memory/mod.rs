//! The translation memory: a deduplicated, append-only store of
//! translation units.
//!
//! Units are kept in insertion order, which is also the order they are
//! serialized in. A unit is identified by its source text, source locale
//! and data type; anything arriving with the same identity is merged into
//! the existing unit instead of creating a new one.

mod consolidate;
mod unit;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::locale::DEFAULT_SOURCE_LOCALE;
use crate::segment::Segmentation;
use crate::tmx::{self, TmxVersion};

pub use unit::{
    CONTEXT_PROPERTY, FLAVOR_PROPERTY, PROJECT_PROPERTY, TranslationUnit, TranslationVariant,
    UnitKey, VariantKey,
};

/// Header property naming the tool that created the memory.
pub const CREATION_TOOL_PROPERTY: &str = "creationtool";
/// Header property naming the version of that tool.
pub const CREATION_TOOL_VERSION_PROPERTY: &str = "creationtoolversion";
/// Header property emitted as the `o-tmf` attribute.
pub const ORIGINAL_FORMAT_PROPERTY: &str = "originalFormat";

/// Construction options for a [`TranslationMemory`].
///
/// Every field is optional; unset or unusable values fall back to
/// built-in defaults rather than failing.
#[derive(Debug, Clone, Default)]
pub struct MemoryOptions {
    /// Source locale resources must match to be accepted.
    pub source_locale: Option<String>,
    /// `paragraph` or `sentence`.
    pub segmentation: Option<String>,
    /// TMX version to emit, as `<major>[.<minor>]`.
    pub version: Option<String>,
    /// Header properties.
    pub properties: BTreeMap<String, String>,
    /// Output path, relative paths resolve against the directory passed to
    /// [`TranslationMemory::write`].
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct TranslationMemory {
    source_locale: String,
    segmentation: Segmentation,
    version: TmxVersion,
    properties: BTreeMap<String, String>,
    path: Option<PathBuf>,
    units: Vec<TranslationUnit>,
    index: HashMap<UnitKey, usize>,
}

impl Default for TranslationMemory {
    fn default() -> Self {
        Self::new(MemoryOptions::default())
    }
}

impl TranslationMemory {
    pub fn new(options: MemoryOptions) -> Self {
        let segmentation = options.segmentation.as_deref().map_or_else(
            Segmentation::default,
            |name| {
                Segmentation::parse(name).unwrap_or_else(|| {
                    tracing::warn!(style = name, "Unknown segmentation style, using paragraph");
                    Segmentation::default()
                })
            },
        );

        let version = options
            .version
            .as_deref()
            .map_or_else(TmxVersion::default, |raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::warn!("{err}, using {}", TmxVersion::default());
                    TmxVersion::default()
                })
            });

        Self {
            source_locale: options
                .source_locale
                .unwrap_or_else(|| DEFAULT_SOURCE_LOCALE.to_string()),
            segmentation,
            version,
            properties: options.properties,
            path: options.path,
            units: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    pub const fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    pub const fn version(&self) -> &TmxVersion {
        &self.version
    }

    /// Header properties.
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Units in insertion order.
    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Looks up the unit for `text` in the memory's source locale.
    pub fn get(&self, text: &str, data_type: &str) -> Option<&TranslationUnit> {
        let key = UnitKey {
            text: text.to_string(),
            source_locale: self.source_locale.clone(),
            data_type: data_type.to_string(),
        };
        self.index.get(&key).map(|&pos| &self.units[pos])
    }

    /// Adds a unit, merging it into an existing unit with the same
    /// identity. Merging appends unseen variants in arrival order and fills
    /// in properties the existing unit lacks.
    pub fn add_translation_unit(&mut self, unit: TranslationUnit) {
        let key = unit.key();
        if let Some(&pos) = self.index.get(&key) {
            tracing::trace!(text = %key.text, "Merging into existing translation unit");
            self.units[pos].absorb(unit);
        } else {
            self.index.insert(key, self.units.len());
            self.units.push(unit);
        }
    }

    /// Adds every unit of `other` to this memory.
    pub fn merge(&mut self, other: Self) {
        for unit in other.units {
            self.add_translation_unit(unit);
        }
    }

    /// Number of variants per locale across all units, ordered by locale.
    pub fn variant_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for variant in self.units.iter().flat_map(TranslationUnit::variants) {
            *counts.entry(variant.locale.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Renders the memory as TMX text.
    pub fn serialize(&self) -> String {
        tmx::serialize(self)
    }

    /// Parses TMX text into a new memory.
    pub fn deserialize(text: &str) -> Result<Self> {
        tmx::deserialize(text)
    }

    /// Writes the serialized memory to its configured path.
    ///
    /// Does nothing and returns `Ok(None)` when no path is configured.
    /// Relative paths resolve against `target_dir`; missing parent
    /// directories are created. Returns the path written.
    pub fn write(&self, target_dir: &Path) -> Result<Option<PathBuf>> {
        let Some(path) = &self.path else {
            tracing::debug!("No output path configured, skipping write");
            return Ok(None);
        };

        let full_path = if path.is_absolute() {
            path.clone()
        } else {
            target_dir.join(path)
        };

        crate::fs::write_file(&full_path, &self.serialize())?;
        tracing::debug!(path = %full_path.display(), units = self.len(), "Wrote translation memory");

        Ok(Some(full_path))
    }
}
