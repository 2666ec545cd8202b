use std::collections::BTreeMap;

use super::xml::{self, Element};
use super::TmxVersion;
use crate::error::{Result, TmxError};
use crate::memory::{
    CREATION_TOOL_PROPERTY, CREATION_TOOL_VERSION_PROPERTY, MemoryOptions, ORIGINAL_FORMAT_PROPERTY,
    TranslationMemory, TranslationUnit, TranslationVariant,
};

/// `srclang` value meaning "any variant may serve as source".
const ALL_LOCALES: &str = "*all*";

/// Parses a TMX document into a new memory.
///
/// The document version is checked before anything else is read; an
/// unsupported version yields [`TmxError::UnsupportedVersion`] and no
/// memory. Units are added with [`TranslationMemory::add_translation_unit`],
/// so repeated units in the document merge.
pub fn deserialize(text: &str) -> Result<TranslationMemory> {
    let root = xml::parse(text)?;
    if root.name != "tmx" {
        return Err(TmxError::MissingElement("tmx"));
    }

    let version = read_version(&root)?;
    let header = root.child("header").ok_or(TmxError::MissingElement("header"))?;
    let body = root.child("body").ok_or(TmxError::MissingElement("body"))?;

    let mut memory = TranslationMemory::new(header_options(header, &version));

    for tu in body.elements().filter(|e| e.name == "tu") {
        match read_unit(tu, memory.source_locale()) {
            Some(unit) => memory.add_translation_unit(unit),
            None => tracing::debug!("Skipping <tu> without variants"),
        }
    }

    tracing::debug!(units = memory.len(), "Read translation memory");
    Ok(memory)
}

fn read_version(root: &Element) -> Result<TmxVersion> {
    let raw = root.attribute("version").ok_or(TmxError::MissingVersion)?;
    let unsupported = || TmxError::UnsupportedVersion {
        found: raw.to_string(),
    };

    let version: TmxVersion = raw.parse().map_err(|_| unsupported())?;
    if !version.is_supported() {
        return Err(unsupported());
    }
    Ok(version)
}

fn header_options(header: &Element, version: &TmxVersion) -> MemoryOptions {
    let mut properties = BTreeMap::new();

    let attributes = [
        ("creationtool", CREATION_TOOL_PROPERTY),
        ("creationtoolversion", CREATION_TOOL_VERSION_PROPERTY),
        ("o-tmf", ORIGINAL_FORMAT_PROPERTY),
    ];
    for (attribute, property) in attributes {
        if let Some(value) = header.attribute(attribute) {
            properties.insert(property.to_string(), value.to_string());
        }
    }

    for prop in header.elements().filter(|e| e.name == "prop") {
        if let Some(key) = prop.attribute("type") {
            properties.insert(key.to_string(), prop.text());
        }
    }

    MemoryOptions {
        source_locale: header
            .attribute("srclang")
            .filter(|locale| *locale != ALL_LOCALES)
            .map(str::to_string),
        segmentation: header.attribute("segtype").map(str::to_string),
        version: Some(version.to_string()),
        properties,
        path: None,
    }
}

/// Builds a unit from a `<tu>` element. Returns `None` when the element
/// holds no usable variant.
fn read_unit(tu: &Element, default_locale: &str) -> Option<TranslationUnit> {
    let source_locale = tu
        .attribute("srclang")
        .filter(|locale| *locale != ALL_LOCALES)
        .unwrap_or(default_locale);

    let variants: Vec<TranslationVariant> = tu
        .elements()
        .filter(|e| e.name == "tuv")
        .filter_map(|tuv| {
            let locale = tuv.attribute("xml:lang").or_else(|| tuv.attribute("lang"))?;
            let seg = tuv.child("seg")?;
            Some(TranslationVariant::new(locale, seg.text()))
        })
        .collect();

    let text = variants
        .iter()
        .find(|v| v.locale.eq_ignore_ascii_case(source_locale))
        .or_else(|| variants.first())?
        .text
        .clone();

    let mut unit = TranslationUnit::new(source_locale, text, tu.attribute("datatype").unwrap_or_default());
    unit.add_variants(variants);
    for prop in tu.elements().filter(|e| e.name == "prop") {
        if let Some(key) = prop.attribute("type") {
            unit.add_property(key, prop.text());
        }
    }

    Some(unit)
}
