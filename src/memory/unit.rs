use std::collections::{BTreeMap, HashSet};

/// Property keys a unit records about the resources that contributed to it.
pub const CONTEXT_PROPERTY: &str = "x-context";
pub const FLAVOR_PROPERTY: &str = "x-flavor";
pub const PROJECT_PROPERTY: &str = "x-project";

/// Identity of a variant within its unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub text: String,
    pub locale: String,
}

/// One rendering of a segment in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationVariant {
    pub locale: String,
    pub text: String,
}

impl TranslationVariant {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }

    pub fn key(&self) -> VariantKey {
        VariantKey {
            text: self.text.clone(),
            locale: self.locale.clone(),
        }
    }
}

/// Identity of a unit within a memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitKey {
    pub text: String,
    pub source_locale: String,
    pub data_type: String,
}

/// A source-language segment together with every known rendering of it.
///
/// The identity fields are fixed at construction; only variants and
/// properties grow afterwards.
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    source_locale: String,
    text: String,
    data_type: String,
    variants: Vec<TranslationVariant>,
    variant_keys: HashSet<VariantKey>,
    properties: BTreeMap<String, String>,
}

impl TranslationUnit {
    pub fn new(
        source_locale: impl Into<String>,
        text: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            source_locale: source_locale.into(),
            text: text.into(),
            data_type: data_type.into(),
            variants: Vec::new(),
            variant_keys: HashSet::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Variants in arrival order.
    pub fn variants(&self) -> &[TranslationVariant] {
        &self.variants
    }

    /// Non-empty provenance properties, ordered by key.
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn key(&self) -> UnitKey {
        UnitKey {
            text: self.text.clone(),
            source_locale: self.source_locale.clone(),
            data_type: self.data_type.clone(),
        }
    }

    /// Appends `variant` unless one with the same text and locale exists.
    ///
    /// Returns `true` if the variant was added.
    pub fn add_variant(&mut self, variant: TranslationVariant) -> bool {
        if self.variant_keys.insert(variant.key()) {
            self.variants.push(variant);
            true
        } else {
            false
        }
    }

    pub fn add_variants(&mut self, variants: impl IntoIterator<Item = TranslationVariant>) {
        for variant in variants {
            self.add_variant(variant);
        }
    }

    /// Records a property unless the value is empty or the key is already
    /// set. The first non-empty value for a key is kept.
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.properties.entry(key.into()).or_insert(value);
    }

    pub fn add_properties(&mut self, properties: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in properties {
            self.add_property(key, value);
        }
    }

    /// Folds `other`'s variants and properties into this unit.
    pub(crate) fn absorb(&mut self, other: Self) {
        self.add_variants(other.variants);
        self.add_properties(other.properties);
    }

}
