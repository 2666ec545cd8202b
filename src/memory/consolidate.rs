//! Turning resource records into translation units.

use std::collections::BTreeMap;

use super::{
    CONTEXT_PROPERTY, FLAVOR_PROPERTY, PROJECT_PROPERTY, TranslationMemory, TranslationUnit,
    TranslationVariant,
};
use crate::resource::{PluralCategory, PluralForms, Resource, ResourceValue};
use crate::segment::segment;

/// A source segment paired with the target segment at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SegmentPair {
    source: String,
    target: Option<String>,
}

/// What every unit built from one resource shares.
struct UnitTemplate<'a> {
    source_locale: &'a str,
    target_locale: Option<&'a str>,
    data_type: &'a str,
    properties: BTreeMap<String, String>,
}

impl UnitTemplate<'_> {
    fn build(&self, pair: SegmentPair) -> TranslationUnit {
        let mut unit = TranslationUnit::new(self.source_locale, pair.source.clone(), self.data_type);
        unit.add_variant(TranslationVariant::new(self.source_locale, pair.source));
        if let (Some(locale), Some(target)) = (self.target_locale, pair.target) {
            unit.add_variant(TranslationVariant::new(locale, target));
        }
        unit.add_properties(self.properties.clone());
        unit
    }
}

impl TranslationMemory {
    /// Consolidates a resource record into the memory.
    ///
    /// Resources in a source locale other than the memory's are ignored.
    /// Each source segment becomes (or merges into) one unit carrying the
    /// source rendering and, when the resource has a target in another
    /// locale, the target segment at the same position.
    pub fn add_resource(&mut self, resource: &Resource) {
        if resource.source_locale != self.source_locale {
            tracing::debug!(
                source_locale = %resource.source_locale,
                expected = %self.source_locale,
                "Skipping resource in foreign source locale"
            );
            return;
        }

        let template = UnitTemplate {
            source_locale: &resource.source_locale,
            target_locale: resource
                .target_locale
                .as_deref()
                .filter(|locale| *locale != self.source_locale),
            data_type: &resource.data_type,
            properties: provenance(resource),
        };

        let units = match &resource.value {
            ResourceValue::String { source, target } => {
                self.string_units(&template, source, target.as_deref())
            }
            ResourceValue::Array { source, target } => source
                .iter()
                .enumerate()
                .flat_map(|(i, element)| {
                    let target = target.as_ref().and_then(|t| t.get(i)).map(String::as_str);
                    self.string_units(&template, element, target)
                })
                .collect(),
            ResourceValue::Plural { source, target } => {
                self.plural_units(&template, source, target.as_ref())
            }
        };

        for unit in units {
            self.add_translation_unit(unit);
        }
    }

    fn string_units(
        &self,
        template: &UnitTemplate<'_>,
        source: &str,
        target: Option<&str>,
    ) -> Vec<TranslationUnit> {
        self.align(template, source, target)
            .into_iter()
            .map(|pair| template.build(pair))
            .collect()
    }

    /// Builds units for every source plural category. Target categories
    /// the source lacks become extra variants on the units of the source's
    /// `other` category, matched by segment position.
    fn plural_units(
        &self,
        template: &UnitTemplate<'_>,
        source: &PluralForms,
        target: Option<&PluralForms>,
    ) -> Vec<TranslationUnit> {
        let target = target.filter(|_| template.target_locale.is_some());

        let mut by_category: Vec<(PluralCategory, Vec<TranslationUnit>)> = source
            .iter()
            .map(|(category, text)| {
                let target_text = target.and_then(|t| t.get(category)).map(String::as_str);
                (*category, self.string_units(template, text, target_text))
            })
            .collect();

        if let (Some(target), Some(target_locale)) = (target, template.target_locale) {
            let extras = target
                .iter()
                .filter(|(category, _)| !source.contains_key(*category));

            for (category, text) in extras {
                let Some((_, other_units)) = by_category
                    .iter_mut()
                    .find(|(c, _)| *c == PluralCategory::Other)
                else {
                    tracing::debug!(%category, "No source 'other' form to attach extra plural form to");
                    continue;
                };

                let segments = segment(text, target_locale, self.segmentation);
                if segments.len() > other_units.len() {
                    tracing::debug!(
                        %category,
                        dropped = segments.len() - other_units.len(),
                        "Dropping unmatched plural target segments"
                    );
                }
                for (unit, seg) in other_units.iter_mut().zip(segments) {
                    unit.add_variant(TranslationVariant::new(target_locale, seg));
                }
            }
        }

        by_category.into_iter().flat_map(|(_, units)| units).collect()
    }

    /// Segments source and target with the memory's style and pairs them
    /// by position. Trailing source segments without a counterpart stay
    /// source-only; trailing target segments are dropped.
    fn align(
        &self,
        template: &UnitTemplate<'_>,
        source: &str,
        target: Option<&str>,
    ) -> Vec<SegmentPair> {
        let sources = segment(source, template.source_locale, self.segmentation);
        let mut targets = match (template.target_locale, target) {
            (Some(locale), Some(text)) => segment(text, locale, self.segmentation),
            _ => Vec::new(),
        }
        .into_iter();

        let pairs: Vec<SegmentPair> = sources
            .into_iter()
            .map(|source| SegmentPair {
                source,
                target: targets.next(),
            })
            .collect();

        let dropped = targets.count();
        if dropped > 0 {
            tracing::debug!(dropped, "Dropping unmatched target segments");
        }

        pairs
    }
}

/// Provenance properties recorded on every unit built from `resource`.
fn provenance(resource: &Resource) -> BTreeMap<String, String> {
    [
        (CONTEXT_PROPERTY, &resource.context),
        (FLAVOR_PROPERTY, &resource.flavor),
        (PROJECT_PROPERTY, &resource.project),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| (key.to_string(), v.to_string()))
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::memory::MemoryOptions;

    fn sentence_memory() -> TranslationMemory {
        TranslationMemory::new(MemoryOptions {
            segmentation: Some("sentence".to_string()),
            ..MemoryOptions::default()
        })
    }

    fn string(source: &str, target: Option<&str>) -> Resource {
        Resource::new(
            ResourceValue::String {
                source: source.to_string(),
                target: target.map(str::to_string),
            },
            "en-US",
        )
    }

    fn array(source: &[&str], target: Option<&[&str]>) -> Resource {
        Resource::new(
            ResourceValue::Array {
                source: source.iter().map(ToString::to_string).collect(),
                target: target.map(|t| t.iter().map(ToString::to_string).collect()),
            },
            "en-US",
        )
    }

    fn plurals(forms: &[(PluralCategory, &str)]) -> PluralForms {
        forms
            .iter()
            .map(|(category, text)| (*category, (*text).to_string()))
            .collect()
    }

    fn plural(source: &[(PluralCategory, &str)], target: Option<&[(PluralCategory, &str)]>) -> Resource {
        Resource::new(
            ResourceValue::Plural {
                source: plurals(source),
                target: target.map(plurals),
            },
            "en-US",
        )
    }

    fn variants(unit: &TranslationUnit) -> Vec<(&str, &str)> {
        unit.variants()
            .iter()
            .map(|v| (v.locale.as_str(), v.text.as_str()))
            .collect()
    }

    #[test]
    fn test_add_string_without_target() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(
            &string("Asdf asdf", None)
                .with_context("asdf")
                .with_flavor("chocolate")
                .with_project("webapp"),
        );

        assert_eq!(memory.len(), 1);
        let unit = &memory.units()[0];
        assert_eq!(unit.text(), "Asdf asdf");
        assert_eq!(unit.source_locale(), "en-US");
        assert_eq!(variants(unit), vec![("en-US", "Asdf asdf")]);

        let props = unit.properties();
        assert_eq!(props.get(CONTEXT_PROPERTY).map(String::as_str), Some("asdf"));
        assert_eq!(props.get(FLAVOR_PROPERTY).map(String::as_str), Some("chocolate"));
        assert_eq!(props.get(PROJECT_PROPERTY).map(String::as_str), Some("webapp"));
    }

    #[test]
    fn test_add_string_with_target() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("Asdf asdf", Some("foobar auf deutsch")).with_target_locale("de-DE"));

        assert_eq!(
            variants(&memory.units()[0]),
            vec![("en-US", "Asdf asdf"), ("de-DE", "foobar auf deutsch")]
        );
    }

    #[test]
    fn test_foreign_source_locale_is_ignored() {
        let mut memory = TranslationMemory::default();
        let mut res = string("Asdf asdf", None);
        res.source_locale = "de-DE".to_string();

        memory.add_resource(&res);

        assert!(memory.is_empty());
    }

    #[test]
    fn test_target_in_source_locale_is_not_a_translation() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("color", Some("colour")).with_target_locale("en-US"));

        assert_eq!(variants(&memory.units()[0]), vec![("en-US", "color")]);
    }

    #[test]
    fn test_target_locale_without_target_text() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("oh yeah!", None).with_target_locale("de-DE"));

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.units()[0].variants().len(), 1);
    }

    #[test]
    fn test_empty_source_contributes_nothing() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("", Some("leer")).with_target_locale("de-DE"));
        memory.add_resource(&array(&[], None));

        assert!(memory.is_empty());
    }

    #[test]
    fn test_same_source_different_targets_merge() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("Asdf asdf", Some("foobar auf deutsch")).with_target_locale("de-DE"));
        memory.add_resource(&string("Asdf asdf", Some("foobar en francais")).with_target_locale("fr-FR"));

        assert_eq!(memory.len(), 1);
        assert_eq!(
            variants(&memory.units()[0]),
            vec![
                ("en-US", "Asdf asdf"),
                ("de-DE", "foobar auf deutsch"),
                ("fr-FR", "foobar en francais")
            ]
        );
    }

    #[test]
    fn test_identical_resource_is_idempotent() {
        let res = string("Asdf asdf", Some("eins zwei drei"))
            .with_target_locale("de-DE")
            .with_project("webapp");

        let mut memory = TranslationMemory::default();
        memory.add_resource(&res);
        memory.add_resource(&res);

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.units()[0].variants().len(), 2);
    }

    #[test]
    fn test_two_translations_same_locale_both_kept() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("Open", Some("Öffnen")).with_target_locale("de-DE"));
        memory.add_resource(&string("Open", Some("Offen")).with_target_locale("de-DE"));

        assert_eq!(memory.len(), 1);
        assert_eq!(
            variants(&memory.units()[0]),
            vec![("en-US", "Open"), ("de-DE", "Öffnen"), ("de-DE", "Offen")]
        );
    }

    #[test]
    fn test_context_does_not_split_units_and_first_value_wins() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("Open", None).with_context("menu"));
        memory.add_resource(&string("Open", None).with_context("button").with_flavor("chocolate"));

        assert_eq!(memory.len(), 1);
        let props = memory.units()[0].properties();
        assert_eq!(props.get(CONTEXT_PROPERTY).map(String::as_str), Some("menu"));
        assert_eq!(props.get(FLAVOR_PROPERTY).map(String::as_str), Some("chocolate"));
    }

    #[test]
    fn test_data_type_separates_units() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("Open", None).with_data_type("java"));
        memory.add_resource(&string("Open", None).with_data_type("javascript"));

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.units()[1].data_type(), "javascript");
    }

    #[test]
    fn test_add_array_with_targets() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&array(&["a", "b", "c"], Some(["x", "y", "z"].as_slice())).with_target_locale("de-DE"));

        assert_eq!(memory.len(), 3);
        assert_eq!(variants(&memory.units()[0]), vec![("en-US", "a"), ("de-DE", "x")]);
        assert_eq!(variants(&memory.units()[2]), vec![("en-US", "c"), ("de-DE", "z")]);
    }

    #[test]
    fn test_add_array_with_short_target() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&array(&["a", "b"], Some(["x"].as_slice())).with_target_locale("de-DE"));

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.units()[1].variants().len(), 1);
    }

    #[test]
    fn test_add_array_overlapping_sources_merge() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&array(&["a", "b"], Some(["x", "y"].as_slice())).with_target_locale("de-DE"));
        memory.add_resource(&array(&["b", "c"], Some(["y", "z"].as_slice())).with_target_locale("de-DE"));

        let texts: Vec<_> = memory.units().iter().map(TranslationUnit::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(memory.units()[1].variants().len(), 2);
    }

    #[test]
    fn test_plural_target_with_fewer_categories() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(
            &plural(
                &[(PluralCategory::One, "one file"), (PluralCategory::Other, "many files")],
                Some([(PluralCategory::Other, "多个文件")].as_slice()),
            )
            .with_target_locale("zh-CN"),
        );

        assert_eq!(memory.len(), 2);
        assert_eq!(variants(&memory.units()[0]), vec![("en-US", "one file")]);
        assert_eq!(
            variants(&memory.units()[1]),
            vec![("en-US", "many files"), ("zh-CN", "多个文件")]
        );
    }

    #[test]
    fn test_plural_target_with_more_categories() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(
            &plural(
                &[(PluralCategory::One, "one string"), (PluralCategory::Other, "other strings")],
                Some([
                    (PluralCategory::One, "одна строка"),
                    (PluralCategory::Few, "несколько строки"),
                    (PluralCategory::Other, "много строк"),
                ].as_slice()),
            )
            .with_target_locale("ru-RU"),
        );

        assert_eq!(memory.len(), 2);
        assert_eq!(
            variants(&memory.units()[0]),
            vec![("en-US", "one string"), ("ru-RU", "одна строка")]
        );
        assert_eq!(
            variants(&memory.units()[1]),
            vec![
                ("en-US", "other strings"),
                ("ru-RU", "много строк"),
                ("ru-RU", "несколько строки")
            ]
        );
    }

    #[test]
    fn test_plural_extra_categories_survive_merge_into_existing_unit() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&string("other strings", None));
        memory.add_resource(
            &plural(
                &[(PluralCategory::One, "one string"), (PluralCategory::Other, "other strings")],
                Some([(PluralCategory::Few, "несколько строки"), (PluralCategory::Other, "много строк")].as_slice()),
            )
            .with_target_locale("ru-RU"),
        );

        let other = memory.get("other strings", "").unwrap();
        assert_eq!(other.variants().len(), 3);
    }

    #[test]
    fn test_plural_without_other_drops_extra_categories() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(
            &plural(
                &[(PluralCategory::One, "one string")],
                Some([(PluralCategory::One, "eins"), (PluralCategory::Few, "wenige")].as_slice()),
            )
            .with_target_locale("de-DE"),
        );

        assert_eq!(memory.len(), 1);
        assert_eq!(variants(&memory.units()[0]), vec![("en-US", "one string"), ("de-DE", "eins")]);
    }

    #[test]
    fn test_plural_without_target_locale_ignores_target_forms() {
        let mut memory = TranslationMemory::default();
        memory.add_resource(&plural(
            &[(PluralCategory::Other, "strings")],
            Some([(PluralCategory::Few, "строки")].as_slice()),
        ));

        assert_eq!(memory.units()[0].variants().len(), 1);
    }

    #[test]
    fn test_sentence_segmentation_source_only() {
        let mut memory = sentence_memory();
        memory.add_resource(&string("This is a test. This is only a test.", None).with_project("webapp"));

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.units()[0].text(), "This is a test.");
        assert_eq!(memory.units()[1].text(), "This is only a test.");
        assert_eq!(memory.units()[0].variants().len(), 1);
        assert_eq!(memory.units()[1].variants().len(), 1);
        assert_eq!(
            memory.units()[1].properties().get(PROJECT_PROPERTY).map(String::as_str),
            Some("webapp")
        );
    }

    #[test]
    fn test_sentence_segmentation_pairs_targets() {
        let mut memory = sentence_memory();
        memory.add_resource(
            &string(
                "This is a test. This is only a test.",
                Some("これはテストです。これは単なるテストです。"),
            )
            .with_target_locale("ja-JP"),
        );

        assert_eq!(memory.len(), 2);
        assert_eq!(
            variants(&memory.units()[0]),
            vec![("en-US", "This is a test."), ("ja-JP", "これはテストです。")]
        );
        assert_eq!(
            variants(&memory.units()[1]),
            vec![("en-US", "This is only a test."), ("ja-JP", "これは単なるテストです。")]
        );
    }

    #[test]
    fn test_sentence_mismatch_extra_source_stays_source_only() {
        let mut memory = sentence_memory();
        memory.add_resource(
            &string("One. Two. Three.", Some("Eins. Zwei.")).with_target_locale("de-DE"),
        );

        assert_eq!(memory.len(), 3);
        assert_eq!(memory.units()[1].variants().len(), 2);
        assert_eq!(variants(&memory.units()[2]), vec![("en-US", "Three.")]);
    }

    // Lossy: unmatched trailing target sentences are discarded.
    #[test]
    fn test_sentence_mismatch_extra_target_is_dropped() {
        let mut memory = sentence_memory();
        memory.add_resource(
            &string("One and two.", Some("Eins. Zwei.")).with_target_locale("de-DE"),
        );

        assert_eq!(memory.len(), 1);
        assert_eq!(
            variants(&memory.units()[0]),
            vec![("en-US", "One and two."), ("de-DE", "Eins.")]
        );
        assert_eq!(memory.variant_counts().get("de-DE"), Some(&1));
    }

    #[test]
    fn test_sentence_segmentation_plural_more_categories() {
        let mut memory = sentence_memory();
        memory.add_resource(
            &plural(
                &[
                    (PluralCategory::One, "This is a test. This is only a test."),
                    (PluralCategory::Other, "These are some tests. These are only some tests."),
                ],
                Some([
                    (PluralCategory::One, "Это тест. Это всего лишь тест."),
                    (PluralCategory::Few, "Это некоторые теста. Это только некоторые теста."),
                    (PluralCategory::Other, "Это некоторые тестов. Это только некоторые тестов."),
                ].as_slice()),
            )
            .with_target_locale("ru-RU"),
        );

        assert_eq!(memory.len(), 4);
        assert_eq!(memory.units()[0].variants().len(), 2);
        assert_eq!(memory.units()[1].variants().len(), 2);
        assert_eq!(
            variants(&memory.units()[2]),
            vec![
                ("en-US", "These are some tests."),
                ("ru-RU", "Это некоторые тестов."),
                ("ru-RU", "Это некоторые теста.")
            ]
        );
        assert_eq!(
            variants(&memory.units()[3]),
            vec![
                ("en-US", "These are only some tests."),
                ("ru-RU", "Это только некоторые тестов."),
                ("ru-RU", "Это только некоторые теста.")
            ]
        );
    }

    #[test]
    fn test_sentence_segmentation_array() {
        let mut memory = sentence_memory();
        memory.add_resource(
            &array(&["First. Second.", "Third."], Some(["Erste. Zweite.", "Dritte."].as_slice()))
                .with_target_locale("de-DE"),
        );

        let texts: Vec<_> = memory.units().iter().map(TranslationUnit::text).collect();
        assert_eq!(texts, vec!["First.", "Second.", "Third."]);
        assert_eq!(variants(&memory.units()[1]), vec![("en-US", "Second."), ("de-DE", "Zweite.")]);
    }

    #[test]
    fn test_align_pairs_by_position() {
        let memory = sentence_memory();
        let template = UnitTemplate {
            source_locale: "en-US",
            target_locale: Some("sv"),
            data_type: "",
            properties: BTreeMap::new(),
        };

        let pairs = memory.align(
            &template,
            "The SignRequest subdomain cannot be changed. If you need a different domain you can create a new team.",
            Some("SignRequest domänen kan inte ändras. Om du behöver en annan domän kan du skapa en nya arbetsgrupp."),
        );

        assert_eq!(
            pairs,
            vec![
                SegmentPair {
                    source: "The SignRequest subdomain cannot be changed.".to_string(),
                    target: Some("SignRequest domänen kan inte ändras.".to_string()),
                },
                SegmentPair {
                    source: "If you need a different domain you can create a new team.".to_string(),
                    target: Some(
                        "Om du behöver en annan domän kan du skapa en nya arbetsgrupp.".to_string()
                    ),
                },
            ]
        );
    }
}
