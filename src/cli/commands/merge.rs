use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::memory::TranslationMemory;
use crate::status;

pub struct MergeOptions {
    pub files: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub dir: PathBuf,
}

/// Reads every TMX file and merges their units, in file order.
///
/// Source locale, segmentation style and header properties not set by the
/// config file are taken from the first input.
pub fn run_merge(options: MergeOptions) -> Result<()> {
    let mut inputs = Vec::with_capacity(options.files.len());
    for (name, text) in InputReader::read_all(&options.files)? {
        let memory = TranslationMemory::deserialize(&text)
            .with_context(|| format!("Failed to read translation memory {name}"))?;
        tracing::debug!(input = %name, units = memory.len(), "Read translation memory");
        inputs.push(memory);
    }

    let config_file = ConfigManager::new()?.load_or_default();
    let mut memory_options = resolve_config(
        &ResolveOptions {
            output: options.output,
            ..ResolveOptions::default()
        },
        &config_file,
    )?;
    if let Some(first) = inputs.first() {
        memory_options
            .source_locale
            .get_or_insert_with(|| first.source_locale().to_string());
        memory_options
            .segmentation
            .get_or_insert_with(|| first.segmentation().to_string());
        for (key, value) in first.properties() {
            memory_options
                .properties
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    let mut merged = TranslationMemory::new(memory_options);
    let count = inputs.len();
    for memory in inputs {
        merged.merge(memory);
    }

    status!("Merged {count} files into {} units", merged.len());

    super::emit(&merged, &options.dir)
}
