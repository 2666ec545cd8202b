use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::memory::TranslationMemory;
use crate::resource::parse_resources;
use crate::{status, warn};

pub struct BuildOptions {
    pub files: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub dir: PathBuf,
    pub source_locale: Option<String>,
    pub segmentation: Option<String>,
}

/// Consolidates every resource record from the input files into one memory.
pub fn run_build(options: BuildOptions) -> Result<()> {
    let config_file = ConfigManager::new()?.load_or_default();
    let memory_options = resolve_config(
        &ResolveOptions {
            source_locale: options.source_locale,
            segmentation: options.segmentation,
            version: None,
            output: options.output,
        },
        &config_file,
    )?;

    let mut memory = TranslationMemory::new(memory_options);
    let mut total = 0;

    for (name, json) in InputReader::read_all(&options.files)? {
        let resources = parse_resources(&json)
            .with_context(|| format!("Invalid resource records in {name}"))?;
        tracing::debug!(input = %name, resources = resources.len(), "Consolidating resources");

        total += resources.len();
        for resource in &resources {
            memory.add_resource(resource);
        }
    }

    if total > 0 && memory.is_empty() {
        warn!(
            "No resource produced a unit; is the source locale {} correct?",
            memory.source_locale()
        );
    }

    status!(
        "Consolidated {total} resources into {} units ({})",
        memory.len(),
        memory.segmentation()
    );

    super::emit(&memory, &options.dir)
}
