//! Inspect command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::input::InputReader;
use crate::memory::TranslationMemory;
use crate::ui::Style;

/// Prints a summary of a TMX file to stdout.
pub fn run_inspect(file: &Path) -> Result<()> {
    let text = InputReader::read(Some(file))?;
    let memory = TranslationMemory::deserialize(&text)
        .with_context(|| format!("Failed to read translation memory {}", file.display()))?;

    println!("{}", Style::header(file.display()));
    println!("  {}       {}", Style::label("version"), Style::value(memory.version()));
    println!("  {}       {}", Style::label("segtype"), Style::value(memory.segmentation()));
    println!("  {} {}", Style::label("source locale"), Style::code(memory.source_locale()));
    println!("  {}         {}", Style::label("units"), Style::value(memory.len()));

    if !memory.properties().is_empty() {
        println!();
        println!("{}", Style::header("Header"));
        for (key, value) in memory.properties() {
            println!("  {} = {}", Style::label(key), Style::value(value));
        }
    }

    let counts = memory.variant_counts();
    if !counts.is_empty() {
        println!();
        println!("{}", Style::header("Variants"));
        for (locale, count) in counts {
            println!("  {} {count}", Style::code(format!("{locale:<12}")));
        }
    }

    Ok(())
}
