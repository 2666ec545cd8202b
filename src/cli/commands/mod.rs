//! Subcommand implementations.

use anyhow::{Context, Result};
use std::path::Path;

use crate::memory::TranslationMemory;
use crate::status;
use crate::ui::Style;

/// Build command handler.
pub mod build;

/// Inspect command handler.
pub mod inspect;

/// Merge command handler.
pub mod merge;

/// Segment command handler.
pub mod segment;

/// Writes `memory` to its configured path under `dir`, or prints it to
/// stdout when it has none.
fn emit(memory: &TranslationMemory, dir: &Path) -> Result<()> {
    let written = memory
        .write(dir)
        .context("Failed to write translation memory")?;

    match written {
        Some(path) => {
            let translated = memory
                .units()
                .iter()
                .filter(|unit| unit.variants().len() > 1)
                .count();
            status!(
                "{} {} of {} units to {}",
                Style::success("Wrote"),
                translated,
                memory.len(),
                Style::secondary(path.display())
            );
        }
        None => println!("{}", memory.serialize()),
    }

    Ok(())
}
