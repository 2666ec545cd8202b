use anyhow::{Context, Result};

use crate::locale::parse_locale;
use crate::segment::{Segmentation, segment};

/// Prints the segments of `text`, one per line.
pub fn run_segment(text: &str, locale: &str, segmentation: &str) -> Result<()> {
    parse_locale(locale)?;
    let style = Segmentation::parse(segmentation)
        .with_context(|| format!("Unknown segmentation style: '{segmentation}'"))?;

    for piece in segment(text, locale, style) {
        println!("{piece}");
    }

    Ok(())
}
