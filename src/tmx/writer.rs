use super::xml::{escape_attribute, escape_text};
use crate::locale::ADMIN_LOCALE;
use crate::memory::{
    CREATION_TOOL_PROPERTY, CREATION_TOOL_VERSION_PROPERTY, ORIGINAL_FORMAT_PROPERTY,
    TranslationMemory, TranslationUnit,
};

const DEFAULT_CREATION_TOOL: &str = env!("CARGO_PKG_NAME");
const DEFAULT_CREATION_TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Indented line output; the final line carries no trailing newline.
#[derive(Default)]
struct Lines {
    out: String,
}

impl Lines {
    fn push(&mut self, depth: usize, content: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(content);
    }
}

/// Renders `memory` as a TMX document.
///
/// Only units holding at least one translation besides their source
/// rendering are written. Units appear in insertion order, properties in
/// key order, variants in arrival order.
pub fn serialize(memory: &TranslationMemory) -> String {
    let mut lines = Lines::default();
    lines.push(0, r#"<?xml version="1.0" encoding="utf-8"?>"#);
    lines.push(0, &format!(r#"<tmx version="{}">"#, memory.version()));
    write_header(&mut lines, memory);
    write_body(&mut lines, memory);
    lines.push(0, "</tmx>");
    lines.out
}

fn write_header(lines: &mut Lines, memory: &TranslationMemory) {
    let props = memory.properties();
    let tool = props
        .get(CREATION_TOOL_PROPERTY)
        .map_or(DEFAULT_CREATION_TOOL, String::as_str);
    let tool_version = props
        .get(CREATION_TOOL_VERSION_PROPERTY)
        .map_or(DEFAULT_CREATION_TOOL_VERSION, String::as_str);

    let mut attributes = format!(
        r#"segtype="{}" creationtool="{}" creationtoolversion="{}" srclang="{ADMIN_LOCALE}" adminlang="{ADMIN_LOCALE}" datatype="unknown""#,
        memory.segmentation(),
        escape_attribute(tool),
        escape_attribute(tool_version),
    );
    if let Some(format) = props.get(ORIGINAL_FORMAT_PROPERTY) {
        attributes.push_str(&format!(r#" o-tmf="{}""#, escape_attribute(format)));
    }

    let extra: Vec<_> = props
        .iter()
        .filter(|(key, _)| {
            !matches!(
                key.as_str(),
                CREATION_TOOL_PROPERTY | CREATION_TOOL_VERSION_PROPERTY | ORIGINAL_FORMAT_PROPERTY
            )
        })
        .collect();

    if extra.is_empty() {
        lines.push(1, &format!("<header {attributes}/>"));
        return;
    }

    lines.push(1, &format!("<header {attributes}>"));
    for (key, value) in extra {
        write_prop(lines, 2, key, value);
    }
    lines.push(1, "</header>");
}

fn write_body(lines: &mut Lines, memory: &TranslationMemory) {
    let mut units = memory
        .units()
        .iter()
        .filter(|unit| unit.variants().len() > 1)
        .peekable();

    if units.peek().is_none() {
        lines.push(1, "<body/>");
        return;
    }

    lines.push(1, "<body>");
    for unit in units {
        write_unit(lines, unit);
    }
    lines.push(1, "</body>");
}

fn write_unit(lines: &mut Lines, unit: &TranslationUnit) {
    let mut open = format!(r#"<tu srclang="{}""#, escape_attribute(unit.source_locale()));
    if !unit.data_type().is_empty() {
        open.push_str(&format!(r#" datatype="{}""#, escape_attribute(unit.data_type())));
    }
    open.push('>');
    lines.push(2, &open);

    for (key, value) in unit.properties() {
        write_prop(lines, 3, key, value);
    }

    for variant in unit.variants() {
        lines.push(3, &format!(r#"<tuv xml:lang="{}">"#, escape_attribute(&variant.locale)));
        lines.push(4, &format!("<seg>{}</seg>", escape_text(&variant.text)));
        lines.push(3, "</tuv>");
    }

    lines.push(2, "</tu>");
}

fn write_prop(lines: &mut Lines, depth: usize, key: &str, value: &str) {
    lines.push(
        depth,
        &format!(
            r#"<prop type="{}">{}</prop>"#,
            escape_attribute(key),
            escape_text(value)
        ),
    );
}
