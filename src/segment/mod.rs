//! Splitting strings into translation segments.
//!
//! A segment is the unit of text a translation memory stores. In paragraph
//! mode a whole string is one segment; in sentence mode the string is split
//! on locale-aware sentence boundaries.

mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use rules::{SentenceRules, rules_for};

/// How strings are cut into segments before they become translation units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segmentation {
    /// Each string is a single segment.
    #[default]
    Paragraph,
    /// Each sentence of a string is its own segment.
    Sentence,
}

impl Segmentation {
    /// Name used in the TMX header's `segtype` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Sentence => "sentence",
        }
    }

    /// Parses a style name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "paragraph" => Some(Self::Paragraph),
            "sentence" => Some(Self::Sentence),
            _ => None,
        }
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits `text` into segments for `locale` according to `style`.
///
/// Empty text yields no segments. Sentence segments are trimmed and keep
/// their own terminating punctuation.
pub fn segment(text: &str, locale: &str, style: Segmentation) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    match style {
        Segmentation::Paragraph => vec![text.to_string()],
        Segmentation::Sentence => split_sentences(text, &rules_for(locale)),
    }
}

/// Terminators that end a sentence only when followed by whitespace.
const fn is_spaced_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Full-width terminators end a sentence immediately.
const fn is_full_width_terminator(c: char) -> bool {
    matches!(c, '。' | '！' | '？' | '｡')
}

/// Closing punctuation that belongs to the sentence it follows.
const fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '»' | '”' | '’' | '」' | '』' | '）' | '】'
    )
}

fn split_sentences(text: &str, rules: &SentenceRules) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if !is_spaced_terminator(c) && !is_full_width_terminator(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut full_width = is_full_width_terminator(c);
        while let Some(&(_, next)) = chars.get(j) {
            if is_full_width_terminator(next) {
                full_width = true;
            } else if !is_spaced_terminator(next) {
                break;
            }
            j += 1;
        }
        let single_period = c == '.' && j == i + 1;
        while chars.get(j).is_some_and(|&(_, next)| is_closer(next)) {
            j += 1;
        }

        let end = chars.get(j).map_or(text.len(), |&(o, _)| o);
        let boundary = full_width
            || (chars.get(j).is_none_or(|&(_, next)| next.is_whitespace())
                && !(single_period && rules.suppresses(token_before(text, start, offset))));

        if boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Returns the whitespace-delimited word ending in the period at `dot`.
fn token_before(text: &str, start: usize, dot: usize) -> &str {
    text[start..=dot]
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .trim_start_matches(['(', '[', '"', '\'', '«', '“', '‘'])
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}
