//! # tmx - Translation memory builder
//!
//! `tmx` consolidates localizable resources extracted from source files
//! into a deduplicated translation memory and writes it as TMX 1.4.
//!
//! Each resource record is a plain string, an ordered string array, or a
//! set of plural forms in a source locale, optionally with a translation
//! into one target locale. Records that share source text merge into one
//! translation unit holding every known rendering of that text. Strings can
//! be kept whole or split into sentences first, so translations are reused
//! at sentence level.
//!
//! ## Quick Start
//!
//! ```bash
//! # Build a memory from extracted records
//! tmx build strings.de.json strings.ja.json -o strings.tmx
//!
//! # Split into sentences before consolidating
//! tmx build --segmentation sentence strings.*.json > strings.tmx
//!
//! # Combine memories and summarize the result
//! tmx merge web.tmx mobile.tmx -o all.tmx
//! tmx inspect all.tmx
//! ```
//!
//! ## Library use
//!
//! ```
//! use tmx_cli::memory::TranslationMemory;
//! use tmx_cli::resource::{Resource, ResourceValue};
//!
//! let mut memory = TranslationMemory::default();
//! memory.add_resource(
//!     &Resource::new(
//!         ResourceValue::String {
//!             source: "Open".to_string(),
//!             target: Some("Öffnen".to_string()),
//!         },
//!         "en-US",
//!     )
//!     .with_target_locale("de-DE"),
//! );
//!
//! let text = memory.serialize();
//! let restored = TranslationMemory::deserialize(&text).unwrap();
//! assert_eq!(restored.len(), 1);
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tmx/config.toml`:
//!
//! ```toml
//! [tmx]
//! source_locale = "en-US"
//! segmentation = "sentence"
//! output = "out/strings.tmx"
//!
//! [header]
//! creationtool = "my-pipeline"
//! originalFormat = "json"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Errors raised by the TMX reader and memory writer.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Locale tag helpers.
pub mod locale;

/// Translation units and the memory that consolidates them.
pub mod memory;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Resource records as produced by string extractors.
pub mod resource;

/// Locale-aware segmentation of strings into sentences.
pub mod segment;

/// TMX serialization and deserialization.
pub mod tmx;

/// Terminal UI components (colors).
pub mod ui;
