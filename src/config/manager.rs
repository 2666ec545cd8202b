use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::locale::parse_locale;
use crate::memory::MemoryOptions;
use crate::paths;
use crate::segment::Segmentation;
use crate::tmx::TmxVersion;

/// Default settings in the `[tmx]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TmxConfig {
    /// Source locale resources must be in.
    pub source_locale: Option<String>,
    /// Segmentation style (`paragraph` or `sentence`).
    pub segmentation: Option<String>,
    /// TMX version to emit.
    pub version: Option<String>,
    /// Default output path, relative to the output directory.
    pub output: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tmx/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub tmx: TmxConfig,
    /// Header properties written into every memory.
    #[serde(default)]
    pub header: BTreeMap<String, String>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source locale override.
    pub source_locale: Option<String>,
    /// Segmentation style override.
    pub segmentation: Option<String>,
    /// TMX version override.
    pub version: Option<String>,
    /// Output path override.
    pub output: Option<PathBuf>,
}

/// Resolves memory options by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values; anything left unset
/// falls back to the memory's built-in defaults.
///
/// # Errors
///
/// Returns an error if the resolved locale, segmentation style or version
/// is not well-formed.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<MemoryOptions> {
    let file = &config_file.tmx;

    let source_locale = options
        .source_locale
        .as_ref()
        .or(file.source_locale.as_ref())
        .cloned();
    if let Some(locale) = &source_locale {
        parse_locale(locale)?;
    }

    let segmentation = options
        .segmentation
        .as_ref()
        .or(file.segmentation.as_ref())
        .cloned();
    if let Some(style) = &segmentation
        && Segmentation::parse(style).is_none()
    {
        bail!(
            "Unknown segmentation style: '{style}'\n\n\
             Expected one of: {}, {}",
            Segmentation::Paragraph,
            Segmentation::Sentence
        );
    }

    let version = options.version.as_ref().or(file.version.as_ref()).cloned();
    if let Some(raw) = &version {
        raw.parse::<TmxVersion>()
            .with_context(|| "Invalid 'version' setting")?;
    }

    Ok(MemoryOptions {
        source_locale,
        segmentation,
        version,
        properties: config_file.header.clone(),
        path: options.output.as_ref().or(file.output.as_ref()).cloned(),
    })
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tmx/config.toml`
    /// or `~/.config/tmx/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "No config file, using defaults");
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|err| {
            tracing::warn!("{err:#}, using defaults");
            ConfigFile::default()
        })
    }
}
