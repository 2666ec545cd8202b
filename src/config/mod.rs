//! Configuration file management.

mod manager;

pub use manager::{ConfigFile, ConfigManager, ResolveOptions, TmxConfig, resolve_config};
