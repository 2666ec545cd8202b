use thiserror::Error;

use crate::tmx::SUPPORTED_VERSION;

/// Errors raised while reading or writing translation memories.
#[derive(Error, Debug)]
pub enum TmxError {
    /// The document declares a TMX version this reader does not understand.
    #[error("unsupported TMX version '{found}', only {} can be read", SUPPORTED_VERSION)]
    UnsupportedVersion { found: String },
    /// The root `<tmx>` element carries no `version` attribute.
    #[error("missing version attribute on the <tmx> root element")]
    MissingVersion,
    /// A structurally required element is absent.
    #[error("missing <{0}> element")]
    MissingElement(&'static str),
    /// The text is not well-formed XML.
    #[error("malformed TMX at byte {offset}: {message}")]
    Malformed { offset: u64, message: String },
    /// A version string is not of the form `<major>[.<minor>]`.
    #[error("invalid TMX version '{0}'")]
    InvalidVersion(String),
    /// Directory creation or file write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TmxError>;
