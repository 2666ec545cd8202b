//! TMX (Translation Memory eXchange) reading and writing.
//!
//! The writer produces a fixed, byte-for-byte stable layout; the reader
//! accepts that layout and the usual variations of it (other indentation,
//! either attribute quote, comments, CDATA, inline markup inside `<seg>`).

mod reader;
mod version;
mod writer;
mod xml;

pub use reader::deserialize;
pub use version::TmxVersion;
pub use writer::serialize;

/// The only TMX version that can be read back.
pub const SUPPORTED_VERSION: &str = "1.4";
