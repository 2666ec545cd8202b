use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Largest resource or TMX input accepted, in bytes.
pub const MAX_INPUT_SIZE: usize = 64 * 1024 * 1024; // 64MB

pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when no path is given.
    pub fn read(file_path: Option<&Path>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    /// Reads every path in order, or stdin once when `paths` is empty.
    ///
    /// Each input is returned with the name it is reported under.
    pub fn read_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<(String, String)>> {
        if paths.is_empty() {
            return Ok(vec![("<stdin>".to_string(), Self::read_stdin()?)]);
        }

        let mut inputs = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            inputs.push((path.display().to_string(), Self::read_file(path)?));
        }
        Ok(inputs)
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size of {} ({}) exceeds maximum allowed size ({})",
                path.display(),
                format_size(size),
                format_size(MAX_INPUT_SIZE)
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({}) exceeds maximum allowed size ({})",
                    format_size(buffer.len()),
                    format_size(MAX_INPUT_SIZE)
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn format_size(bytes: usize) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}
