//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod chat;
pub mod generate;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod watch;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read all of stdin, enforcing the same size limit as files.
pub fn read_input_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_bounded(std::io::stdin().lock(), max_bytes, "stdin")
}

fn read_bounded<R: Read>(
    mut reader: R,
    max_bytes: Option<usize>,
    label: &str,
) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {label}"))?;
            if content.len() > max {
                anyhow::bail!("input too large: {label} exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {label}"))?;
        }
    }
    Ok(content)
}
