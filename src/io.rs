// File collaborators: document loading and answer output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a UTF-8 document and trim surrounding whitespace.
///
/// A missing or unreadable file is fatal; the error names the path.
pub fn read_document(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read document {}", path.display()))?;
    Ok(raw.trim().to_string())
}

/// Write the formatted score as a single newline-terminated line.
///
/// A single fs::write call: if the destination cannot be opened, nothing
/// is created and no partial content is left behind.
pub fn write_score(path: &Path, formatted: &str) -> Result<()> {
    fs::write(path, format!("{formatted}\n"))
        .with_context(|| format!("cannot write score to {}", path.display()))
}
