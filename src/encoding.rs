//! # Encoding Normalization
//!
//! LabRAM exports are written in Latin-1 (the `°` and `µ` in header lines
//! being the usual culprits). Everything downstream expects UTF-8, so exports
//! are rewritten in place before parsing.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

/// Decode Latin-1 bytes. Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Rewrite a Latin-1 file as UTF-8.
///
/// Files that already decode as UTF-8 are left untouched and `false` is
/// returned, so running this twice is harmless.
pub fn normalize_file<P: AsRef<Path>>(path: P) -> std::io::Result<bool> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    if std::str::from_utf8(&bytes).is_ok() {
        debug!("{} is already UTF-8", path.display());
        return Ok(false);
    }

    let text = decode_latin1(&bytes);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!("Converted {} from Latin-1 to UTF-8", path.display());
    Ok(true)
}
