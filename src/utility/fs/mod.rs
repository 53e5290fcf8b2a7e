// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! write_atomic(path, bytes)
//!   NamedTempFile::new_in(parent)
//!     write_all + sync_all
//!     persist(path)   rename over the target
//! ```
//!
//! Readers of `path` see either the previous file or the complete new one.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ManifestResult;

/// Atomically replace the file at `path` with `bytes`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`crate::error::ManifestError::Io`] if the directory cannot be
/// created, the temporary file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> ManifestResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}
