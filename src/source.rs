// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading and parsing the source file of a call site.
//!
//! The syntax tree returned here lives for one log call only.

use crate::call_site::CallSite;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Finds the file a call site refers to.
///
/// `file!()` is relative to the directory cargo ran from, which is the
/// workspace root for workspace members and the package root otherwise.  A
/// relative path is tried under the manifest directory and each of its
/// ancestors first, so a binary run from inside some other project never
/// picks up that project's files.  The working directory is the fallback, and
/// the path as given is returned when nothing exists, so the read error names
/// what the caller asked for.
pub fn resolve(site: &CallSite) -> PathBuf {
    let file = Path::new(site.file());
    if file.is_absolute() {
        return file.to_path_buf();
    }
    if let Some(manifest_dir) = site.manifest_dir() {
        for dir in Path::new(manifest_dir).ancestors() {
            let candidate = dir.join(file);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    file.to_path_buf()
}

/// Reads and parses the Rust source file at `path`.
pub fn parse_source(path: &Path) -> Result<syn::File> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    syn::parse_file(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
