// src/filesystem.rs
use crate::error::{AppError, Result};
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Extension identifying BKLML markup files.
pub const BKLML_EXT: &str = "bklml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Bklml,
}

/// A file discovered by the scan. Discarded after output; carries no
/// identity beyond its path.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Sequential directory walk collecting BKLML files under `root`.
///
/// The walk is a plain filesystem enumeration: hidden files are visited and
/// ignore files have no effect. With `recursive` off only the root's direct
/// children are considered. Entries that fail to read mid-walk (vanished
/// files, unreadable subtrees) are skipped without aborting the traversal.
///
/// # Errors
/// Returns `AppError::RootNotFound` if `root` does not exist; this is
/// detected before any traversal.
pub fn scan(root: &Path, recursive: bool) -> Result<Vec<FileRecord>> {
    if !root.exists() {
        return Err(AppError::RootNotFound(root.to_path_buf()));
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    if !recursive {
        builder.max_depth(Some(1));
    }

    let records = builder
        .build()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == BKLML_EXT))
        .map(|entry| FileRecord {
            path: entry.into_path(),
            kind: FileKind::Bklml,
        })
        .collect();

    Ok(records)
}
