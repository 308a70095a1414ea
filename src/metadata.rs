// src/metadata.rs
//! Extraction of `@VERSION:{...}` and `@DESCRIPTION:{...}` tags from BKLML
//! file content.

use crate::error::{AppError, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const VERSION_FALLBACK: &str = "Version not found";
pub const DESCRIPTION_FALLBACK: &str = "Description not found";

/// Metadata extracted from a single BKLML file.
///
/// `error` is set only when the file could not be read or decoded; the
/// version/description fields then keep their fallback placeholders.
#[derive(Debug, Clone, Serialize)]
pub struct BklmlInfo {
    pub version: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for BklmlInfo {
    fn default() -> Self {
        Self {
            version: VERSION_FALLBACK.to_string(),
            description: DESCRIPTION_FALLBACK.to_string(),
            error: None,
        }
    }
}

/// Read `path` in full and extract both tags.
///
/// Never fails: a read/decode error is captured into the `error` field so a
/// single bad file cannot abort the scan of its siblings.
pub fn extract(path: &Path) -> BklmlInfo {
    let mut info = BklmlInfo::default();

    match read_content(path) {
        Ok(content) => {
            if let Some(version) = find_version(&content) {
                info.version = version;
            }
            if let Some(description) = find_description(&content) {
                info.description = description;
            }
        }
        Err(e) => info.error = Some(e.to_string()),
    }

    info
}

fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// First `@VERSION:{...}` match wins. The value is restricted to digits and
/// dots; anything else fails to match and leaves the fallback in place.
fn find_version(content: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"@VERSION:\{([0-9.]+)\}").unwrap());
    re.captures(content).map(|caps| caps[1].to_string())
}

/// First `@DESCRIPTION:{...}` match wins. Captures everything up to the
/// first closing brace, trimmed of surrounding whitespace.
fn find_description(content: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"@DESCRIPTION:\{([^}]+)\}").unwrap());
    re.captures(content).map(|caps| caps[1].trim().to_string())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    proptest! {
        /// Any dotted numeric version round-trips through the tag.
        #[test]
        fn version_roundtrip(v in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}") {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "@VERSION:{{{v}}}").unwrap();
            let info = extract(file.path());
            prop_assert_eq!(info.version, v);
        }

        /// Any brace-free description round-trips modulo surrounding whitespace.
        #[test]
        fn description_roundtrip(d in "[a-zA-Z0-9 _.,-]{1,60}") {
            prop_assume!(!d.trim().is_empty());
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "@DESCRIPTION:{{{d}}}").unwrap();
            let info = extract(file.path());
            prop_assert_eq!(info.description, d.trim());
        }

        /// Arbitrary tag-free text always yields both fallbacks.
        #[test]
        fn tag_free_text_yields_fallbacks(text in "[a-zA-Z0-9 \\n]{0,200}") {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(text.as_bytes()).unwrap();
            let info = extract(file.path());
            prop_assert_eq!(info.version, VERSION_FALLBACK);
            prop_assert_eq!(info.description, DESCRIPTION_FALLBACK);
        }
    }
}
