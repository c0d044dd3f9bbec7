use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::DocumentError;

// @module: Locale file utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @generates: Path of the locale file for a language code
    pub fn locale_path<P: AsRef<Path>>(locales_dir: P, language_code: &str) -> PathBuf {
        locales_dir.as_ref().join(format!("{}.json", language_code))
    }

    // @reads: A locale document from disk
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value, DocumentError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| DocumentError::Read(format!("{:?}: {}", path.as_ref(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DocumentError::Parse(format!("{:?}: {}", path.as_ref(), e)))
    }

    // @writes: A locale document, atomically
    // The document is written to a temp file in the target directory and
    // renamed into place, so a locale file is either complete or absent.
    // Output is pretty-printed UTF-8 with non-ASCII characters unescaped.
    pub fn write_document<P: AsRef<Path>>(path: P, document: &Value) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut json = serde_json::to_string_pretty(document)
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;
        json.push('\n');

        let mut temp_file = NamedTempFile::new_in(dir)
            .map_err(|e| DocumentError::Write(format!("{:?}: {}", path, e)))?;
        temp_file
            .write_all(json.as_bytes())
            .map_err(|e| DocumentError::Write(format!("{:?}: {}", path, e)))?;
        temp_file
            .persist(path)
            .map_err(|e| DocumentError::Write(format!("{:?}: {}", path, e)))?;

        Ok(())
    }

    // @discovers: Target language codes from the locale files on disk
    // Every *.json file in the locales directory is a target, except the
    // source locale and the excluded (hand-maintained) locales. Sorted for
    // a deterministic batch order.
    pub fn discover_target_languages<P: AsRef<Path>>(
        locales_dir: P,
        source_language: &str,
        excluded_locales: &[String],
    ) -> Result<Vec<String>> {
        let locales_dir = locales_dir.as_ref();
        let entries = fs::read_dir(locales_dir)
            .with_context(|| format!("Failed to read locales directory {:?}", locales_dir))?;

        let mut codes = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            if stem == source_language || excluded_locales.iter().any(|e| e == stem) {
                continue;
            }

            codes.push(stem.to_string());
        }

        codes.sort();
        Ok(codes)
    }
}
