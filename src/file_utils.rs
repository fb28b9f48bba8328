use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::GlossaryError;
use crate::linker;

// @module: File and directory utilities

// @const: File name of the generated index
pub const INDEX_FILE_NAME: &str = "index.html";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::ensure_dir(parent)?;

        // Write next to the target and rename, so a failed write never leaves a truncated page
        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temporary file in: {:?}", parent))?;
        temp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to file: {:?}", path))?;
        temp.persist(path)
            .with_context(|| format!("Failed to write to file: {:?}", path))?;

        Ok(())
    }

    /// Check that `term` can be published as `<term>.html` next to the index
    pub fn validate_page_name(term: &str) -> Result<(), GlossaryError> {
        let reason = if term == "." || term == ".." {
            Some("not a valid file name")
        } else if term.contains(['/', '\\']) {
            Some("contains a path separator")
        } else if term.contains('\0') {
            Some("contains a NUL character")
        } else if linker::page_file_name(term) == INDEX_FILE_NAME {
            Some("collides with the index page")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(GlossaryError::InvalidPageName {
                term: term.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    // @generates: Output path of a term page
    pub fn term_page_path<P: AsRef<Path>>(output_dir: P, term: &str) -> PathBuf {
        output_dir.as_ref().join(linker::page_file_name(term))
    }

    // @generates: Output path of the index page
    pub fn index_page_path<P: AsRef<Path>>(output_dir: P) -> PathBuf {
        output_dir.as_ref().join(INDEX_FILE_NAME)
    }
}
