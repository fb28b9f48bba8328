/*!
 * Common test utilities for the glosshtml test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Glossary used by most tests: two entries, the second mentions the first
pub const SAMPLE_GLOSSARY: &str = "cat\nA small animal.\n\ndog\nA loyal animal, see cat.\n\n";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the sample glossary file in the specified directory
pub fn create_sample_glossary(dir: &Path) -> Result<PathBuf> {
    create_test_file(dir, "glossary.txt", SAMPLE_GLOSSARY)
}

/// Helper to get the absolute path to a test resource
pub fn test_resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("resources");
    path.push(relative_path);
    path
}

/// Reads a generated page
pub fn read_page(dir: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(name))?)
}

/// Returns the text between `<blockquote>` and `</blockquote>` of a term page
pub fn page_body(page: &str) -> &str {
    let start = page.find("<blockquote>\n").map(|i| i + "<blockquote>\n".len()).unwrap_or(0);
    let end = page.find("\n</blockquote>").unwrap_or(page.len());
    &page[start..end]
}

/// Routes library log output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}
