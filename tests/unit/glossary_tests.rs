/*!
 * Tests for the glossary loader
 */

use anyhow::Result;
use std::collections::HashSet;
use glosshtml::errors::GlossaryError;
use glosshtml::glossary::{is_term_line, DuplicatePolicy, Glossary, WarningKind};
use crate::common;

/// Test the scenario with two terms, one mentioning the other
#[test]
fn test_parse_str_withSampleGlossary_shouldLoadBothTerms() -> Result<()> {
    let glossary = Glossary::parse_str(common::SAMPLE_GLOSSARY, DuplicatePolicy::LastWins)?;

    assert_eq!(glossary.len(), 2);
    assert_eq!(glossary.sorted_terms(), vec!["cat", "dog"]);
    assert_eq!(glossary.definition("dog"), Some("A loyal animal, see cat."));

    Ok(())
}

/// Test term line detection
#[test]
fn test_is_term_line_withVariousLines_shouldDetectTerms() {
    assert!(is_term_line("cat"));
    assert!(is_term_line("multi-word-term"));
    assert!(is_term_line("Tab\tinside"));
    assert!(!is_term_line(""));
    assert!(!is_term_line("two words"));
    assert!(!is_term_line(" leading"));
}

/// Test loading from disk
#[test]
fn test_load_withExistingFile_shouldParseContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_sample_glossary(temp_dir.path())?;

    let glossary = Glossary::load(&path, DuplicatePolicy::default())?;
    assert_eq!(glossary.terms(), &["cat".to_string(), "dog".to_string()]);

    Ok(())
}

/// Test loading a missing file
#[test]
fn test_load_withMissingFile_shouldFail() {
    let result = Glossary::load("./definitely_missing_glossary_12345.txt", DuplicatePolicy::default());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read file"));
}

/// Test that a file that is not UTF-8 is rejected instead of guessed at
#[test]
fn test_load_withLatin1File_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.txt");
    std::fs::write(&path, b"caf\xe9\nA drink.\n")?;

    let result = Glossary::load(&path, DuplicatePolicy::default());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read file"));
    Ok(())
}

/// Test that a duplicate term is rejected with its line number
#[test]
fn test_load_withDuplicateAndRejectPolicy_shouldReportLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "dup.txt", "a\none\n\nb\ntwo\n\na\nthree\n")?;

    let error = Glossary::load(&path, DuplicatePolicy::Reject).unwrap_err();
    assert_eq!(
        error.downcast_ref::<GlossaryError>(),
        Some(&GlossaryError::DuplicateTerm { term: "a".to_string(), line: 7 })
    );

    Ok(())
}

/// Test several blank lines between entries
#[test]
fn test_parse_str_withExtraBlankLines_shouldIgnoreThem() -> Result<()> {
    let glossary = Glossary::parse_str("\n\ncat\nAnimal.\n\n\n\ndog\nPet.\n\n\n", DuplicatePolicy::LastWins)?;
    assert_eq!(glossary.terms(), &["cat".to_string(), "dog".to_string()]);
    assert!(glossary.warnings().is_empty());
    Ok(())
}

/// Test that a multi-word line where a term is expected is skipped with a warning
#[test]
fn test_parse_str_withMultiWordLineOutsideEntry_shouldWarn() -> Result<()> {
    let glossary = Glossary::parse_str("cat\nAnimal.\n\nsome stray words\n\ndog\nPet.\n", DuplicatePolicy::LastWins)?;

    assert_eq!(glossary.len(), 2);
    assert_eq!(glossary.warnings().len(), 1);
    assert_eq!(glossary.warnings()[0].line, 4);
    assert_eq!(
        glossary.warnings()[0].kind,
        WarningKind::SkippedLine("some stray words".to_string())
    );
    assert!(glossary.warnings()[0].to_string().contains("line 4"));

    Ok(())
}

/// Test that the term list and the definition lookup agree
#[test]
fn test_parse_str_withResourceFile_shouldKeepViewsConsistent() -> Result<()> {
    let content = std::fs::read_to_string(common::test_resource_path("computing.txt"))?;
    let glossary = Glossary::parse_str(&content, DuplicatePolicy::LastWins)?;

    let listed: HashSet<&String> = glossary.terms().iter().collect();
    assert_eq!(listed.len(), glossary.len());
    for term in glossary.terms() {
        assert!(glossary.contains(term));
        assert!(glossary.require_definition(term).is_ok());
    }
    assert_eq!(
        glossary.sorted_terms(),
        vec!["compiler", "lexer", "parser", "scanner", "token"]
    );

    Ok(())
}

/// Test that sorting already sorted terms keeps them unchanged
#[test]
fn test_sorted_terms_withSortedInput_shouldKeepOrder() -> Result<()> {
    let glossary = Glossary::parse_str("a\n1\n\nb\n2\n\nc\n3\n", DuplicatePolicy::LastWins)?;
    assert_eq!(glossary.sorted_terms(), glossary.terms().to_vec());
    Ok(())
}
