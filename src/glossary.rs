use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::errors::GlossaryError;
use crate::file_utils::FileManager;

// @module: Glossary model and loader for the term/definition text format

/// What to do when a term is defined more than once
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the term once, in its first position, with the last definition
    #[default]
    LastWins,
    /// Fail the load
    Reject,
}

/// Something the loader accepted but could not use as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A line that neither starts an entry nor continues a definition
    SkippedLine(String),
    /// A repeated term whose earlier definition was replaced
    DuplicateTerm(String),
}

/// A load warning tied to its 1-based input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub line: usize,
    pub kind: WarningKind,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            WarningKind::SkippedLine(text) => {
                write!(f, "line {}: skipped line outside any entry: {:?}", self.line, text)
            }
            WarningKind::DuplicateTerm(term) => {
                write!(f, "line {}: term '{}' redefined, keeping the later definition", self.line, term)
            }
        }
    }
}

/// Returns true if `line` starts a new glossary entry
pub fn is_term_line(line: &str) -> bool {
    !line.is_empty() && !line.contains(' ')
}

// @struct: Entry being accumulated by the loader
struct PendingEntry<'a> {
    term: &'a str,
    line: usize,
    parts: Vec<&'a str>,
}

/// The set of terms and their definitions, built from a single pass over the input.
///
/// `terms` and `definitions` always hold exactly the same keys.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    terms: Vec<String>,
    definitions: HashMap<String, String>,
    warnings: Vec<LoadWarning>,
}

impl Glossary {
    /// Create an empty glossary
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a glossary file from disk
    pub fn load<P: AsRef<Path>>(path: P, policy: DuplicatePolicy) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let glossary = Self::parse_str(&content, policy)
            .with_context(|| format!("Failed to load glossary: {:?}", path))?;

        debug!("Loaded {} term(s) from {:?}", glossary.len(), path);
        Ok(glossary)
    }

    /// Parse glossary text; accepts both `\n` and `\r\n` line endings
    pub fn parse_str(content: &str, policy: DuplicatePolicy) -> Result<Self, GlossaryError> {
        Self::from_lines(content.lines(), policy)
    }

    /// Build a glossary from input lines.
    ///
    /// A non-empty line without a space starts an entry. The lines after it,
    /// up to a blank line or the end of input, are joined with single spaces to
    /// form its definition. Any other line is skipped and recorded as a warning.
    pub fn from_lines<'a, I>(lines: I, policy: DuplicatePolicy) -> Result<Self, GlossaryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut glossary = Glossary::new();
        let mut pending: Option<PendingEntry<'a>> = None;

        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;

            match pending.take() {
                Some(entry) if line.is_empty() => glossary.insert_entry(entry, policy)?,
                Some(mut entry) => {
                    entry.parts.push(line);
                    pending = Some(entry);
                }
                None if is_term_line(line) => {
                    pending = Some(PendingEntry {
                        term: line,
                        line: line_no,
                        parts: Vec::new(),
                    });
                }
                None if line.is_empty() => {}
                None => {
                    let warning = LoadWarning {
                        line: line_no,
                        kind: WarningKind::SkippedLine(line.to_string()),
                    };
                    warn!("{}", warning);
                    glossary.warnings.push(warning);
                }
            }
        }

        // A term at end of input without a blank line still counts
        if let Some(entry) = pending {
            glossary.insert_entry(entry, policy)?;
        }

        Ok(glossary)
    }

    // @adds: One finished entry, applying the duplicate policy
    fn insert_entry(&mut self, entry: PendingEntry<'_>, policy: DuplicatePolicy) -> Result<(), GlossaryError> {
        let definition = entry.parts.join(" ");

        if let Some(existing) = self.definitions.get_mut(entry.term) {
            return match policy {
                DuplicatePolicy::Reject => Err(GlossaryError::DuplicateTerm {
                    term: entry.term.to_string(),
                    line: entry.line,
                }),
                DuplicatePolicy::LastWins => {
                    *existing = definition;
                    let warning = LoadWarning {
                        line: entry.line,
                        kind: WarningKind::DuplicateTerm(entry.term.to_string()),
                    };
                    warn!("{}", warning);
                    self.warnings.push(warning);
                    Ok(())
                }
            };
        }

        self.terms.push(entry.term.to_string());
        self.definitions.insert(entry.term.to_string(), definition);
        Ok(())
    }

    /// Terms in the order they first appeared in the input
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms in code-point order
    pub fn sorted_terms(&self) -> Vec<String> {
        let mut terms = self.terms.clone();
        // UTF-8 byte order is code-point order
        terms.sort();
        terms
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    /// Definition lookup for a term taken from this glossary's own term list.
    ///
    /// A miss means the two views went out of sync and is reported as
    /// `GlossaryError::MissingDefinition`.
    pub fn require_definition(&self, term: &str) -> Result<&str, GlossaryError> {
        self.definition(term)
            .ok_or_else(|| GlossaryError::MissingDefinition(term.to_string()))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Warnings collected while loading
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}
