use once_cell::sync::Lazy;
use std::collections::HashSet;

// @module: Word/separator scanning for definition text

// @const: Separator characters as written in the glossary format (the repeated space is harmless)
const SEPARATOR_CHARS: &str = " \t, ";

// @const: Separator set, built once per process
static SEPARATOR_SET: Lazy<HashSet<char>> = Lazy::new(|| SEPARATOR_CHARS.chars().collect());

/// Returns true if `c` separates words in a definition (space, tab or comma)
pub fn is_separator(c: char) -> bool {
    SEPARATOR_SET.contains(&c)
}

/// Classification of a run of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Only separator characters
    Separator,
    /// Only non-separator characters
    Word,
}

impl RunKind {
    // @returns: Kind of a single character
    fn of(c: char) -> Self {
        if is_separator(c) {
            RunKind::Separator
        } else {
            RunKind::Word
        }
    }
}

/// A maximal run of same-class characters borrowed from the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub kind: RunKind,
}

impl<'a> Run<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == RunKind::Word
    }

    /// Length of the run in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns the maximal run starting at byte offset `position`.
///
/// The class of the run is decided by the character at `position` alone; the
/// run extends until the first character of the other class or the end of
/// `text`. The result is never empty.
///
/// # Panics
///
/// Panics if `position >= text.len()` or `position` is not a char boundary.
pub fn next_run(text: &str, position: usize) -> Run<'_> {
    assert!(
        position < text.len(),
        "scan position {} out of range for text of length {}",
        position,
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "scan position {} is not a char boundary",
        position
    );

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    // Non-empty by the assertions above
    let kind = match chars.next() {
        Some((_, first)) => RunKind::of(first),
        None => unreachable!("non-empty remainder"),
    };

    let end = chars
        .find(|&(_, c)| RunKind::of(c) != kind)
        .map(|(offset, _)| offset)
        .unwrap_or(rest.len());

    Run {
        text: &rest[..end],
        kind,
    }
}

/// Iterator over the consecutive runs of a string
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let run = next_run(self.text, self.position);
        self.position += run.len();
        Some(run)
    }
}

/// Splits `text` into alternating separator and word runs, start to end
pub fn runs(text: &str) -> Runs<'_> {
    Runs { text, position: 0 }
}
