/*!
 * Cross-linking of glossary terms inside definition text.
 *
 * A definition is split into separator and word runs. Separator runs are
 * copied unchanged. A word run that is exactly equal (case-sensitive) to a
 * known term becomes a link to that term's page. Every other word run is
 * copied unchanged. A term that only appears inside a longer word is never
 * linked.
 */

use std::collections::{BTreeSet, HashSet};
use std::fmt::Write;

use crate::glossary::Glossary;
use crate::scanner::{self, RunKind};

/// Membership test used to decide whether a word run becomes a link
pub trait TermLookup {
    fn contains_term(&self, word: &str) -> bool;
}

impl TermLookup for Glossary {
    fn contains_term(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl TermLookup for HashSet<String> {
    fn contains_term(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl TermLookup for BTreeSet<String> {
    fn contains_term(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl TermLookup for [&str] {
    fn contains_term(&self, word: &str) -> bool {
        self.iter().any(|term| *term == word)
    }
}

impl<T: TermLookup + ?Sized> TermLookup for &T {
    fn contains_term(&self, word: &str) -> bool {
        (**self).contains_term(word)
    }
}

/// One piece of rendered definition text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Separator or unmatched word, emitted as-is
    Text(&'a str),
    /// Word run that names a glossary term
    Link(&'a str),
}

impl<'a> Fragment<'a> {
    /// The source text this fragment covers
    pub fn raw(&self) -> &'a str {
        match *self {
            Fragment::Text(text) | Fragment::Link(text) => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Fragment::Link(_))
    }

    /// Append this fragment's HTML to `out`
    pub fn write_html(&self, out: &mut String, escape: bool) {
        match self {
            Fragment::Text(text) => push_text(out, text, escape),
            Fragment::Link(term) => {
                // Writing to a String cannot fail
                let _ = write!(out, "<a href=\"{}\">", page_href(term, escape));
                push_text(out, term, escape);
                out.push_str("</a>");
            }
        }
    }
}

/// File name of the page for `term`
pub fn page_file_name(term: &str) -> String {
    format!("{}.html", term)
}

/// Value of the `href` attribute linking to `term`'s page.
///
/// A `"` would end the attribute, so it is always written as `&quot;`. With
/// `escape` every HTML-significant character is escaped; browsers decode the
/// entities, so the link still resolves to `page_file_name(term)`.
pub fn page_href(term: &str, escape: bool) -> String {
    let file_name = page_file_name(term);
    if escape {
        escape_html(&file_name)
    } else {
        file_name.replace('"', "&quot;")
    }
}

/// Split `definition` into fragments, marking word runs found in `terms`
pub fn render<'a, L>(definition: &'a str, terms: &L) -> Vec<Fragment<'a>>
where
    L: TermLookup + ?Sized,
{
    scanner::runs(definition)
        .map(|run| match run.kind {
            RunKind::Word if terms.contains_term(run.text) => Fragment::Link(run.text),
            _ => Fragment::Text(run.text),
        })
        .collect()
}

/// Render `definition` straight to HTML
pub fn render_html<L>(definition: &str, terms: &L, escape: bool) -> String
where
    L: TermLookup + ?Sized,
{
    let mut out = String::with_capacity(definition.len() + 32);
    for fragment in render(definition, terms) {
        fragment.write_html(&mut out, escape);
    }
    out
}

/// Escape the characters that are significant in HTML text and attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_text(&mut out, text, true);
    out
}

// @appends: Text, optionally escaped
fn push_text(out: &mut String, text: &str, escape: bool) {
    if !escape {
        out.push_str(text);
        return;
    }
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
