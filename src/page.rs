use std::fmt::Write;

use crate::app_config::Config;
use crate::linker::{self, TermLookup};

// @module: HTML page assembly for term pages and the index

/// Presentation settings shared by every page of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStyle {
    /// Title and heading of the index page
    pub index_title: String,
    /// Font color of the term heading
    pub heading_color: String,
    /// Escape HTML-significant characters in text
    pub escape_html: bool,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            index_title: "Glossary".to_string(),
            heading_color: "red".to_string(),
            escape_html: false,
        }
    }
}

impl From<&Config> for PageStyle {
    fn from(config: &Config) -> Self {
        Self {
            index_title: config.index_title.clone(),
            heading_color: config.heading_color.clone(),
            escape_html: config.escape_html,
        }
    }
}

impl PageStyle {
    // @returns: Text ready for insertion into the page
    fn text(&self, text: &str) -> String {
        if self.escape_html {
            linker::escape_html(text)
        } else {
            text.to_string()
        }
    }

    /// Render the page for one term; `terms` decides which words are linked
    pub fn render_term_page<L>(&self, term: &str, definition: &str, terms: &L) -> String
    where
        L: TermLookup + ?Sized,
    {
        let label = self.text(term);
        let body = linker::render_html(definition, terms, self.escape_html);

        let mut page = String::with_capacity(256 + definition.len());
        page.push_str("<html>\n<head>\n");
        let _ = writeln!(page, "<title>{}</title>", label);
        page.push_str("</head>\n<body>\n");
        page.push_str("<h2>\n<b>\n<i>\n");
        let _ = writeln!(page, "<font color=\"{}\">{}</font>", self.heading_color, label);
        page.push_str("</i>\n</b>\n</h2>\n");
        page.push_str("<blockquote>\n");
        page.push_str(&body);
        page.push('\n');
        page.push_str("</blockquote>\n");
        page.push_str("<hr>\n");
        page.push_str("<p>\nReturn to\n<a href=\"index.html\">index</a>.\n</p>\n");
        page.push_str("</body>\n</html>\n");
        page
    }

    /// Render the index page listing `terms` in the order given
    pub fn render_index_page<S: AsRef<str>>(&self, terms: &[S]) -> String {
        let title = self.text(&self.index_title);

        let mut page = String::with_capacity(128 + terms.len() * 48);
        page.push_str("<html>\n<head>\n");
        let _ = writeln!(page, "<title>{}</title>", title);
        page.push_str("</head>\n<body>\n");
        let _ = writeln!(page, "<h2>{}</h2>", title);
        page.push_str("<hr>\n<h3>Index</h3>\n<ul>\n");
        for term in terms {
            let term = term.as_ref();
            let _ = writeln!(
                page,
                "<li><a href=\"{}\">{}</a></li>",
                linker::page_href(term, self.escape_html),
                self.text(term)
            );
        }
        page.push_str("</ul>\n</body>\n</html>\n");
        page
    }
}
