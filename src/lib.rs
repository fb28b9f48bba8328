/*!
 * # glosshtml - Glossary to HTML publisher
 *
 * A Rust library and CLI that turns a flat text file of term/definition pairs
 * into a static HTML glossary: one page per term plus an index page, with
 * every word that names another term linked to that term's page.
 *
 * ## Input format
 *
 * A non-empty line without a space is a term. The lines after it, up to a
 * blank line or the end of the file, form its definition and are joined with
 * single spaces.
 *
 * ```text
 * cat
 * A small animal.
 *
 * dog
 * A loyal animal, see cat.
 * ```
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `scanner`: Separator classification and word/separator runs
 * - `glossary`: Glossary model and the line-based loader
 * - `linker`: Cross-linking of terms inside definitions
 * - `page`: HTML skeletons for term pages and the index
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod glossary;
pub mod linker;
pub mod page;
pub mod scanner;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::{AppError, GlossaryError};
pub use glossary::{DuplicatePolicy, Glossary};
pub use linker::{Fragment, TermLookup};
pub use page::PageStyle;
