use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::glossary::Glossary;
use crate::page::PageStyle;

// @module: Application controller for glossary publishing

/// Outcome of one publishing run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of term pages written
    pub pages_written: usize,
    /// Location of the generated index
    pub index_path: PathBuf,
    /// Number of load warnings
    pub warnings: usize,
    /// Wall time of the run
    pub elapsed: Duration,
}

/// Main application controller for glossary publishing
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Show a progress bar while writing pages
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;

        Ok(Self {
            config,
            show_progress: true,
        })
    }

    /// Disable the progress bar (tests, non-interactive runs)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Run the main workflow: load the glossary file and publish it to `output_dir`
    pub fn run<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_file: P1, output_dir: P2) -> Result<RunSummary> {
        let start_time = Instant::now();
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Nothing is written if the input cannot be read
        let glossary = Glossary::load(input_file, self.config.duplicate_terms)?;
        info!("Loaded {} term(s) from {:?}", glossary.len(), input_file);

        let mut summary = self.publish(&glossary, output_dir)?;
        summary.elapsed = start_time.elapsed();

        info!(
            "Wrote {} page(s) and index to {:?} in {}.",
            summary.pages_written,
            output_dir,
            Self::format_duration(summary.elapsed)
        );

        Ok(summary)
    }

    /// Write one page per term plus the index into `output_dir`
    pub fn publish<P: AsRef<Path>>(&self, glossary: &Glossary, output_dir: P) -> Result<RunSummary> {
        let start_time = Instant::now();
        let output_dir = output_dir.as_ref();
        let style = PageStyle::from(&self.config);

        let terms = self.publishable_terms(glossary)?;

        FileManager::ensure_dir(output_dir)?;

        if !glossary.warnings().is_empty() {
            warn!("{} line(s) of the input needed attention, see warnings above", glossary.warnings().len());
        }

        let progress_bar = self.create_progress_bar(terms.len() as u64);

        for term in &terms {
            let definition = glossary.require_definition(term)?;
            let page = style.render_term_page(term, definition, glossary);
            let page_path = FileManager::term_page_path(output_dir, term);

            FileManager::write_to_file(&page_path, &page)
                .with_context(|| format!("Failed to write page for term '{}'", term))?;
            debug!("Wrote {:?}", page_path);
            progress_bar.inc(1);
        }

        let index_path = FileManager::index_page_path(output_dir);
        FileManager::write_to_file(&index_path, &style.render_index_page(&terms))
            .context("Failed to write index page")?;
        progress_bar.finish_and_clear();

        Ok(RunSummary {
            pages_written: terms.len(),
            index_path,
            warnings: glossary.warnings().len(),
            elapsed: start_time.elapsed(),
        })
    }

    /// Sorted terms of `glossary`, checked to be usable as page names
    pub fn publishable_terms(&self, glossary: &Glossary) -> Result<Vec<String>, AppError> {
        let terms = glossary.sorted_terms();
        for term in &terms {
            FileManager::validate_page_name(term)?;
        }
        Ok(terms)
    }

    // @creates: Progress bar over term pages, hidden when disabled
    fn create_progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
        }

        let progress_bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        progress_bar.set_style(style);
        progress_bar
    }

    /// Format a duration as seconds or minutes and seconds
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m {}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }
}
