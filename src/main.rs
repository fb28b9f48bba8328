// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use glosshtml::app_config::{Config, LogLevel};
use glosshtml::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for glosshtml
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// glosshtml - Glossary to HTML publisher
///
/// Reads a text file of terms and definitions and writes one HTML page per
/// term plus an index page, linking terms that appear in other definitions.
#[derive(Parser, Debug)]
#[command(name = "glosshtml")]
#[command(version)]
#[command(about = "Publish a term/definition text file as a linked HTML glossary")]
#[command(long_about = "glosshtml turns a text file of terms and definitions into a static HTML glossary.

INPUT FORMAT:
    A non-empty line without spaces is a term. The following lines, up to a
    blank line, are its definition.

EXAMPLES:
    glosshtml terms.txt site/                  # Publish terms.txt into site/
    glosshtml                                  # Prompt for input file and output folder
    glosshtml --escape-html terms.txt site/    # Escape HTML characters in text
    glosshtml --log-level debug terms.txt out/ # Log every page written
    glosshtml completions bash > glosshtml.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Glossary text file to read (prompted for if omitted)
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Folder to write the HTML files to (prompted for if omitted)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Escape HTML-significant characters in terms and definitions
    #[arg(long)]
    escape_html: bool,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger, filtering at `level` until the max level is changed
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        level_enabled(metadata.level(), log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// @returns: Whether a record at `level` passes the `max` filter
fn level_enabled(level: Level, max: LevelFilter) -> bool {
    level <= max
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "glosshtml", &mut std::io::stdout());
        return Ok(());
    }

    // Apply the command line level first so config loading is logged at that level
    let cli_log_level: Option<LogLevel> = cli.log_level.map(Into::into);
    if let Some(level) = cli_log_level {
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    if let Some(level) = cli_log_level {
        config.log_level = level;
    }
    if cli.escape_html {
        config.escape_html = true;
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let input_file = match cli.input_file {
        Some(path) => path,
        None => prompt_path(&mut input, "Input file (with terms and definitions): ")?,
    };
    let output_dir = match cli.output_dir {
        Some(path) => path,
        None => prompt_path(&mut input, "Output folder for HTML files: ")?,
    };

    let summary = controller.run(&input_file, &output_dir)?;
    info!("Success: {:?}", summary.index_path);

    Ok(())
}

// @prompts: One path on stdout, read from the given input
fn prompt_path<R: BufRead>(input: &mut R, prompt: &str) -> Result<PathBuf> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", prompt).context("Failed to write prompt")?;
    stdout.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    let answer = line.trim_end_matches(['\r', '\n']);
    if read == 0 || answer.is_empty() {
        return Err(anyhow!("No path given for: {}", prompt.trim_end_matches([':', ' '])));
    }

    Ok(PathBuf::from(answer))
}
