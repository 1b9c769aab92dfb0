#![forbid(unsafe_code)]
//! Poetry Typing Command Line Interface

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

use poetry_typing::commands::{execute_generate, GenerateOptions};
use poetry_typing::config::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
use poetry_typing::logging::init_logging;
use poetry_typing::TypingError;

#[derive(Parser)]
#[command(name = "poetry-typing")]
#[command(about = "Generate touch-typing practice prompts from a file of verses")]
#[command(version)]
struct Cli {
    /// Text file with one verse per line
    #[arg(default_value = "verses.txt")]
    verses_file: PathBuf,

    /// Number of prompts to emit (default: all)
    #[arg(long)]
    count: Option<usize>,

    /// Random seed for reproducible numbers and symbols (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Emit all prompts on a single line separated by spaces
    #[arg(long)]
    single_line: bool,

    /// Merge consecutive lines until each reaches this many characters (0 disables)
    #[arg(long)]
    min_line_length: Option<usize>,

    /// Directory for the timestamped result file
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// strftime format for the result file timestamp
    #[arg(long)]
    timestamp_format: Option<String>,

    /// Print prompts to stdout instead of writing a result file
    #[arg(long)]
    stdout: bool,

    /// Override the symbol alphabet
    #[arg(long)]
    symbols: Option<String>,

    /// Never repeat a symbol within a suffix pair
    #[arg(long)]
    distinct_symbols: bool,

    /// Config file path (used only if present)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "POETRY_TYPING_CONFIG")]
    config: PathBuf,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = CliOverrides {
        symbols: cli.symbols,
        min_line_length: cli.min_line_length,
        out_dir: cli.out_dir,
        timestamp_format: cli.timestamp_format,
        single_line: cli.single_line,
        distinct_symbols: cli.distinct_symbols,
        stdout: cli.stdout,
    };
    let config = Config::load_if_exists(&cli.config)?.with_overrides(&overrides);

    let options = GenerateOptions {
        verses_file: cli.verses_file,
        count: cli.count,
        seed: cli.seed,
    };
    execute_generate(options, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("✗").red(), err);
            // Missing input is a usage error, like clap's own
            match err.downcast_ref::<TypingError>() {
                Some(TypingError::VerseFileNotFound(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
