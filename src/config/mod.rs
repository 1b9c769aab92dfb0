//! @acp:module "Configuration"
//! @acp:summary "Run configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config
//!
//! Settings come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. Optional JSON config file (`.poetry-typing.json`)
//! 3. CLI flags (applied by the command layer)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TypingError};
use crate::output::{Delivery, DEFAULT_OUT_DIR, DEFAULT_TIMESTAMP_FORMAT};
use crate::pipeline::{JoinMode, PipelineOptions, DEFAULT_MIN_LINE_LENGTH};
use crate::prompt::{PromptGenerator, SymbolPairMode};
use crate::symbols::{SymbolAlphabet, DEFAULT_SYMBOLS};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".poetry-typing.json";

fn default_symbols() -> String {
    DEFAULT_SYMBOLS.to_string()
}

fn default_min_line_length() -> usize {
    DEFAULT_MIN_LINE_LENGTH
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Characters eligible for suffixes and joiners
    #[serde(default = "default_symbols")]
    pub symbols: String,

    /// Minimum chunk length for line concatenation (0 disables it)
    #[serde(default = "default_min_line_length")]
    pub min_line_length: usize,

    /// Directory for timestamped result files
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// strftime pattern for the result file timestamp
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// How prompts are joined
    #[serde(default)]
    pub join: JoinMode,

    /// How suffix symbol pairs are sampled
    #[serde(default)]
    pub symbol_pair: SymbolPairMode,

    /// Print the document instead of writing a result file
    #[serde(default)]
    pub stdout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            min_line_length: default_min_line_length(),
            out_dir: default_out_dir(),
            timestamp_format: default_timestamp_format(),
            join: JoinMode::default(),
            symbol_pair: SymbolPairMode::default(),
            stdout: false,
        }
    }
}

/// CLI overrides for run configuration
///
/// `None` and `false` leave the loaded value untouched.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub symbols: Option<String>,
    pub min_line_length: Option<usize>,
    pub out_dir: Option<PathBuf>,
    pub timestamp_format: Option<String>,
    pub single_line: bool,
    pub distinct_symbols: bool,
    pub stdout: bool,
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |message: String| TypingError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a file as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply CLI overrides on top of this config
    pub fn with_overrides(mut self, cli: &CliOverrides) -> Self {
        if let Some(symbols) = &cli.symbols {
            self.symbols = symbols.clone();
        }
        if let Some(min_line_length) = cli.min_line_length {
            self.min_line_length = min_line_length;
        }
        if let Some(out_dir) = &cli.out_dir {
            self.out_dir = out_dir.clone();
        }
        if let Some(format) = &cli.timestamp_format {
            self.timestamp_format = format.clone();
        }
        if cli.single_line {
            self.join = JoinMode::SingleLine;
        }
        if cli.distinct_symbols {
            self.symbol_pair = SymbolPairMode::Distinct;
        }
        if cli.stdout {
            self.stdout = true;
        }
        self
    }

    pub fn alphabet(&self) -> Result<SymbolAlphabet> {
        SymbolAlphabet::new(&self.symbols)
    }

    pub fn prompt_generator(&self) -> Result<PromptGenerator> {
        PromptGenerator::new(self.alphabet()?, self.symbol_pair)
    }

    pub fn pipeline_options(&self, count: Option<usize>) -> PipelineOptions {
        PipelineOptions {
            min_line_length: self.min_line_length,
            count,
            join: self.join,
        }
    }

    pub fn delivery(&self) -> Delivery {
        if self.stdout {
            Delivery::Stdout
        } else {
            Delivery::File {
                out_dir: self.out_dir.clone(),
                timestamp_format: self.timestamp_format.clone(),
            }
        }
    }
}
