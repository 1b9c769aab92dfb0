//! @acp:module "Pipeline"
//! @acp:summary "Drives verses through concatenation, truncation, and prompt generation"
//! @acp:domain typing
//! @acp:layer service
//!
//! Stages run strictly forward and share one random generator:
//!
//! 1. Read normalized verses from a [`VerseSource`]
//! 2. Merge short lines ([`concatenate_lines`])
//! 3. Keep the first `count` lines
//! 4. Generate one prompt per line
//! 5. Join prompts into the output document

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::prompt::PromptGenerator;
use crate::verses::{concatenate_lines, VerseSource};

/// Default minimum chunk length for line concatenation
pub const DEFAULT_MIN_LINE_LENGTH: usize = 30;

/// How prompts are joined into the output document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinMode {
    /// One prompt per line
    #[default]
    Lines,
    /// All prompts on one space-separated line
    SingleLine,
}

/// Options for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Minimum chunk length for concatenation (0 disables it)
    pub min_line_length: usize,
    /// Maximum number of prompts to emit
    pub count: Option<usize>,
    /// Output join mode
    pub join: JoinMode,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
            count: None,
            join: JoinMode::Lines,
        }
    }
}

/// Verse-to-document pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    generator: PromptGenerator,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(generator: PromptGenerator, options: PipelineOptions) -> Self {
        Self { generator, options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Run every stage and return the generated prompts
    pub fn prompts<S, R>(&self, source: &S, rng: &mut R) -> Result<Vec<String>>
    where
        S: VerseSource + ?Sized,
        R: Rng + ?Sized,
    {
        let verses = source.verses()?;
        info!("Loaded {} verses", verses.len());

        let mut lines = concatenate_lines(
            verses,
            self.options.min_line_length,
            self.generator.alphabet(),
            rng,
        );
        debug!(
            "Concatenation (min length {}) produced {} lines",
            self.options.min_line_length,
            lines.len()
        );

        if let Some(count) = self.options.count {
            lines.truncate(count);
        }

        let prompts = self.generator.generate_all(&lines, rng);
        info!("Generated {} prompts", prompts.len());
        Ok(prompts)
    }

    /// Run every stage and return the formatted output document
    pub fn run<S, R>(&self, source: &S, rng: &mut R) -> Result<String>
    where
        S: VerseSource + ?Sized,
        R: Rng + ?Sized,
    {
        let prompts = self.prompts(source, rng)?;
        Ok(format_document(&prompts, self.options.join))
    }
}

/// Join prompts into the output document
///
/// Every non-empty document ends with exactly one newline per line. An
/// empty prompt list yields an empty document in both modes.
pub fn format_document(prompts: &[String], join: JoinMode) -> String {
    if prompts.is_empty() {
        return String::new();
    }

    match join {
        JoinMode::Lines => {
            let mut document = prompts.join("\n");
            document.push('\n');
            document
        }
        JoinMode::SingleLine => {
            let mut document = prompts.join(" ");
            document.push('\n');
            document
        }
    }
}
