//! @acp:module "Generate Command"
//! @acp:summary "Turn a verse file into typing-practice prompts"
//! @acp:domain cli
//! @acp:layer handler

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::Config;
use crate::output::{deliver, validate_timestamp_format, Delivery};
use crate::pipeline::Pipeline;
use crate::verses::VerseFile;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Verse file to read
    pub verses_file: PathBuf,
    /// Maximum number of prompts
    pub count: Option<usize>,
    /// Seed for reproducible output
    pub seed: Option<i64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            verses_file: PathBuf::from("verses.txt"),
            count: None,
            seed: None,
        }
    }
}

/// Map a signed seed onto the generator's 64-bit seed space
///
/// Reinterprets the two's-complement bits, so every `i64` maps to a
/// distinct `u64` and non-negative seeds keep their value.
pub fn seed_bits(seed: i64) -> u64 {
    u64::from_ne_bytes(seed.to_ne_bytes())
}

/// Build the random source for a run, seeded once before any draw
pub fn build_rng(seed: Option<i64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Seeding random source with {}", seed);
            StdRng::seed_from_u64(seed_bits(seed))
        }
        None => StdRng::from_os_rng(),
    }
}

/// Execute the generate command
///
/// Returns the result file path when the document was written to disk.
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<Option<PathBuf>> {
    let generator = config
        .prompt_generator()
        .context("Invalid symbol configuration")?;
    let delivery = config.delivery();
    if let Delivery::File {
        timestamp_format, ..
    } = &delivery
    {
        validate_timestamp_format(timestamp_format)?;
    }

    let pipeline = Pipeline::new(generator, config.pipeline_options(options.count));
    let mut rng = build_rng(options.seed);

    let source = VerseFile::new(&options.verses_file);
    let document = pipeline.run(&source, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = deliver(&document, &delivery, &Local::now(), &mut out)?;
    Ok(written)
}
