#![forbid(unsafe_code)]

//! @acp:module "Poetry Typing Library"
//! @acp:summary "Touch-typing practice prompts from verses, numbers, and symbols"
//! @acp:domain typing
//! @acp:layer api
//! @acp:stability stable
//!
//! # Poetry Typing
//!
//! Turns a file of verses into touch-typing practice prompts: each line gets
//! a random four-digit number and two random punctuation symbols appended.
//!
//! ## Features
//!
//! - **Normalization**: Tabs and repeated spaces collapse, blank lines drop
//! - **Concatenation**: Short neighbouring verses merge with symbol joiners
//! - **Reproducible**: One explicitly passed, optionally seeded RNG
//! - **Output**: Timestamped result files or plain stdout
//!
//! ## Example
//!
//! ```rust,no_run
//! use poetry_typing::{Pipeline, PipelineOptions, PromptGenerator, VerseFile};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> poetry_typing::Result<()> {
//!     let pipeline = Pipeline::new(PromptGenerator::default(), PipelineOptions::default());
//!     let mut rng = StdRng::seed_from_u64(123);
//!
//!     let document = pipeline.run(&VerseFile::new("verses.txt"), &mut rng)?;
//!     print!("{}", document);
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod symbols;
pub mod verses;

// Re-exports
pub use config::{CliOverrides, Config};
pub use error::{Result, TypingError};
pub use output::{deliver, result_file_name, write_document, Delivery};
pub use pipeline::{format_document, JoinMode, Pipeline, PipelineOptions};
pub use prompt::{PromptGenerator, SymbolPairMode};
pub use symbols::SymbolAlphabet;
pub use verses::{concatenate_lines, normalize_line, VerseFile, VerseSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
