//! @acp:module "Verse Source"
//! @acp:summary "Reads normalized verses from files or in-memory lines"
//! @acp:domain typing
//! @acp:layer io

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::normalize::normalize_lines;
use crate::error::{Result, TypingError};

/// Supplier of ordered, normalized, non-blank verses
pub trait VerseSource {
    /// Produce every verse in source order
    fn verses(&self) -> Result<Vec<String>>;
}

/// UTF-8 text file with one verse per physical line
#[derive(Debug, Clone)]
pub struct VerseFile {
    path: PathBuf,
}

impl VerseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VerseSource for VerseFile {
    fn verses(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Err(TypingError::VerseFileNotFound(self.path.clone()));
        }

        let read_error = |source| TypingError::ReadVerses {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(read_error)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(read_error)?;

        let raw_count = lines.len();
        let verses = normalize_lines(lines);
        debug!(
            "Read {} verses from {} ({} blank lines skipped)",
            verses.len(),
            self.path.display(),
            raw_count - verses.len()
        );
        Ok(verses)
    }
}

impl VerseSource for [String] {
    fn verses(&self) -> Result<Vec<String>> {
        Ok(normalize_lines(self))
    }
}

impl VerseSource for [&str] {
    fn verses(&self) -> Result<Vec<String>> {
        Ok(normalize_lines(self))
    }
}
