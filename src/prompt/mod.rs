//! @acp:module "Prompt Generator"
//! @acp:summary "Appends a random four-digit number and symbol pair to a line"
//! @acp:domain typing
//! @acp:layer logic
//!
//! A prompt is `line + " " + number + " " + pair`. The number is drawn first,
//! then the two symbols, so a seeded generator yields the same prompts in
//! the same order every run.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypingError};
use crate::symbols::SymbolAlphabet;

/// Range of the numeric block; always renders as exactly four digits
pub const NUMBER_RANGE: RangeInclusive<u16> = 1000..=9999;

/// How the two suffix symbols are sampled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPairMode {
    /// Two independent draws; the symbols may repeat
    #[default]
    Independent,
    /// Two different symbols, sampled without replacement
    Distinct,
}

/// Builds typing prompts from verses
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    alphabet: SymbolAlphabet,
    mode: SymbolPairMode,
}

impl PromptGenerator {
    /// Create a generator; distinct pairs need at least two different symbols
    pub fn new(alphabet: SymbolAlphabet, mode: SymbolPairMode) -> Result<Self> {
        if mode == SymbolPairMode::Distinct && alphabet.len() < 2 {
            return Err(TypingError::AlphabetTooSmall(alphabet.len()));
        }
        Ok(Self { alphabet, mode })
    }

    pub fn alphabet(&self) -> &SymbolAlphabet {
        &self.alphabet
    }

    pub fn mode(&self) -> SymbolPairMode {
        self.mode
    }

    /// Produce the prompt for a single line
    pub fn generate<R: Rng + ?Sized>(&self, line: &str, rng: &mut R) -> String {
        let number = rng.random_range(NUMBER_RANGE);
        let (first, second) = self.symbol_pair(rng);
        format!("{} {} {}{}", line, number, first, second)
    }

    /// Produce prompts for every line, in order
    pub fn generate_all<R: Rng + ?Sized>(&self, lines: &[String], rng: &mut R) -> Vec<String> {
        lines.iter().map(|line| self.generate(line, rng)).collect()
    }

    fn symbol_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> (char, char) {
        match self.mode {
            SymbolPairMode::Independent => (self.alphabet.pick(rng), self.alphabet.pick(rng)),
            SymbolPairMode::Distinct => {
                let symbols = self.alphabet.as_slice();
                let first = rng.random_range(0..symbols.len());
                let mut second = rng.random_range(0..symbols.len() - 1);
                if second >= first {
                    second += 1;
                }
                (symbols[first], symbols[second])
            }
        }
    }
}

impl Default for PromptGenerator {
    fn default() -> Self {
        Self {
            alphabet: SymbolAlphabet::default(),
            mode: SymbolPairMode::Independent,
        }
    }
}
