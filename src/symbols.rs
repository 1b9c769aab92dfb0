//! @acp:module "Symbol Alphabet"
//! @acp:summary "Fixed punctuation set used for prompt suffixes and joiners"
//! @acp:domain typing
//! @acp:layer model

use rand::Rng;

use crate::error::{Result, TypingError};

/// Default punctuation drawn for suffixes and joiners
pub const DEFAULT_SYMBOLS: &str = "~`!@#$%^&*()-_=+[]{};:'\",.<>/?\\|";

/// Ordered, non-empty set of distinct, non-whitespace symbol characters
///
/// Order matters: a seeded generator picks by index, so reordering the
/// alphabet changes the output of a reproducible run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAlphabet {
    symbols: Vec<char>,
}

impl SymbolAlphabet {
    /// Build an alphabet from the characters of `symbols`
    ///
    /// Repeated characters are kept once, at their first position.
    /// Whitespace is rejected: it would blur token boundaries in prompts.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut unique: Vec<char> = Vec::new();
        for c in symbols.chars() {
            if c.is_whitespace() {
                return Err(TypingError::WhitespaceSymbol(c));
            }
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.is_empty() {
            return Err(TypingError::EmptyAlphabet);
        }
        Ok(Self { symbols: unique })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// Draw one symbol uniformly at random (one RNG draw)
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl std::fmt::Display for SymbolAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
