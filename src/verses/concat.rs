//! @acp:module "Line Concatenator"
//! @acp:summary "Greedy merging of short verses into symbol-joined chunks"
//! @acp:domain typing
//! @acp:layer logic

use rand::Rng;

use crate::symbols::SymbolAlphabet;

/// Merge consecutive lines until each chunk reaches `min_len` characters
///
/// Lines are joined with `" X "`, where `X` is drawn from `alphabet` at the
/// moment the join happens, so draws follow the left-to-right order of the
/// input. The running length counts characters of the whole chunk,
/// joiners included. A trailing chunk that never reaches `min_len` is kept
/// as-is. A `min_len` of zero returns the lines unchanged without touching
/// the generator.
pub fn concatenate_lines<R: Rng + ?Sized>(
    lines: Vec<String>,
    min_len: usize,
    alphabet: &SymbolAlphabet,
    rng: &mut R,
) -> Vec<String> {
    if min_len == 0 {
        return lines;
    }

    let mut chunks = Vec::new();
    let mut remaining = lines.into_iter();

    while let Some(first) = remaining.next() {
        let mut chunk_len = first.chars().count();
        let mut chunk = first;

        while chunk_len < min_len {
            let Some(next) = remaining.next() else {
                break;
            };
            let symbol = alphabet.pick(rng);
            chunk.push(' ');
            chunk.push(symbol);
            chunk.push(' ');
            chunk.push_str(&next);
            chunk_len += 3 + next.chars().count();
        }

        chunks.push(chunk);
    }

    chunks
}
