//! @acp:module "Line Normalizer"
//! @acp:summary "Tab expansion, space collapsing, and blank-line filtering"
//! @acp:domain typing
//! @acp:layer logic

/// Clean a raw line of text
///
/// Tabs become single spaces, runs of spaces collapse to one, and the
/// result is trimmed. The returned string may be empty.
pub fn normalize_line(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut previous_space = false;

    for c in raw.chars() {
        let c = if c == '\t' { ' ' } else { c };
        if c == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        cleaned.push(c);
    }

    cleaned.trim().to_string()
}

/// Normalize every line and drop the ones that end up blank
///
/// Input order is preserved.
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| normalize_line(line.as_ref()))
        .filter(|line| !line.is_empty())
        .collect()
}
