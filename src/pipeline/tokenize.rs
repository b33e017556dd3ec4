//! Tokenizer
//!
//! Turns one line of text into lowercase words with ASCII punctuation deleted.
//! Deletion is literal: `don't` becomes `dont`, never two words. Punctuation
//! outside ASCII (the Greek question mark, ano teleia, typographic quotes) is
//! left in place.

/// Whether `c` belongs to the 32-character ASCII punctuation set
/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
#[inline]
pub fn is_stripped_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Whether `c` separates tokens: Unicode whitespace plus the ASCII
/// information separators U+001C..=U+001F
#[inline]
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split a line into tokens
pub fn tokenize(line: &str) -> Vec<String> {
    let cleaned: String = line
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped_punctuation(*c))
        .collect();

    cleaned
        .split(is_token_separator)
        .map(|fragment| fragment.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokenize every line in order, yielding a flat token stream
pub fn tokenize_lines<'a, I>(lines: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    lines.into_iter().flat_map(tokenize)
}
