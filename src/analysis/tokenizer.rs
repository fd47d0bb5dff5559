use std::sync::LazyLock;
use regex::{Regex, Split};

/// Runs of characters outside `[0-9A-Za-z_]`.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z_]+").expect("non-word pattern is valid")
});

pub trait Tokenizer: Send + Sync {
    fn tokenize<'t>(&self, text: &'t str) -> Tokens<'t>;

    fn name(&self) -> &str;
}

/// Splits on non-word runs and lowercases each piece.
///
/// A delimiter at either end of the text produces an empty token, so
/// `",hello"` yields `["", "hello"]` and the empty string yields `[""]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize<'t>(&self, text: &'t str) -> Tokens<'t> {
        Tokens {
            pieces: NON_WORD.split(text),
        }
    }

    fn name(&self) -> &str {
        "word"
    }
}

/// Lazy stream of lowercase tokens
pub struct Tokens<'t> {
    pieces: Split<'static, 't>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.pieces.next().map(str::to_lowercase)
    }
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    WordTokenizer.tokenize(text)
}
