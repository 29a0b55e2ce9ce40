//! Splits raw text into URL, word and symbol tokens.
//!
//! Whitespace only separates tokens and never produces one. At every position
//! a URL wins over a word, a word over a lone symbol.

use regex::Regex;
use std::sync::LazyLock;

use crate::token::Token;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?|ftp)://\S+|\w+|[^\w\s]").expect("token pattern is valid")
});

/// Raw token substrings in input order.
pub fn split(text: &str) -> Vec<&str> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|raw| !raw.trim().is_empty())
        .collect()
}

/// Split and classify `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = split(text).into_iter().map(Token::new).collect();
    tracing::trace!(count = tokens.len(), "tokenized input");
    tokens
}
