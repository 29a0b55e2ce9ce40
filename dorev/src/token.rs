//! Classified tokens
//!
//! A [`Token`] is created once from a raw substring and never changes. Its
//! [`TokenKind`] decides whether the engine may rewrite it; the case map keeps
//! the original casing so it can be restored after a rewrite.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::alphabet::{extract_case_map, is_russian_word};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?|ftp)://\S+$").expect("url pattern is valid"));

/// Symbols that attach to the preceding token when rendering.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Words left untouched even though they are spelled with Russian letters:
/// the conjunction "и" and the pronoun "он". Matched exactly as written.
pub const EXCEPT_WORDS: [&str; 2] = ["он", "и"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// All-Russian word, rewritten by the engine
    Translatable,
    /// Anything else made of word characters, including the exception words
    Foreign,
    /// Single punctuation symbol
    Punctuation,
    /// `http`, `https` or `ftp` link
    Url,
}

impl TokenKind {
    pub fn classify(origin: &str) -> TokenKind {
        if URL_RE.is_match(origin) {
            return TokenKind::Url;
        }

        if is_punctuation(origin) {
            return TokenKind::Punctuation;
        }

        if is_exception(origin) {
            return TokenKind::Foreign;
        }

        if is_russian_word(origin) {
            TokenKind::Translatable
        } else {
            TokenKind::Foreign
        }
    }

    pub fn is_passthrough(&self) -> bool {
        !matches!(self, TokenKind::Translatable)
    }
}

fn is_punctuation(origin: &str) -> bool {
    let mut chars = origin.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PUNCTUATION.contains(c),
        _ => false,
    }
}

fn is_exception(origin: &str) -> bool {
    EXCEPT_WORDS.contains(&origin)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    origin: String,
    kind: TokenKind,
    case_map: Vec<bool>,
}

impl Token {
    pub fn new(origin: &str) -> Self {
        Token {
            origin: origin.to_string(),
            kind: TokenKind::classify(origin),
            case_map: extract_case_map(origin),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn case_map(&self) -> &[bool] {
        &self.case_map
    }

    pub fn is_translatable(&self) -> bool {
        self.kind == TokenKind::Translatable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_url() {
        assert_eq!(TokenKind::classify("https://t.me/x"), TokenKind::Url);
        assert_eq!(TokenKind::classify("http://пример.рф"), TokenKind::Url);
        assert_eq!(TokenKind::classify("ftp://files"), TokenKind::Url);
        assert_eq!(TokenKind::classify("https"), TokenKind::Foreign);
    }

    #[test]
    fn test_classify_punctuation() {
        for p in [",", ".", "!", "?", "-", "_", "\"", "@"] {
            assert_eq!(TokenKind::classify(p), TokenKind::Punctuation, "{p}");
        }
    }

    #[test]
    fn test_non_ascii_symbols_are_foreign() {
        assert_eq!(TokenKind::classify("«"), TokenKind::Foreign);
        assert_eq!(TokenKind::classify("—"), TokenKind::Foreign);
    }

    #[test]
    fn test_classify_words() {
        assert_eq!(TokenKind::classify("мир"), TokenKind::Translatable);
        assert_eq!(TokenKind::classify("МИР"), TokenKind::Translatable);
        assert_eq!(TokenKind::classify("hello"), TokenKind::Foreign);
        assert_eq!(TokenKind::classify("мирhello"), TokenKind::Foreign);
        assert_eq!(TokenKind::classify("2024"), TokenKind::Foreign);
    }

    #[test]
    fn test_exception_words_are_passthrough() {
        assert_eq!(TokenKind::classify("он"), TokenKind::Foreign);
        assert_eq!(TokenKind::classify("и"), TokenKind::Foreign);
        assert_eq!(TokenKind::classify("Он"), TokenKind::Translatable);
        assert_eq!(TokenKind::classify("И"), TokenKind::Translatable);
        assert_eq!(TokenKind::classify("она"), TokenKind::Translatable);
    }

    #[test]
    fn test_token_case_map_matches_origin() {
        let token = Token::new("ПриВет");
        assert_eq!(token.origin(), "ПриВет");
        assert_eq!(token.case_map().len(), token.origin().chars().count());
        assert_eq!(token.case_map(), &[true, false, false, true, false, false]);
        assert!(token.is_translatable());
    }
}
