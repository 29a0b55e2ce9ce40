//! Joins resolved tokens back into a message.

use crate::dictionary::Dictionary;
use crate::engine::translate;
use crate::token::{Token, TokenKind};

/// A token together with the text it renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub token: &'a Token,
    pub text: String,
}

pub fn resolve<'a>(tokens: &'a [Token], dictionary: &Dictionary) -> Vec<Resolved<'a>> {
    tokens
        .iter()
        .map(|token| Resolved {
            token,
            text: translate(token, dictionary),
        })
        .collect()
}

/// Words are separated by one space, punctuation hugs the token before it and
/// the first token never gets a leading space.
pub fn render(resolved: &[Resolved<'_>]) -> String {
    let mut output = String::new();
    for item in resolved {
        if !output.is_empty() && item.token.kind() != TokenKind::Punctuation {
            output.push(' ');
        }
        output.push_str(&item.text);
    }
    output
}
