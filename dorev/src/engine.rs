//! Word-level translation: dictionary first, spelling rules second.

use crate::alphabet::{DECIMAL_I, HARD_SIGN, MODERN_I, apply_case_map, is_consonant, is_vowel};
use crate::dictionary::Dictionary;
use crate::token::Token;

/// Pre-reform spelling of a single token.
///
/// Passthrough tokens come back as written. Translatable tokens are looked up
/// by their lowercase form; a miss falls back to [`simplified_old_style`] on
/// the word as written. The original casing is reapplied in both cases.
pub fn translate(token: &Token, dictionary: &Dictionary) -> String {
    if !token.is_translatable() {
        return token.origin().to_string();
    }

    let lower = token.origin().to_lowercase();
    let base = match dictionary.get(&lower) {
        Some(old) => old.to_string(),
        None => {
            tracing::trace!(word = %lower, "dictionary miss, using spelling rules");
            simplified_old_style(token.origin())
        }
    };

    apply_case_map(&base, token.case_map())
}

/// Approximate the old spelling of a word:
///
/// 1. a final consonant gets a hard sign;
/// 2. "и" directly before a vowel becomes "i".
///
/// Both rules match lowercase letters only, so uppercase letters are left
/// as they are.
pub fn simplified_old_style(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    if chars.last().is_some_and(|&c| is_consonant(c)) {
        chars.push(HARD_SIGN);
    }

    let mut result = String::with_capacity(word.len() + HARD_SIGN.len_utf8());
    for (i, &c) in chars.iter().enumerate() {
        let before_vowel = chars.get(i + 1).is_some_and(|&next| is_vowel(next));
        if c == MODERN_I && before_vowel {
            result.push(DECIMAL_I);
        } else {
            result.push(c);
        }
    }
    result
}
