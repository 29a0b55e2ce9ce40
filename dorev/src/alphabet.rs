//! Alphabet sets and case-map helpers
//!
//! The pre-reform rules only ever look at lowercase Cyrillic letters, so the
//! sets below are lowercase. Casing is recorded before a word is rewritten and
//! reapplied afterwards with [`apply_case_map`].

/// Consonants that take a trailing hard sign at the end of a word.
pub const CONSONANTS: [char; 20] = [
    'б', 'в', 'г', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч',
    'ш', 'щ',
];

/// Vowels for the и→i rule. `й` is listed on purpose: under the old rules
/// "и" before "й" is written as "i" as well.
pub const VOWELS: [char; 11] = ['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я', 'й'];

/// Hard sign appended after a final consonant.
pub const HARD_SIGN: char = 'ъ';

/// Cyrillic "и" as written in modern spelling.
pub const MODERN_I: char = 'и';

/// Latin look-alike "i" used by the pre-reform spelling.
pub const DECIMAL_I: char = 'i';

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Membership in the modern alphabet used for classification
/// (`CONSONANTS` ∪ `VOWELS`).
pub fn is_russian_letter(c: char) -> bool {
    is_consonant(c) || is_vowel(c)
}

/// Returns `true` when every character of `word` lower-cased belongs to the
/// modern alphabet. An empty word is vacuously Russian.
pub fn is_russian_word(word: &str) -> bool {
    word.to_lowercase().chars().all(is_russian_letter)
}

/// Record, per character, whether it was uppercase.
pub fn extract_case_map(word: &str) -> Vec<bool> {
    word.chars().map(char::is_uppercase).collect()
}

/// Reapply a case map onto `word`, which may be longer than the word the map
/// was taken from.
///
/// * all entries `true`: the whole word is upper-cased
/// * all entries `false`: the word is returned as is
/// * mixed: the map is padded with `false` and applied position by position
pub fn apply_case_map(word: &str, case_map: &[bool]) -> String {
    if case_map.iter().all(|&upper| upper) {
        return word.to_uppercase();
    }

    if case_map.iter().all(|&upper| !upper) {
        return word.to_string();
    }

    let padded = case_map
        .iter()
        .copied()
        .chain(std::iter::repeat(false));

    let mut result = String::with_capacity(word.len());
    for (c, upper) in word.chars().zip(padded) {
        if upper {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}
