//! Pre-reform Russian spelling for modern text
//!
//! Text is split into tokens, each Russian word is looked up in a dictionary
//! (or rewritten by simple spelling rules when the dictionary has no entry),
//! and the tokens are joined back with natural spacing.
//!
//! ```
//! use dorev::{Dictionary, translate_message};
//!
//! let dictionary = Dictionary::new().with_word("мир", "мiръ");
//! let old = translate_message("Привет, мир!", Some(&dictionary)).unwrap();
//! assert_eq!(old, "Приветъ, мiръ!");
//! ```

pub mod alphabet;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod render;
pub mod token;
pub mod tokenizer;

pub use dictionary::Dictionary;
pub use engine::{simplified_old_style, translate};
pub use error::{DorevError, DorevResult};
pub use render::{Resolved, render, resolve};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;

/// Translate a whole message.
///
/// # Errors
/// [`DorevError::MissingDictionary`] when `dictionary` is `None` or empty. The
/// message is never passed through untranslated in that case.
pub fn translate_message(text: &str, dictionary: Option<&Dictionary>) -> DorevResult<String> {
    let dictionary = match dictionary {
        Some(d) if !d.is_empty() => d,
        _ => return Err(DorevError::MissingDictionary),
    };

    let tokens = tokenize(text);
    let resolved = resolve(&tokens, dictionary);
    let output = render(&resolved);

    tracing::debug!(
        tokens = tokens.len(),
        translated = tokens.iter().filter(|t| t.is_translatable()).count(),
        "translated message"
    );
    Ok(output)
}
