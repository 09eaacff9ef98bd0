//! Text cleanup and tokenization.
//!
//! The chain itself only needs a sequence of tokens and a way to tell words
//! apart from punctuation. Everything that turns raw text into tokens lives
//! here, behind the `Tokenizer` trait, so callers can plug in their own.

use crate::error::ChainError;

/// Returns `true` if the token contains no ASCII letter or digit.
///
/// Mixed tokens such as `hiv/aids` or `don't` are words, not punctuation.
/// The empty string counts as punctuation.
pub fn is_punctuation(token: &str) -> bool {
	!token.chars().any(|c| c.is_ascii_alphanumeric())
}

/// Strips punctuation left glued to the end of a word.
///
/// Tokenizers sometimes leave a trailing period on words (`sea.`).
/// Everything after the last ASCII letter or digit is removed.
/// Punctuation-only tokens are returned unchanged.
pub fn strip_end_punctuation(word: &str) -> &str {
	if is_punctuation(word) {
		return word;
	}
	word.trim_end_matches(|c: char| !c.is_ascii_alphanumeric())
}

/// Applies `strip_end_punctuation` to every word of a passage.
///
/// Standalone punctuation tokens are kept as they are.
pub fn fix_passage_punctuation<S: AsRef<str>>(passage: &[S]) -> Vec<String> {
	passage
		.iter()
		.map(|token| strip_end_punctuation(token.as_ref()).to_owned())
		.collect()
}

/// Splits raw text into an ordered sequence of tokens.
pub trait Tokenizer {
	fn tokenize(&self, text: &str) -> Result<Vec<String>, ChainError>;
}

/// Whitespace tokenizer that separates leading and trailing punctuation.
///
/// `"left, Out"` becomes `["left", ",", "Out"]`. Punctuation inside a word
/// (`don't`, `hiv/aids`) is left in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
	fn tokenize(&self, text: &str) -> Result<Vec<String>, ChainError> {
		let mut tokens = Vec::new();
		for chunk in text.split_whitespace() {
			let Some(start) = chunk.find(|c: char| c.is_alphanumeric()) else {
				tokens.push(chunk.to_owned());
				continue;
			};
			// `start` found a char, so `rfind` cannot fail
			let last = chunk.rfind(|c: char| c.is_alphanumeric()).unwrap_or(start);
			let end = last + chunk[last..].chars().next().map_or(1, char::len_utf8);

			if start > 0 {
				tokens.push(chunk[..start].to_owned());
			}
			tokens.push(chunk[start..end].to_owned());
			if end < chunk.len() {
				tokens.push(chunk[end..].to_owned());
			}
		}
		Ok(tokens)
	}
}
