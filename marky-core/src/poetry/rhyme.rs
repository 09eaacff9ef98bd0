use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::error::ChainError;

/// Tells whether two words rhyme.
///
/// Implementations must answer `false` (never fail) for unknown words and
/// when both words are the same.
pub trait RhymeOracle {
	fn rhymes(&self, a: &str, b: &str) -> bool;
}

impl<F: Fn(&str, &str) -> bool> RhymeOracle for F {
	fn rhymes(&self, a: &str, b: &str) -> bool {
		self(a, b)
	}
}

/// Pronouncing dictionary in the CMU dictionary text format.
///
/// Each entry maps a case-folded word to its first listed pronunciation,
/// a sequence of ARPAbet phonemes where vowels carry a stress digit
/// (`0` unstressed, `1` primary, `2` secondary).
///
/// Example line: `DAY  D EY1`
#[derive(Debug, Default, Clone)]
pub struct PronouncingDictionary {
	pronunciations: HashMap<String, Vec<String>>,
}

impl PronouncingDictionary {
	/// Parses a dictionary from its text form.
	///
	/// - `;;;` lines and `#` trailing comments are ignored
	/// - Alternate pronunciations (`WORD(1)`) are skipped, the first one wins
	/// - Words are case-folded
	pub fn parse(contents: &str) -> Self {
		let mut pronunciations = HashMap::new();
		for line in contents.lines() {
			let line = line.split('#').next().unwrap_or_default().trim();
			if line.is_empty() || line.starts_with(";;;") {
				continue;
			}
			let mut fields = line.split_whitespace();
			let Some(word) = fields.next() else {
				continue;
			};
			if word.ends_with(')') && word.contains('(') {
				continue;
			}
			let phonemes: Vec<String> = fields.map(str::to_owned).collect();
			if phonemes.is_empty() {
				continue;
			}
			pronunciations.entry(word.to_lowercase()).or_insert(phonemes);
		}
		Self { pronunciations }
	}

	/// Loads a dictionary file.
	///
	/// # Errors
	/// Returns `ChainError::DependencyUnavailable` if the file cannot be read:
	/// without a dictionary no rhyme can be found.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChainError> {
		let path = path.as_ref();
		let bytes = std::fs::read(path).map_err(|e| {
			ChainError::DependencyUnavailable(format!("pronouncing dictionary {}: {e}", path.display()))
		})?;
		let dictionary = Self::parse(&String::from_utf8_lossy(&bytes));
		info!("loaded {} pronunciations from {}", dictionary.len(), path.display());
		Ok(dictionary)
	}

	/// Pronunciation of `word`, if known.
	pub fn pronunciation(&self, word: &str) -> Option<&[String]> {
		self.pronunciations.get(&word.to_lowercase()).map(Vec::as_slice)
	}

	/// Phonemes from the last stressed vowel to the end of the word.
	///
	/// Falls back to the last vowel when no vowel is stressed, and to the
	/// whole pronunciation when there is no vowel at all.
	pub fn rhyming_part(&self, word: &str) -> Option<&[String]> {
		let phonemes = self.pronunciation(word)?;
		let stressed = phonemes
			.iter()
			.rposition(|phoneme| phoneme.ends_with('1') || phoneme.ends_with('2'));
		let vowel = phonemes
			.iter()
			.rposition(|phoneme| phoneme.ends_with(|c: char| c.is_ascii_digit()));
		let start = stressed.or(vowel).unwrap_or(0);
		Some(&phonemes[start..])
	}

	pub fn len(&self) -> usize {
		self.pronunciations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pronunciations.is_empty()
	}
}

impl RhymeOracle for PronouncingDictionary {
	fn rhymes(&self, a: &str, b: &str) -> bool {
		if a.eq_ignore_ascii_case(b) {
			return false;
		}
		match (self.rhyming_part(a), self.rhyming_part(b)) {
			(Some(a), Some(b)) => a == b,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DICT: &str = ";;; test dictionary
DAY  D EY1
WAY  W EY1
SUN  S AH1 N
RUN  R AH1 N
RUN(1)  R UW1 N
BRIGHT  B R AY1 T
RIGHT  R AY1 T
LEFT  L EH1 F T
SEA  S IY1
HE  HH IY1
upon AH0 P AA1 N # lowercase entry
THE  DH AH0
";

	fn dict() -> PronouncingDictionary {
		PronouncingDictionary::parse(DICT)
	}

	#[test]
	fn parse_skips_comments_and_alternates() {
		let dict = dict();
		assert_eq!(dict.len(), 11);
		assert_eq!(dict.pronunciation("run").unwrap(), ["R", "AH1", "N"]);
		assert_eq!(dict.pronunciation("Upon").unwrap(), ["AH0", "P", "AA1", "N"]);
		assert!(dict.pronunciation("run(1)").is_none());
	}

	#[test]
	fn rhyming_part_starts_at_last_stressed_vowel() {
		let dict = dict();
		assert_eq!(dict.rhyming_part("upon").unwrap(), ["AA1", "N"]);
		assert_eq!(dict.rhyming_part("right").unwrap(), ["AY1", "T"]);
		assert_eq!(dict.rhyming_part("the").unwrap(), ["AH0"]);
	}

	#[test]
	fn rhyming_words() {
		let dict = dict();
		assert!(dict.rhymes("day", "way"));
		assert!(dict.rhymes("Sea", "he"));
		assert!(dict.rhymes("bright", "right"));
		assert!(dict.rhymes("sun", "run"));
		assert!(!dict.rhymes("day", "sun"));
		assert!(!dict.rhymes("left", "right"));
	}

	#[test]
	fn identical_or_unknown_words_never_rhyme() {
		let dict = dict();
		assert!(!dict.rhymes("day", "day"));
		assert!(!dict.rhymes("Day", "day"));
		assert!(!dict.rhymes("day", "hooray"));
		assert!(!dict.rhymes("xyzzy", "way"));
	}

	#[test]
	fn missing_dictionary_is_a_dependency_error() {
		let result = PronouncingDictionary::load("does/not/exist.dict");
		assert!(matches!(result, Err(ChainError::DependencyUnavailable(_))));
	}

	#[test]
	fn load_reads_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("cmudict.dict");
		std::fs::write(&path, DICT).unwrap();
		let dict = PronouncingDictionary::load(&path).unwrap();
		assert!(dict.rhymes("day", "way"));
	}
}
