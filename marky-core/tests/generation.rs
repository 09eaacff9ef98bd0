use std::path::Path;

use marky_core::error::ChainError;
use marky_core::model::chain_input::ChainInput;
use marky_core::model::markov_chain::{MarkovChain, WordTree, take};
use marky_core::model::random::DrawFn;
use marky_core::poetry::couplet::{CoupletInput, compose_couplet};
use marky_core::poetry::rhyme::{PronouncingDictionary, RhymeOracle};
use marky_core::text::{Tokenizer, WordTokenizer, is_punctuation};

const PASSAGE: &str = "All in a hot and copper sky, The bloody Sun, at noon, \
	Right up above the mast did stand, No bigger than the Moon. \
	Day after day, day after day, We stuck, nor breath nor motion; \
	As idle as a painted ship Upon a painted ocean. \
	Water, water, every where, And all the boards did shrink; \
	Water, water, every where, Nor any drop to drink.";

const DICTIONARY: &str = ";;; excerpt
SKY  S K AY1
NOON  N UW1 N
MOON  M UW1 N
STAND  S T AE1 N D
DAY  D EY1
AWAY  AH0 W EY1
MOTION  M OW1 SH AH0 N
OCEAN  OW1 SH AH0 N
SHIP  SH IH1 P
DRIP  D R IH1 P
SHRINK  SH R IH1 NG K
DRINK  D R IH1 NG K
WHERE  W EH1 R
THERE  DH EH1 R
";

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, contents).unwrap();
	path
}

#[test]
fn file_to_text_pipeline() {
	let dir = tempfile::tempdir().unwrap();
	let source = write(dir.path(), "mariner.txt", PASSAGE);

	let mut input = ChainInput::new(1).unwrap();
	input.seed = Some(1834);
	let mut chain = input.build_chain(&source, &WordTokenizer).unwrap();
	let words = take(&mut chain, 100);

	assert_eq!(words.len(), 100);
	assert!(words.iter().all(|word| !is_punctuation(word)));
	assert!(words.iter().all(|word| *word == word.to_lowercase()));
}

#[test]
fn backward_tree_mirrors_forward_tree() {
	let tokens = WordTokenizer.tokenize(PASSAGE).unwrap();
	let mut reversed = tokens.clone();
	reversed.reverse();

	let backward = WordTree::build(-1, &tokens).unwrap();
	let forward = WordTree::build(1, &reversed).unwrap();
	assert_eq!(backward.len(), forward.len());
	for word in forward.words() {
		assert_eq!(backward.get(word), forward.get(word), "{word}");
	}
}

#[test]
fn scripted_draws_drive_generation() {
	// painted -> {ship: 1, ocean: 1}
	let tokens = WordTokenizer.tokenize(PASSAGE).unwrap();
	let tree = WordTree::build(1, &tokens).unwrap();
	let painted = tree.get("painted").unwrap();
	assert_eq!(painted.successors().collect::<Vec<_>>(), vec![("ship", 1), ("ocean", 1)]);

	let mut chain = MarkovChain::from_tree(tree.clone(), DrawFn(|_: usize, max: usize| max - 1));
	chain.reset(Some("painted"));
	assert_eq!(chain.get_word().as_deref(), Some("ocean"));

	let mut chain = MarkovChain::from_tree(tree, DrawFn(|min: usize, _: usize| min));
	chain.reset(Some("painted"));
	assert_eq!(chain.get_word().as_deref(), Some("ship"));
}

#[test]
fn couplets_rhyme_through_the_dictionary() {
	let dir = tempfile::tempdir().unwrap();
	let source = write(dir.path(), "mariner.txt", PASSAGE);
	let dict_path = write(dir.path(), "cmudict.dict", DICTIONARY);
	let dictionary = PronouncingDictionary::load(&dict_path).unwrap();

	let mut forward_input = ChainInput::new(1).unwrap();
	forward_input.seed = Some(1);
	let mut backward_input = ChainInput::new(-1).unwrap();
	backward_input.seed = Some(2);
	let mut forward = forward_input.build_chain(&source, &WordTokenizer).unwrap();
	let mut backward = backward_input.build_chain(&source, &WordTokenizer).unwrap();

	let input = CoupletInput::new(4).unwrap();
	for _ in 0..5 {
		let couplet = compose_couplet(&input, &mut forward, &mut backward, &dictionary)
			.expect("the passage holds several rhymes");
		let first = couplet.first_line.last().unwrap();
		let second = couplet.second_line.last().unwrap();
		assert!(dictionary.rhymes(first, second), "{first} / {second}");
		assert_eq!(couplet.to_string().lines().count(), 2);
	}
}

#[test]
fn missing_dictionary_is_reported() {
	let result = PronouncingDictionary::load("no/such/cmudict.dict");
	assert!(matches!(result, Err(ChainError::DependencyUnavailable(_))));
}
