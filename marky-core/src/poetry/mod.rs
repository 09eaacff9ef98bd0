//! Rhyming couplets built from two Markov chains.
//!
//! A forward chain writes the first line. A chain built with a negative
//! step writes the second line backwards, starting from a word that rhymes
//! with the end of the first line.

/// Rhyme oracle contract and a CMU-format pronouncing dictionary.
pub mod rhyme;

/// Couplet composition and retry.
pub mod couplet;
