//! Top-level module for the word-level Markov chain.
//!
//! This module provides:
//! - Per-word successor statistics (`WordSuccessorTable`)
//! - The adjacency table and the stateful generator (`WordTree`, `MarkovChain`)
//! - The injectable random source (`RandomSource`)
//! - Chain configuration and the file → chain pipeline (`ChainInput`)

/// Word-adjacency table, stateful word generator and the `take` helper.
///
/// Exposes construction from tokens, cursor reset, predicate-filtered
/// generation and the iterator protocol.
pub mod markov_chain;

/// Successor counts of a single word.
///
/// Tracks how often each word followed the anchor word and supports
/// weighted random sampling restricted by an acceptance predicate.
pub mod successor_table;

/// Random source contract shared by every chain.
pub mod random;

/// Chain configuration (step, seed, punctuation cleanup, binary cache).
pub mod chain_input;
