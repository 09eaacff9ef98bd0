//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - A first-order Markov chain over words, built with a configurable
//!   directional step
//! - Weighted successor sampling with pluggable acceptance predicates
//! - Rhyming couplet composition over a forward and a reverse chain
//! - Text cleanup, tokenization and I/O helpers
//!
//! The chain and couplet APIs are public. File helpers are kept internal.

/// Markov chain model and generation logic.
pub mod model;

/// Rhyme lookup and couplet composition.
pub mod poetry;

/// Punctuation handling and tokenization.
pub mod text;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
