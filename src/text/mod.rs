//! Text preprocessing building blocks.
//!
//! Everything the ranker needs to turn tag strings into comparable
//! vectors: tokenization, stop word filtering, TF-IDF weighting, and
//! cosine similarity kernels.

use crate::error::Result;

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

/// Splits raw text into tokens.
///
/// This is the seam between raw input and everything downstream; the
/// vectorizer takes any implementation boxed.
pub trait Tokenizer {
    /// Tokenize the input text.
    ///
    /// # Errors
    ///
    /// Implementations may reject input they cannot tokenize.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
