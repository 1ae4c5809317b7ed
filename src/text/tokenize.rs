//! Tokenization strategies.
//!
//! Two tokenizers cover this crate's needs:
//! - [`AlphanumericTokenizer`] splits on every non-alphanumeric boundary
//!   and is the ranker's default, so "Sci-Fi" yields two terms.
//! - [`WhitespaceTokenizer`] splits on Unicode whitespace only and keeps
//!   punctuation attached to words.
//!
//! Both implement the [`Tokenizer`] trait. Case handling belongs to the
//! vectorizer, not the tokenizer.

use crate::error::Result;
use crate::text::Tokenizer;

/// Tokenizer that splits on non-alphanumeric boundaries.
///
/// Runs of alphanumeric characters become tokens; everything else is a
/// separator. Empty fragments are discarded, so consecutive separators
/// are safe.
///
/// # Examples
///
/// ```
/// use sugerir::text::{Tokenizer, tokenize::AlphanumericTokenizer};
///
/// let tokenizer = AlphanumericTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Sci-Fi: Space Exploration!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Sci", "Fi", "Space", "Exploration"]);
///
/// // Digits count as token characters
/// let tokens = tokenizer.tokenize("blade runner 2049").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["blade", "runner", "2049"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlphanumericTokenizer;

impl AlphanumericTokenizer {
    /// Create a new alphanumeric tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|fragment| !fragment.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}

/// Tokenizer that splits on Unicode whitespace.
///
/// The simplest possible strategy: punctuation stays attached to words.
///
/// # Examples
///
/// ```
/// use sugerir::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("hello,  world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}
