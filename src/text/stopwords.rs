//! Stop word filtering.
//!
//! Stop words are common function words ("the", "is", "at") that carry
//! little content. Removing them before vectorization keeps the
//! vocabulary focused on descriptive terms.
//!
//! # Examples
//!
//! ```
//! use sugerir::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! let tokens = vec!["the", "martian", "is", "stranded"];
//! let filtered = filter.filter(&tokens);
//! assert_eq!(filtered, vec!["martian", "stranded"]);
//! ```

use std::collections::HashSet;

/// Case-insensitive stop word filter backed by a `HashSet`.
///
/// # Examples
///
/// ```
/// use sugerir::text::stopwords::StopWordsFilter;
///
/// let custom = StopWordsFilter::new(["movie", "film"]);
/// assert!(custom.is_stop_word("Movie"));
/// assert!(!custom.is_stop_word("space"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase so matching is case-insensitive
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words (lowercased on entry).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the default English function-word list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("WOULD"));
    /// assert!(!filter.is_stop_word("survival"));
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Remove stop words from a token list, preserving order and case of
    /// the surviving tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let filtered = filter.filter(&["The", "Dark", "Knight"]);
    /// assert_eq!(filtered, vec!["Dark", "Knight"]);
    /// ```
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| token.as_ref().to_string())
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }

    /// Check whether a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns true if the filter holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Default English stop words.
///
/// Function words only: articles, pronouns, prepositions, conjunctions,
/// auxiliary verbs, determiners, and question words. Content words are
/// deliberately left out so short tag strings keep their signal.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "at", "before", "behind", "below",
    "between", "by", "down", "during", "for", "from", "in", "into", "of", "off", "on",
    "onto", "out", "over", "through", "to", "under", "until", "up", "upon", "with", "within",
    "without",
    // conjunctions
    "and", "as", "because", "but", "if", "nor", "or", "since", "so", "than", "that",
    "though", "unless", "while",
    // auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "would", "should", "could", "ought", "can", "may", "might",
    "must", "will", "shall",
    // determiners and frequent adverbs
    "all", "any", "both", "each", "few", "more", "most", "much", "neither", "no", "none",
    "not", "only", "other", "own", "same", "some", "such", "then", "there", "these", "this",
    "those", "too", "very", "just", "now", "here", "again", "once",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
