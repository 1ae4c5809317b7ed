//! TF-IDF vectorization.
//!
//! [`TfidfVectorizer`] turns a collection of documents into one dense
//! weight vector per document over a learned vocabulary.
//!
//! **Weighting:**
//! ```text
//! tfidf(t, d) = tf(t, d) x idf(t)
//! tf(t, d)    = count of term t in document d
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! ```
//! where `n` is the document count and `df(t)` the number of documents
//! containing `t`. The smoothing keeps `idf` positive for terms present
//! in every document and makes division by zero impossible.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::text::vectorize::TfidfVectorizer;
//!
//! let docs = vec!["space exploration", "space mission", "jazz romance"];
//!
//! let mut vectorizer = TfidfVectorizer::new();
//! let vectors = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//!
//! assert_eq!(vectors.len(), 3);
//! assert_eq!(vectorizer.vocabulary_size(), 5);
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SugerirError};
use crate::primitives::Vector;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::AlphanumericTokenizer;
use crate::text::Tokenizer;

/// TF-IDF vectorizer with a learned vocabulary.
///
/// Vocabulary indices are assigned in sorted term order, so the mapping
/// from term to dimension is deterministic for a given document set.
/// Terms not seen during `fit` are ignored at transform time.
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: Option<StopWordsFilter>,
    lowercase: bool,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    fitted: bool,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default alphanumeric tokenizer, no
    /// stop words, and lowercasing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(AlphanumericTokenizer::new()),
            stop_words: None,
            lowercase: true,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            fitted: false,
        }
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Filter the default English stop words before counting terms.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::vectorize::TfidfVectorizer;
    ///
    /// let docs = vec!["the space station", "the jazz club"];
    /// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    /// vectorizer.fit(&docs).expect("fit should succeed");
    ///
    /// // "the" never enters the vocabulary
    /// assert_eq!(vectorizer.vocabulary_size(), 4);
    /// ```
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Filter a custom stop word set before counting terms.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Set whether tokens are lowercased before counting (default: true).
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Learn the vocabulary and document frequencies.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::EmptyCorpus`] when `documents` is empty.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(SugerirError::EmptyCorpus);
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.process_tokens(doc.as_ref())?;
            let unique: HashSet<String> = terms.into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Sorted term order fixes the dimension assignment
        let mut terms: Vec<String> = doc_freq.keys().cloned().collect();
        terms.sort();

        self.vocabulary = terms
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        self.idf = terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0);
                ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        self.fitted = true;
        Ok(())
    }

    /// Map documents onto the learned vocabulary.
    ///
    /// Terms outside the vocabulary are ignored. A document with no known
    /// terms (or only stop words) yields the zero vector.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::NotFitted`] before `fit` and
    /// [`SugerirError::EmptyCorpus`] when `documents` is empty.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vector<f64>>> {
        if !self.fitted {
            return Err(SugerirError::NotFitted {
                hint: "call fit() before transform()".to_string(),
            });
        }
        if documents.is_empty() {
            return Err(SugerirError::EmptyCorpus);
        }

        let vocab_size = self.vocabulary.len();
        let mut vectors = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut weights = vec![0.0; vocab_size];
            for term in self.process_tokens(doc.as_ref())? {
                if let Some(&idx) = self.vocabulary.get(&term) {
                    weights[idx] += 1.0;
                }
            }
            for (idx, weight) in weights.iter_mut().enumerate() {
                *weight *= self.idf[idx];
            }
            vectors.push(Vector::from_vec(weights));
        }

        Ok(vectors)
    }

    /// Fit on `documents`, then transform them.
    ///
    /// # Errors
    ///
    /// Propagates any `fit` or `transform` failure.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<Vector<f64>>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The learned term to dimension mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency per vocabulary dimension.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf
    }

    /// Returns true once `fit` has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Tokenize, apply case folding, and drop stop words.
    fn process_tokens(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|token| {
                if self.lowercase {
                    token.to_lowercase()
                } else {
                    token
                }
            })
            .filter(|token| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(token))
            })
            .collect();
        Ok(tokens)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
