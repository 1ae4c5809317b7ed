//! Content-based ranker over tag strings.

use serde::Serialize;

use crate::corpus::Corpus;
use crate::error::{Result, SugerirError};
use crate::primitives::Vector;
use crate::text::similarity::{pairwise_cosine_similarity, top_k_similar};
use crate::text::vectorize::TfidfVectorizer;

/// One ranked neighbor: a title and its similarity to the query item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    /// Title of the neighbor item
    pub title: String,
    /// Cosine similarity to the query item, in [0, 1]
    pub score: f64,
}

/// Ranks corpus items by TF-IDF cosine similarity of their tags.
///
/// The corpus is the source of truth; TF-IDF vectors and the similarity
/// matrix are derived state, computed lazily and invalidated whenever an
/// item is added. Queries are deterministic: scores sort descending and
/// ties fall back to corpus insertion order.
///
/// # Examples
///
/// ```
/// use sugerir::recommend::ContentRanker;
///
/// let mut ranker = ContentRanker::new();
/// ranker.add_item("Interstellar", "space survival wormhole");
/// ranker.add_item("Sunshine", "space survival sun");
///
/// let ranked = ranker.recommend("Interstellar").expect("title exists");
/// assert_eq!(ranked.len(), 1);
/// assert!(ranked[0].score > 0.0);
/// ```
#[allow(missing_debug_implementations)]
pub struct ContentRanker {
    corpus: Corpus,
    default_top_n: usize,
    custom_stop_words: Option<Vec<String>>,
    vectors: Option<Vec<Vector<f64>>>,
    matrix: Option<Vec<Vec<f64>>>,
}

impl ContentRanker {
    /// Create an empty ranker with English stop words and a default
    /// result count of 5.
    #[must_use]
    pub fn new() -> Self {
        Self {
            corpus: Corpus::new(),
            default_top_n: 5,
            custom_stop_words: None,
            vectors: None,
            matrix: None,
        }
    }

    /// Build a ranker over an existing corpus.
    #[must_use]
    pub fn from_corpus(corpus: Corpus) -> Self {
        let mut ranker = Self::new();
        ranker.corpus = corpus;
        ranker
    }

    /// Set how many neighbors [`recommend`](Self::recommend) returns.
    #[must_use]
    pub fn with_default_top_n(mut self, top_n: usize) -> Self {
        self.default_top_n = top_n;
        self
    }

    /// Replace the English stop word list with a custom one.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom_stop_words = Some(
            words
                .into_iter()
                .map(|w| w.as_ref().to_string())
                .collect(),
        );
        self.invalidate();
        self
    }

    /// Add an item. Returns `true` if it was inserted, `false` when the
    /// title already exists (first occurrence wins, nothing changes).
    ///
    /// Any cached vectors and similarities are invalidated on insert.
    pub fn add_item<S: Into<String>, T: Into<String>>(&mut self, title: S, tags: T) -> bool {
        let inserted = self.corpus.push(title, tags);
        if inserted {
            self.invalidate();
        }
        inserted
    }

    /// Number of items in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Returns true if no items have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// The backing corpus.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Rank the `top_n` items most similar to `title`.
    ///
    /// The query item itself is excluded. Results sort by score
    /// descending with ties broken by corpus insertion order; scores are
    /// clamped to [0, 1]. Fewer than `top_n` results are returned when
    /// the corpus is small, and `top_n == 0` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::TitleNotFound`] when `title` is not in the
    /// corpus.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::recommend::ContentRanker;
    ///
    /// let mut ranker = ContentRanker::new();
    /// ranker.add_item("Alien", "horror space crew");
    ///
    /// assert!(ranker.rank("Prometheus", 3).is_err());
    /// assert!(ranker.rank("Alien", 0).expect("title exists").is_empty());
    /// ```
    pub fn rank(&mut self, title: &str, top_n: usize) -> Result<Vec<Ranked>> {
        let query_idx = self
            .corpus
            .index_of(title)
            .ok_or_else(|| SugerirError::title_not_found(title))?;

        if top_n == 0 {
            return Ok(Vec::new());
        }

        let vectors = self.ensure_vectors()?;

        // One extra slot so dropping the query item still fills top_n
        let k = top_n.saturating_add(1);
        let scored = top_k_similar(&vectors[query_idx], vectors, k)?;

        let mut ranked = Vec::with_capacity(top_n.min(self.corpus.len()));
        for (idx, score) in scored {
            if idx == query_idx {
                continue;
            }
            if ranked.len() == top_n {
                break;
            }
            if let Some(item) = self.corpus.get(idx) {
                ranked.push(Ranked {
                    title: item.title.clone(),
                    score: score.clamp(0.0, 1.0),
                });
            }
        }

        Ok(ranked)
    }

    /// Rank with the configured default result count.
    ///
    /// # Errors
    ///
    /// Same as [`rank`](Self::rank).
    pub fn recommend(&mut self, title: &str) -> Result<Vec<Ranked>> {
        let top_n = self.default_top_n;
        self.rank(title, top_n)
    }

    /// The full pairwise similarity matrix, cached until the corpus
    /// changes.
    ///
    /// Row and column order is corpus insertion order. The matrix is
    /// symmetric with a unit diagonal, except that zero-vector items
    /// (tags that are all stop words) score 0.0 everywhere, their own
    /// diagonal included.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::EmptyCorpus`] when no items have been
    /// added.
    pub fn similarity_matrix(&mut self) -> Result<&[Vec<f64>]> {
        if self.matrix.is_none() {
            let vectors = self.ensure_vectors()?;
            let matrix = pairwise_cosine_similarity(vectors)?;
            self.matrix = Some(matrix);
        }
        Ok(self.matrix.as_deref().unwrap_or(&[]))
    }

    /// Drop derived state after a corpus or configuration change.
    fn invalidate(&mut self) {
        self.vectors = None;
        self.matrix = None;
    }

    /// Vectorize the corpus tags, reusing the cache when valid.
    fn ensure_vectors(&mut self) -> Result<&[Vector<f64>]> {
        if self.vectors.is_none() {
            let mut vectorizer = match &self.custom_stop_words {
                Some(words) => TfidfVectorizer::new().with_stop_words(words),
                None => TfidfVectorizer::new().with_stop_words_english(),
            };
            let docs: Vec<&str> = self
                .corpus
                .items()
                .iter()
                .map(|item| item.tags.as_str())
                .collect();
            self.vectors = Some(vectorizer.fit_transform(&docs)?);
        }
        Ok(self.vectors.as_deref().unwrap_or(&[]))
    }
}

impl Default for ContentRanker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space_ranker() -> ContentRanker {
        let mut ranker = ContentRanker::new();
        ranker.add_item("The Martian", "space survival botany mars");
        ranker.add_item("Gravity", "space survival debris orbit");
        ranker.add_item("Moon", "space isolation clone");
        ranker.add_item("Chef", "cooking road trip family");
        ranker
    }

    #[test]
    fn test_rank_excludes_query_item() {
        let mut ranker = space_ranker();
        let ranked = ranker.rank("The Martian", 10).expect("title exists");
        assert!(ranked.iter().all(|r| r.title != "The Martian"));
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_rank_orders_by_similarity() {
        let mut ranker = space_ranker();
        let ranked = ranker.rank("The Martian", 3).expect("title exists");

        // Gravity shares two terms, Moon one, Chef none
        assert_eq!(ranked[0].title, "Gravity");
        assert_eq!(ranked[1].title, "Moon");
        assert_eq!(ranked[2].title, "Chef");
        assert_eq!(ranked[2].score, 0.0);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_rank_scores_within_unit_interval() {
        let mut ranker = space_ranker();
        for title in ["The Martian", "Gravity", "Moon", "Chef"] {
            let ranked = ranker.rank(title, 10).expect("title exists");
            for r in ranked {
                assert!((0.0..=1.0).contains(&r.score), "score {} out of range", r.score);
            }
        }
    }

    #[test]
    fn test_rank_unknown_title() {
        let mut ranker = space_ranker();
        let err = ranker.rank("Solaris", 3).unwrap_err();
        assert!(matches!(err, SugerirError::TitleNotFound { .. }));
        assert!(err.to_string().contains("Solaris"));
    }

    #[test]
    fn test_rank_top_n_zero() {
        let mut ranker = space_ranker();
        let ranked = ranker.rank("Moon", 0).expect("title exists");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_truncates_to_top_n() {
        let mut ranker = space_ranker();
        let ranked = ranker.rank("Moon", 2).expect("title exists");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_returns_fewer_when_corpus_is_small() {
        let mut ranker = ContentRanker::new();
        ranker.add_item("Solo", "space heist western");
        let ranked = ranker.rank("Solo", 5).expect("title exists");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_is_deterministic() {
        let mut ranker = space_ranker();
        let first = ranker.rank("Gravity", 3).expect("title exists");
        let second = ranker.rank("Gravity", 3).expect("title exists");
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommend_uses_default_top_n() {
        let mut ranker = space_ranker().with_default_top_n(2);
        let ranked = ranker.recommend("Gravity").expect("title exists");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_add_item_duplicate_title_ignored() {
        let mut ranker = space_ranker();
        assert!(!ranker.add_item("Moon", "entirely new tags"));
        assert_eq!(ranker.len(), 4);

        let ranked = ranker.rank("Moon", 3).expect("title exists");
        // Original tags still drive the ranking
        assert_eq!(ranked[0].title, "The Martian");
    }

    #[test]
    fn test_adding_item_invalidates_cache() {
        let mut ranker = space_ranker();
        let before = ranker.rank("Chef", 10).expect("title exists");
        assert_eq!(before[0].score, 0.0);

        ranker.add_item("Ratatouille", "cooking rat paris family");
        let after = ranker.rank("Chef", 10).expect("title exists");
        assert_eq!(after[0].title, "Ratatouille");
        assert!(after[0].score > 0.0);
    }

    #[test]
    fn test_all_stop_word_item_scores_zero() {
        let mut ranker = ContentRanker::new();
        ranker.add_item("Wordless", "the of and a");
        ranker.add_item("Space", "space mission");
        ranker.add_item("Jazz", "jazz romance");

        let ranked = ranker.rank("Wordless", 2).expect("title exists");
        assert!(ranked.iter().all(|r| r.score == 0.0));
        // Ties fall back to insertion order
        assert_eq!(ranked[0].title, "Space");
        assert_eq!(ranked[1].title, "Jazz");
    }

    #[test]
    fn test_similarity_matrix_properties() {
        let mut ranker = space_ranker();
        let matrix = ranker.similarity_matrix().expect("non-empty corpus");

        let n = matrix.len();
        assert_eq!(n, 4);
        for i in 0..n {
            assert!((matrix[i][i] - 1.0).abs() < 1e-12);
            for j in 0..n {
                assert!((matrix[i][j] - matrix[j][i]).abs() < 1e-12);
                assert!((0.0..=1.0 + 1e-12).contains(&matrix[i][j]));
            }
        }
    }

    #[test]
    fn test_similarity_matrix_empty_corpus_errors() {
        let mut ranker = ContentRanker::new();
        let err = ranker.similarity_matrix().unwrap_err();
        assert!(matches!(err, SugerirError::EmptyCorpus));
    }

    #[test]
    fn test_custom_stop_words() {
        let mut ranker = ContentRanker::new().with_stop_words(["space"]);
        ranker.add_item("A", "space alpha");
        ranker.add_item("B", "space beta");

        // With "space" filtered the two items share nothing
        let ranked = ranker.rank("A", 1).expect("title exists");
        assert_eq!(ranked[0].score, 0.0);
    }

    #[test]
    fn test_from_corpus() {
        let corpus = Corpus::from_pairs([("X", "alpha beta"), ("Y", "alpha gamma")]);
        let mut ranker = ContentRanker::from_corpus(corpus);
        let ranked = ranker.rank("X", 1).expect("title exists");
        assert_eq!(ranked[0].title, "Y");
        assert!(ranked[0].score > 0.0);
    }
}
