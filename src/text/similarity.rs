//! Cosine similarity kernels.
//!
//! The convention throughout: a zero vector is similar to nothing, so
//! any comparison involving a zero norm scores 0.0 instead of dividing
//! by zero. With non-negative weights (TF-IDF) every score lands in
//! [0, 1].
//!
//! # Quick Start
//!
//! ```
//! use sugerir::text::similarity::cosine_similarity;
//! use sugerir::primitives::Vector;
//!
//! let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let b = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let sim = cosine_similarity(&a, &b).expect("cosine similarity should succeed");
//! assert!(sim > 0.99);
//! ```

use crate::error::{Result, SugerirError};
use crate::primitives::Vector;

/// Compute cosine similarity between two vectors of equal length.
///
/// ```text
/// cosine(a, b) = (a . b) / (||a|| * ||b||)
/// ```
///
/// Returns 0.0 when either norm is zero.
///
/// # Errors
///
/// Returns [`SugerirError::DimensionMismatch`] on unequal lengths and an
/// error for empty vectors.
///
/// # Examples
///
/// ```
/// use sugerir::text::similarity::cosine_similarity;
/// use sugerir::primitives::Vector;
///
/// let a = Vector::from_slice(&[1.0, 0.0]);
/// let zero = Vector::from_slice(&[0.0, 0.0]);
///
/// let sim = cosine_similarity(&a, &zero).expect("cosine similarity should succeed");
/// assert_eq!(sim, 0.0);
/// ```
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SugerirError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Err(SugerirError::empty_input("cosine over empty vectors"));
    }

    Ok(raw_cosine(a.as_slice(), b.as_slice()))
}

/// Cosine kernel over equal-length slices; zero norm scores 0.0.
fn raw_cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Compute the full pairwise cosine similarity matrix.
///
/// The result is square and symmetric. Diagonal entries are 1.0 except
/// for zero-vector rows, whose entire row (diagonal included) is 0.0.
/// Only the upper triangle is computed; the lower is mirrored.
///
/// # Errors
///
/// Returns [`SugerirError::DimensionMismatch`] if the vectors do not all
/// share one length.
///
/// # Examples
///
/// ```
/// use sugerir::text::similarity::pairwise_cosine_similarity;
/// use sugerir::primitives::Vector;
///
/// let vectors = vec![
///     Vector::from_slice(&[1.0, 0.0]),
///     Vector::from_slice(&[0.0, 1.0]),
/// ];
///
/// let matrix = pairwise_cosine_similarity(&vectors).expect("pairwise should succeed");
/// assert_eq!(matrix[0][0], 1.0);
/// assert_eq!(matrix[0][1], 0.0);
/// ```
pub fn pairwise_cosine_similarity(vectors: &[Vector<f64>]) -> Result<Vec<Vec<f64>>> {
    if vectors.is_empty() {
        return Ok(Vec::new());
    }

    let dim = vectors[0].len();
    for v in vectors {
        if v.len() != dim {
            return Err(SugerirError::DimensionMismatch {
                expected: dim,
                actual: v.len(),
            });
        }
    }

    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for (i, row) in matrix.iter_mut().enumerate() {
        // Self-similarity is 1.0 only for non-zero rows
        row[i] = if vectors[i].norm() > 0.0 { 1.0 } else { 0.0 };
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = raw_cosine(vectors[i].as_slice(), vectors[j].as_slice());
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }

    Ok(matrix)
}

/// Score every candidate against a query and return the top `k`.
///
/// Output pairs are (candidate index, score), sorted by score
/// descending. The sort is stable, so equal scores keep candidate index
/// order. Zero-norm operands score 0.0.
///
/// # Errors
///
/// Returns [`SugerirError::DimensionMismatch`] if any candidate's length
/// differs from the query's.
///
/// # Examples
///
/// ```
/// use sugerir::text::similarity::top_k_similar;
/// use sugerir::primitives::Vector;
///
/// let query = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let candidates = vec![
///     Vector::from_slice(&[0.0, 0.0, 1.0]),
///     Vector::from_slice(&[1.0, 2.0, 2.9]),
/// ];
///
/// let top = top_k_similar(&query, &candidates, 1).expect("top_k_similar should succeed");
/// assert_eq!(top[0].0, 1);
/// ```
pub fn top_k_similar(
    query: &Vector<f64>,
    candidates: &[Vector<f64>],
    k: usize,
) -> Result<Vec<(usize, f64)>> {
    for c in candidates {
        if c.len() != query.len() {
            return Err(SugerirError::DimensionMismatch {
                expected: query.len(),
                actual: c.len(),
            });
        }
    }

    let mut scored: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| (idx, raw_cosine(query.as_slice(), c.as_slice())))
        .collect();

    // Stable sort keeps candidate order on ties
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);

    Ok(scored)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
