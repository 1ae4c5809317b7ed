//! Error types for sugerir operations.
//!
//! A single crate-wide error enum with enough context to act on, plus a
//! `Result<T>` alias re-exported from the crate root.

use std::fmt;

/// Main error type for sugerir operations.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::TitleNotFound {
///     title: "Solaris".to_string(),
/// };
/// assert!(err.to_string().contains("Solaris"));
/// ```
#[derive(Debug)]
pub enum SugerirError {
    /// A ranking query named a title that is not in the corpus.
    TitleNotFound {
        /// The title that was requested
        title: String,
    },

    /// An operation requires at least one corpus item.
    EmptyCorpus,

    /// Two vectors had different lengths where equal lengths are required.
    DimensionMismatch {
        /// Expected vector length
        expected: usize,
        /// Actual vector length
        actual: usize,
    },

    /// A transform was requested before the vectorizer learned a vocabulary.
    NotFitted {
        /// What to call first
        hint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::TitleNotFound { title } => {
                write!(f, "title not found in corpus: \"{title}\"")
            }
            SugerirError::EmptyCorpus => write!(f, "corpus has no items"),
            SugerirError::DimensionMismatch { expected, actual } => {
                write!(f, "vector length mismatch: expected {expected}, got {actual}")
            }
            SugerirError::NotFitted { hint } => {
                write!(f, "vectorizer not fitted: {hint}")
            }
            SugerirError::Io(e) => write!(f, "I/O error: {e}"),
            SugerirError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            SugerirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SugerirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SugerirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SugerirError {
    fn from(err: std::io::Error) -> Self {
        SugerirError::Io(err)
    }
}

impl From<serde_json::Error> for SugerirError {
    fn from(err: serde_json::Error) -> Self {
        SugerirError::Serialization(err.to_string())
    }
}

impl From<&str> for SugerirError {
    fn from(msg: &str) -> Self {
        SugerirError::Other(msg.to_string())
    }
}

impl From<String> for SugerirError {
    fn from(msg: String) -> Self {
        SugerirError::Other(msg)
    }
}

impl SugerirError {
    /// Create a not-found error for a query title.
    #[must_use]
    pub fn title_not_found(title: &str) -> Self {
        Self::TitleNotFound {
            title: title.to_string(),
        }
    }

    /// Create an empty input error with context.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for SugerirError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<SugerirError> for &str {
    fn eq(&self, other: &SugerirError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SugerirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_not_found_display() {
        let err = SugerirError::title_not_found("Stalker");
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("Stalker"));
    }

    #[test]
    fn test_empty_corpus_display() {
        let err = SugerirError::EmptyCorpus;
        assert!(err.to_string().contains("no items"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SugerirError::DimensionMismatch {
            expected: 12,
            actual: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn test_not_fitted_display() {
        let err = SugerirError::NotFitted {
            hint: "call fit() first".to_string(),
        };
        assert!(err.to_string().contains("call fit() first"));
    }

    #[test]
    fn test_from_str() {
        let err: SugerirError = "boom".into();
        assert!(matches!(err, SugerirError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_from_string() {
        let err: SugerirError = "boom".to_string().into();
        assert!(matches!(err, SugerirError::Other(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SugerirError = io_err.into();
        assert!(matches!(err, SugerirError::Io(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: SugerirError = parse_err.into();
        assert!(matches!(err, SugerirError::Serialization(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SugerirError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = SugerirError::Other("plain".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_empty_input_helper() {
        let err = SugerirError::empty_input("fit: no documents");
        assert!(err.to_string().contains("empty input"));
        assert!(err.to_string().contains("no documents"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = SugerirError::Other("exact message".to_string());
        assert!(err == "exact message");
        assert!("exact message" == err);
    }
}
