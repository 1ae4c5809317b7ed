//! Content-based similarity ranking.
//!
//! Items are described by short tag strings, vectorized with TF-IDF, and
//! ranked against each other by cosine similarity.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::recommend::ContentRanker;
//!
//! let mut ranker = ContentRanker::new();
//! ranker.add_item("The Martian", "space survival botany");
//! ranker.add_item("Gravity", "space survival debris");
//! ranker.add_item("Chef", "cooking road trip");
//!
//! let ranked = ranker.rank("The Martian", 2).expect("title exists");
//!
//! assert_eq!(ranked[0].title, "Gravity");
//! assert!(ranked.iter().all(|r| r.title != "The Martian"));
//! ```

pub mod content_based;

pub use content_based::{ContentRanker, Ranked};
