//! Sugerir: content-based similarity ranking over short text tags, with
//! a small rule-based dialogue companion.
//!
//! The core pipeline is corpus in, ranked neighbors out: tag strings are
//! tokenized, stop-word filtered, TF-IDF weighted, and compared by
//! cosine similarity. Everything is synchronous and in-memory.
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
//! assert!(ranked[0].score > 0.0);
//! ```
//!
//! # Modules
//!
//! - [`corpus`]: `Item` and the ordered, title-unique `Corpus`
//! - [`text`]: tokenization, stop words, TF-IDF, cosine similarity
//! - [`recommend`]: the `ContentRanker` query surface
//! - [`respond`]: ordered-rule text responder with a session `Profile`
//! - [`primitives`]: the dense `Vector` the kernels run on
//! - [`error`]: `SugerirError` and the crate `Result` alias

pub mod corpus;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod respond;
pub mod text;

pub use corpus::{Corpus, Item};
pub use error::{Result, SugerirError};
pub use primitives::Vector;
