//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::corpus::{Corpus, Item};
pub use crate::error::{Result, SugerirError};
pub use crate::primitives::Vector;
pub use crate::recommend::{ContentRanker, Ranked};
pub use crate::respond::{Profile, Reply, Responder, Rule};
pub use crate::text::vectorize::TfidfVectorizer;
