//! Pairsim Similarity Scoring Library
//!
//! Aggregation-and-scoring core of a source similarity detector. Upstream
//! stages tokenize source files, fingerprint them, and discover raw matches
//! (shared k-mer ranges) between files. This crate groups those matches by
//! the unordered file pair they belong to and scores each pair with a
//! coverage count and a Dice similarity coefficient.
//!
//! # Example
//!
//! ```
//! use pairsim::prelude::*;
//!
//! let mut analysis = Analysis::new(Options::default());
//!
//! let a = analysis.register(TokenizedFile::new("a.rs", (0..40).collect()));
//! let b = analysis.register(TokenizedFile::new("b.rs", (0..30).collect()));
//!
//! // The matcher names pairs in arbitrary order; both calls land in the
//! // same intersection.
//! analysis.add_match(a, b, Match::new(Range::new(0, 4), Range::new(2, 6)));
//! analysis.add_match(b, a, Match::new(Range::new(6, 8), Range::new(5, 7)));
//!
//! let scored = analysis.scored_intersections();
//! assert_eq!(scored.len(), 1);
//! assert_eq!(scored[0].overlap, 6);
//! ```

pub mod analysis;
pub mod models;
pub mod range;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{Analysis, FileId, Intersection, ScoredIntersection};
    pub use crate::models::{Match, Options, OptionsError, TokenizedFile};
    pub use crate::range::{total_covered, Range};
}

// Re-export commonly used types at the crate root
pub use analysis::{Analysis, FileId, Intersection, ScoredIntersection};
pub use models::{Match, Options, TokenizedFile};
pub use range::Range;
