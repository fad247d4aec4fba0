//! Data structures for the pairwise similarity scoring core.

use crate::range::Range;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("k-mer length must be at least 1, got {0}")]
    InvalidKmerLength(usize),
    #[error("winnowing window must be at least 1 k-mer, got {0}")]
    InvalidWindowSize(usize),
}

/// Run configuration, fixed for the lifetime of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Number of consecutive tokens forming one k-mer.
    pub kmer_length: usize,
    /// Number of consecutive k-mers in one winnowing window.
    ///
    /// Read by the fingerprinting stage; carried here so a single value
    /// configures the whole pipeline.
    pub kmers_in_window: usize,
}

impl Options {
    /// Create validated options. Both parameters must be at least 1.
    pub fn new(kmer_length: usize, kmers_in_window: usize) -> Result<Self, OptionsError> {
        if kmer_length == 0 {
            return Err(OptionsError::InvalidKmerLength(kmer_length));
        }
        if kmers_in_window == 0 {
            return Err(OptionsError::InvalidWindowSize(kmers_in_window));
        }
        Ok(Options {
            kmer_length,
            kmers_in_window,
        })
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            kmer_length: 23,
            kmers_in_window: 17,
        }
    }
}

/// A source file reduced to its token-id sequence by the external tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizedFile {
    pub path: String,
    pub tokens: Vec<u32>,
}

impl TokenizedFile {
    pub fn new(path: impl Into<String>, tokens: Vec<u32>) -> Self {
        TokenizedFile {
            path: path.into(),
            tokens,
        }
    }

    /// Number of tokens in the file.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of k-length token windows the file contains.
    ///
    /// A file shorter than k tokens has no k-mers at all.
    pub fn total_kmers(&self, k: usize) -> usize {
        if k == 0 || self.tokens.len() < k {
            return 0;
        }
        self.tokens.len() - k + 1
    }
}

/// One correspondence discovered by the matcher: a range of k-mer positions
/// in the left file paired with the matching range in the right file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub left: Range,
    pub right: Range,
}

impl Match {
    pub fn new(left: Range, right: Range) -> Self {
        Match { left, right }
    }

    /// The same correspondence viewed from the opposite side.
    pub fn swapped(self) -> Self {
        Match {
            left: self.right,
            right: self.left,
        }
    }
}
