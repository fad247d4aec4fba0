//! Grouping of raw matches into per-pair intersections and similarity scoring.
//!
//! The matcher reports matches one at a time, naming the two files in
//! whatever order it happens to visit them. The registry canonicalizes each
//! pair by file id so every match between two files lands in the single
//! [`Intersection`] for that pair, then scores all pairs on demand.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Match, Options, TokenizedFile};
use crate::range::total_covered;

/// Identifier assigned to a file when it is registered with an [`Analysis`].
///
/// Ids are handed out in registration order and define the canonical
/// ordering of file pairs.
pub type FileId = u32;

/// All matches discovered between one unordered pair of files.
///
/// `left` and `right` are fixed when the pair is first seen, with
/// `left < right`; matches reported in the opposite order are reoriented on
/// insertion. Matches are only ever appended.
#[derive(Debug, Clone, Serialize)]
pub struct Intersection {
    pub left: FileId,
    pub right: FileId,
    matches: Vec<Match>,
}

impl Intersection {
    fn new(left: FileId, right: FileId) -> Self {
        Intersection {
            left,
            right,
            matches: Vec::new(),
        }
    }

    fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// The matches between this pair, in discovery order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// An [`Intersection`] together with its computed coverage and similarity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredIntersection<'a> {
    pub intersection: &'a Intersection,
    /// Merged total length of the left-side ranges of all matches.
    pub overlap: usize,
    /// Dice coefficient over k-mer coverage:
    /// `2 * overlap / (left_total + right_total)`.
    pub similarity: f32,
}

/// Registry that groups matches by unordered file pair and scores the pairs.
///
/// One registry lives for one analysis run. Files are registered up front;
/// `add_match` may then be called any number of times, in any pair order.
#[derive(Debug)]
pub struct Analysis {
    options: Options,
    files: Vec<TokenizedFile>,
    intersections: Vec<Intersection>,
    pair_index: HashMap<(FileId, FileId), usize>,
}

impl Analysis {
    pub fn new(options: Options) -> Self {
        Analysis {
            options,
            files: Vec::new(),
            intersections: Vec::new(),
            pair_index: HashMap::new(),
        }
    }

    /// Store a tokenized file and assign it the next file id.
    pub fn register(&mut self, file: TokenizedFile) -> FileId {
        let id = self.files.len() as FileId;
        self.files.push(file);
        id
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn file(&self, id: FileId) -> &TokenizedFile {
        &self.files[id as usize]
    }

    pub fn files(&self) -> &[TokenizedFile] {
        &self.files
    }

    /// Record one discovered match between two registered files.
    ///
    /// The pair is canonicalized by id, so `add_match(a, b, m)` and
    /// `add_match(b, a, m)` feed the same intersection. When the caller's
    /// order is reversed relative to the canonical order, the match is
    /// swapped on the way in, keeping every stored left-side range in the
    /// canonical left file's index space.
    pub fn add_match(&mut self, left: FileId, right: FileId, m: Match) {
        debug_assert_ne!(left, right, "a file cannot match itself");
        debug_assert!((left as usize) < self.files.len(), "unregistered file id {left}");
        debug_assert!((right as usize) < self.files.len(), "unregistered file id {right}");

        let (first, second, m) = if left < right {
            (left, right, m)
        } else {
            (right, left, m.swapped())
        };

        let slot = match self.pair_index.entry((first, second)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let slot = self.intersections.len();
                self.intersections.push(Intersection::new(first, second));
                *entry.insert(slot)
            }
        };

        self.intersections[slot].add_match(m);
    }

    /// Intersections created so far, in creation order.
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    /// Lazy variant of [`intersections`](Self::intersections).
    pub fn intersection_iter(&self) -> impl Iterator<Item = &Intersection> {
        self.intersections.iter()
    }

    /// Score every intersection, sorted ascending by overlap.
    ///
    /// Scores are recomputed from the raw matches on every call, so the
    /// result always reflects the registry's current contents. The sort is
    /// stable: pairs with equal overlap keep creation order. A pair whose
    /// combined k-mer count is zero scores 0 rather than NaN.
    pub fn scored_intersections(&self) -> Vec<ScoredIntersection<'_>> {
        let k = self.options.kmer_length;

        let mut scored: Vec<ScoredIntersection<'_>> = self
            .intersections
            .iter()
            .map(|intersection| {
                let overlap =
                    total_covered(intersection.matches.iter().map(|m| m.left).collect());
                let left_total = self.file(intersection.left).total_kmers(k);
                let right_total = self.file(intersection.right).total_kmers(k);

                let combined = left_total + right_total;
                let similarity = if combined == 0 {
                    0.0
                } else {
                    2.0 * overlap as f32 / combined as f32
                };

                ScoredIntersection {
                    intersection,
                    overlap,
                    similarity,
                }
            })
            .collect();

        scored.sort_by_key(|s| s.overlap);
        scored
    }
}
