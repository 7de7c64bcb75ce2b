//! Needleman–Wunsch global / Smith–Waterman local alignment with a linear gap
//! score.
//!
//! [`Aligner`] holds nothing but a [`ScoringPolicy`]; every call builds its own
//! matrices, so one aligner can be reused for any number of sequence pairs and
//! shared between threads.
//!
//! ### Example
//! ```rust
//! use pairwise_align::{Aligner, ScoringPolicy};
//! let aligner = Aligner::new(ScoringPolicy::new("global", 1, -1, -1).unwrap());
//! let aln = aligner.align_str("GATTACA", "GCATGCU");
//! assert_eq!(aln.score, 0);
//! assert_eq!(aln.gapped_a().len(), aln.gapped_b().len());
//! ```
use rand::Rng;

use crate::alignment::Alignment;
use crate::fill::fill;
use crate::matrix::{init_pointer_matrix, init_scoring_matrix};
use crate::scoring::ScoringPolicy;
use crate::traceback::{select_start, traceback};

/// Pairwise aligner bound to one scoring policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aligner {
    policy: ScoringPolicy,
}

impl Aligner {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Align `a` against `b`, breaking local traceback-start ties with the
    /// thread-local RNG.
    pub fn align<T: PartialEq + Clone>(&self, a: &[T], b: &[T]) -> Alignment<T> {
        self.align_with_rng(a, b, &mut rand::thread_rng())
    }

    /// Align `a` against `b`, breaking local traceback-start ties with `rng`.
    ///
    /// With a seeded RNG the output is fully reproducible.
    pub fn align_with_rng<T, R>(&self, a: &[T], b: &[T], rng: &mut R) -> Alignment<T>
    where
        T: PartialEq + Clone,
        R: Rng + ?Sized,
    {
        let mode = self.policy.mode();
        log::debug!("{} alignment of {} x {} symbols", mode, a.len(), b.len());

        let mut scoring = init_scoring_matrix(mode, self.policy.gap(), a.len(), b.len());
        let mut pointers = init_pointer_matrix(a.len(), b.len());
        fill(&self.policy, a, b, &mut scoring, &mut pointers);

        let start = select_start(mode, &scoring, rng);
        let trace = traceback(mode, a, b, &scoring, &pointers, start.cell);

        Alignment {
            aligned_a: trace.aligned_a,
            aligned_b: trace.aligned_b,
            warp_path_a: trace.warp_path_a,
            warp_path_b: trace.warp_path_b,
            score: scoring[start.cell],
            scoring_matrix: scoring.without_boundary(),
            start: start.cell,
            tied_starts: start.ties,
        }
    }

    /// Align two strings symbol by symbol (Unicode scalar values).
    pub fn align_str(&self, a: &str, b: &str) -> Alignment<char> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.align(&a, &b)
    }
}
