//! # pairwise-align
//!
//! Optimal pairwise alignment of two symbol sequences, implemented in Rust.
//!
//! Two modes are supported:
//! - **Global** (Needleman–Wunsch): both sequences are aligned end to end.
//! - **Local** (Smith–Waterman): the best-scoring pair of substrings is aligned.
//!
//! Scoring is a single match score, a single mismatch score and a linear gap
//! score, bundled in an immutable [`ScoringPolicy`]. An [`Aligner`] builds the
//! full `(len(A)+1) × (len(B)+1)` scoring and pointer matrices for each call,
//! fills them, and traces one optimal path back. The result carries the
//! aligned sequences, the warp path (index correspondence between the two
//! inputs) and the scoring matrix with its boundary row and column removed.
//!
//! ## Tie breaking
//! - While filling, the first best move in diagonal, horizontal, vertical order
//!   is recorded.
//! - In local mode several cells may share the maximum score. One of them is
//!   picked at random (use [`Aligner::align_with_rng`] with a seeded RNG for
//!   reproducible output) and the full tie set is logged and returned in
//!   [`Alignment::tied_starts`].
//!
//! ### Example
//! ```
//! use pairwise_align::{Aligner, ScoringPolicy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let policy = ScoringPolicy::new("local", 2, -1, -1).unwrap();
//! let aln = Aligner::new(policy)
//!     .align_with_rng(&['T', 'G', 'T', 'T', 'A', 'C', 'G', 'G'],
//!                     &['G', 'G', 'T', 'T', 'G', 'A', 'C', 'T', 'A'],
//!                     &mut StdRng::seed_from_u64(0));
//! assert_eq!(aln.score, 9);
//! assert_eq!(aln.gapped_a(), "GTT-AC");
//! assert_eq!(aln.gapped_b(), "GTTGAC");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod aligner;
pub mod alignment;
pub mod common;
pub mod fill;
pub mod matrix;
pub mod report;
pub mod scoring;
pub mod traceback;

pub use aligner::Aligner;
pub use alignment::{Alignment, GAP};
pub use common::{parse_fasta, AlignError, FastaRecord};
pub use matrix::{init_pointer_matrix, init_scoring_matrix, Direction, Matrix};
pub use report::{write_alignment, write_scoring_matrix};
pub use scoring::{AlignMode, ScoringPolicy};
pub use traceback::{select_start, traceback, Trace, TracebackStart};
