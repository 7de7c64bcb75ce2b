//! Scoring policy: match / mismatch / gap scores plus the alignment mode.
//!
//! A [`ScoringPolicy`] is built once and then read by every call to
//! [`crate::Aligner::align`]. It is `Copy`, so it can be handed to as many
//! aligners (or threads) as needed.
//!
//! ### Example
//! ```rust
//! use pairwise_align::{AlignMode, ScoringPolicy};
//! let p = ScoringPolicy::new("local", 2, -1, -1).unwrap();
//! assert_eq!(p.mode(), AlignMode::Local);
//! assert!(ScoringPolicy::new("semiglobal", 1, -1, -1).is_err());
//! ```
use std::fmt;
use std::str::FromStr;

use crate::common::AlignError;

/// Alignment mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignMode {
    /// End-to-end alignment (Needleman–Wunsch).
    Global,
    /// Best-scoring substring alignment (Smith–Waterman).
    Local,
}

impl FromStr for AlignMode {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(AlignMode::Global),
            "local" => Ok(AlignMode::Local),
            _ => Err(AlignError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignMode::Global => f.write_str("global"),
            AlignMode::Local => f.write_str("local"),
        }
    }
}

/// Immutable scoring configuration.
///
/// No constraint is placed on the sign or relative size of the scores.
/// Scores are `i64`; callers are responsible for choosing values whose sums
/// over `max(len(A), len(B))` steps fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringPolicy {
    mode: AlignMode,
    match_score: i64,
    mismatch: i64,
    gap: i64,
}

impl ScoringPolicy {
    /// Build a policy from a mode name (`"global"` or `"local"`).
    ///
    /// Fails with [`AlignError::InvalidMode`] for anything else.
    pub fn new(mode: &str, match_score: i64, mismatch: i64, gap: i64) -> Result<Self, AlignError> {
        Ok(Self::with_mode(mode.parse()?, match_score, mismatch, gap))
    }

    /// Build a policy from an already validated mode.
    pub fn with_mode(mode: AlignMode, match_score: i64, mismatch: i64, gap: i64) -> Self {
        Self { mode, match_score, mismatch, gap }
    }

    pub fn mode(&self) -> AlignMode {
        self.mode
    }

    pub fn match_score(&self) -> i64 {
        self.match_score
    }

    pub fn mismatch(&self) -> i64 {
        self.mismatch
    }

    pub fn gap(&self) -> i64 {
        self.gap
    }

    /// Score of aligning `x` against `y`.
    #[inline]
    pub fn pair_score<T: PartialEq + ?Sized>(&self, x: &T, y: &T) -> i64 {
        if x == y { self.match_score } else { self.mismatch }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::with_mode(AlignMode::Global, 1, -1, -1)
    }
}
