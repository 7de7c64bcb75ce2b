//! Traceback: choosing where to start and walking the pointer matrix back.
//!
//! Coordinates here are *prefix coordinates*: `(i, j)` is a cell of the full
//! `(len(A)+1) × (len(B)+1)` matrix, boundary included.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::matrix::{Direction, Matrix};
use crate::scoring::AlignMode;

/// Where a traceback begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracebackStart {
    /// The chosen cell.
    pub cell: (usize, usize),
    /// Every cell tied for the local maximum, row-major, when there is more
    /// than one. Empty otherwise (and always empty in global mode).
    pub ties: Vec<(usize, usize)>,
}

/// Pick the traceback start.
///
/// Global alignments start in the bottom-right corner. Local alignments start
/// at a cell holding the maximum score; when several cells share it, one is
/// drawn from `rng` and the tie set is logged.
pub fn select_start<R: Rng + ?Sized>(mode: AlignMode, scoring: &Matrix<i64>, rng: &mut R) -> TracebackStart {
    let corner = (scoring.rows().saturating_sub(1), scoring.cols().saturating_sub(1));
    if mode == AlignMode::Global {
        return TracebackStart { cell: corner, ties: Vec::new() };
    }

    let best = scoring.cells().map(|(_, &v)| v).max().unwrap_or(0);
    let mut ties: Vec<(usize, usize)> = scoring
        .cells()
        .filter(|&(_, &v)| v == best)
        .map(|(cell, _)| cell)
        .collect();
    if ties.len() <= 1 {
        let cell = ties.pop().unwrap_or(corner);
        return TracebackStart { cell, ties };
    }

    let cell = ties.choose(rng).copied().unwrap_or(corner);
    log::info!(
        "Multiple possible traceback starts (score {}): {}",
        best,
        ties.iter().map(|(i, j)| format!("({i}, {j})")).collect::<Vec<_>>().join(", ")
    );
    log::info!("Chose random traceback start from choices: ({}, {})", cell.0, cell.1);
    TracebackStart { cell, ties }
}

/// Output of [`traceback`], in start-to-end order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<T> {
    pub aligned_a: Vec<Option<T>>,
    pub aligned_b: Vec<Option<T>>,
    pub warp_path_a: Vec<isize>,
    pub warp_path_b: Vec<isize>,
}

/// Walk `pointers` back from `start`.
///
/// Global stops at `(0, 0)`; local stops on the first cell whose score is not
/// positive. Each step records `(i - 1, j - 1)` of the cell it leaves, so a
/// gap step repeats the index of the sequence that did not advance, and a gap
/// before the first symbol of a sequence is recorded as `-1`.
pub fn traceback<T: Clone>(
    mode: AlignMode,
    a: &[T],
    b: &[T],
    scoring: &Matrix<i64>,
    pointers: &Matrix<Direction>,
    start: (usize, usize),
) -> Trace<T> {
    let (mut i, mut j) = start;
    let mut aligned_a = Vec::new();
    let mut aligned_b = Vec::new();
    let mut warp_path_a = Vec::new();
    let mut warp_path_b = Vec::new();

    loop {
        let done = match mode {
            AlignMode::Global => i == 0 && j == 0,
            AlignMode::Local => scoring[(i, j)] <= 0,
        };
        if done {
            break;
        }
        warp_path_a.push(i as isize - 1);
        warp_path_b.push(j as isize - 1);
        match pointers[(i, j)] {
            Direction::Diagonal => {
                aligned_a.push(Some(a[i - 1].clone()));
                aligned_b.push(Some(b[j - 1].clone()));
                i -= 1;
                j -= 1;
            }
            Direction::Horizontal => {
                aligned_a.push(Some(a[i - 1].clone()));
                aligned_b.push(None);
                i -= 1;
            }
            Direction::Vertical => {
                aligned_a.push(None);
                aligned_b.push(Some(b[j - 1].clone()));
                j -= 1;
            }
        }
    }

    aligned_a.reverse();
    aligned_b.reverse();
    warp_path_a.reverse();
    warp_path_b.reverse();
    Trace { aligned_a, aligned_b, warp_path_a, warp_path_b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::fill;
    use crate::matrix::{init_pointer_matrix, init_scoring_matrix};
    use crate::scoring::ScoringPolicy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn matrices(policy: &ScoringPolicy, a: &[char], b: &[char]) -> (Matrix<i64>, Matrix<Direction>) {
        let mut s = init_scoring_matrix(policy.mode(), policy.gap(), a.len(), b.len());
        let mut p = init_pointer_matrix(a.len(), b.len());
        fill(policy, a, b, &mut s, &mut p);
        (s, p)
    }

    fn gapped(v: &[Option<char>]) -> String {
        v.iter().map(|c| c.unwrap_or('-')).collect()
    }

    #[test]
    fn global_start_is_corner() {
        let s = init_scoring_matrix(AlignMode::Global, -1, 4, 2);
        let start = select_start(AlignMode::Global, &s, &mut StdRng::seed_from_u64(1));
        assert_eq!(start, TracebackStart { cell: (4, 2), ties: vec![] });
    }

    #[test]
    fn local_unique_maximum_has_no_ties() {
        let policy = ScoringPolicy::new("local", 2, -1, -1).unwrap();
        let a: Vec<char> = "TGTTACGG".chars().collect();
        let b: Vec<char> = "GGTTGACTA".chars().collect();
        let (s, _) = matrices(&policy, &a, &b);
        let start = select_start(AlignMode::Local, &s, &mut StdRng::seed_from_u64(1));
        assert_eq!(start.cell, (6, 7));
        assert!(start.ties.is_empty());
    }

    #[test]
    fn local_ties_are_all_reported() {
        let policy = ScoringPolicy::new("local", 1, -1, -1).unwrap();
        let a: Vec<char> = "ABXAB".chars().collect();
        let b: Vec<char> = "AB".chars().collect();
        let (s, _) = matrices(&policy, &a, &b);
        for seed in 0..8 {
            let start = select_start(AlignMode::Local, &s, &mut StdRng::seed_from_u64(seed));
            assert_eq!(start.ties, vec![(2, 2), (5, 2)]);
            assert!(start.ties.contains(&start.cell));
        }
    }

    #[test]
    fn global_traceback_against_empty() {
        let policy = ScoringPolicy::default();
        let a: Vec<char> = "ACGT".chars().collect();
        let (s, p) = matrices(&policy, &a, &[]);
        let t = traceback(AlignMode::Global, &a, &[], &s, &p, (4, 0));
        assert_eq!(gapped(&t.aligned_a), "ACGT");
        assert_eq!(gapped(&t.aligned_b), "----");
        assert_eq!(t.warp_path_a, vec![0, 1, 2, 3]);
        assert_eq!(t.warp_path_b, vec![-1, -1, -1, -1]);
    }

    #[test]
    fn global_traceback_gattaca() {
        let policy = ScoringPolicy::default();
        let a: Vec<char> = "GATTACA".chars().collect();
        let b: Vec<char> = "GCATGCU".chars().collect();
        let (s, p) = matrices(&policy, &a, &b);
        let t = traceback(AlignMode::Global, &a, &b, &s, &p, (7, 7));
        assert_eq!(gapped(&t.aligned_a), "G-ATTACA");
        assert_eq!(gapped(&t.aligned_b), "GCA-TGCU");
        assert_eq!(t.warp_path_a, vec![0, 0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(t.warp_path_b, vec![0, 1, 2, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn local_traceback_stops_at_zero() {
        let policy = ScoringPolicy::new("local", 2, -1, -1).unwrap();
        let a: Vec<char> = "TGTTACGG".chars().collect();
        let b: Vec<char> = "GGTTGACTA".chars().collect();
        let (s, p) = matrices(&policy, &a, &b);
        let t = traceback(AlignMode::Local, &a, &b, &s, &p, (6, 7));
        assert_eq!(gapped(&t.aligned_a), "GTT-AC");
        assert_eq!(gapped(&t.aligned_b), "GTTGAC");
        assert_eq!(t.warp_path_a, vec![1, 2, 3, 3, 4, 5]);
        assert_eq!(t.warp_path_b, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn local_traceback_from_zero_cell_is_empty() {
        let policy = ScoringPolicy::new("local", 1, -1, -1).unwrap();
        let a: Vec<char> = "AAA".chars().collect();
        let b: Vec<char> = "TTT".chars().collect();
        let (s, p) = matrices(&policy, &a, &b);
        let t = traceback(AlignMode::Local, &a, &b, &s, &p, (2, 2));
        assert!(t.aligned_a.is_empty() && t.warp_path_b.is_empty());
    }
}
