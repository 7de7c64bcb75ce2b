//! Fill pass over the scoring and pointer matrices.
use crate::matrix::{Direction, Matrix};
use crate::scoring::{AlignMode, ScoringPolicy};

/// Compute every interior cell of `scoring` and record the chosen move in
/// `pointers`.
///
/// Both matrices must be `(a.len()+1) × (b.len()+1)` with their boundaries
/// already initialized (see [`crate::matrix::init_scoring_matrix`]).
///
/// Ties go to the first candidate in diagonal, horizontal, vertical order.
/// In local mode a negative maximum is clamped to 0 and the pointer for that
/// cell is left untouched.
pub fn fill<T: PartialEq>(
    policy: &ScoringPolicy,
    a: &[T],
    b: &[T],
    scoring: &mut Matrix<i64>,
    pointers: &mut Matrix<Direction>,
) {
    debug_assert_eq!((scoring.rows(), scoring.cols()), (a.len() + 1, b.len() + 1));
    debug_assert_eq!((pointers.rows(), pointers.cols()), (a.len() + 1, b.len() + 1));
    let gap = policy.gap();
    let local = policy.mode() == AlignMode::Local;

    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            let candidates = [
                (scoring[(i, j)] + policy.pair_score(x, y), Direction::Diagonal),
                (scoring[(i, j + 1)] + gap, Direction::Horizontal),
                (scoring[(i + 1, j)] + gap, Direction::Vertical),
            ];
            let (best, dir) = candidates
                .into_iter()
                .reduce(|acc, c| if c.0 > acc.0 { c } else { acc })
                .unwrap_or(candidates[0]);
            if local && best < 0 {
                scoring[(i + 1, j + 1)] = 0;
            } else {
                scoring[(i + 1, j + 1)] = best;
                pointers[(i + 1, j + 1)] = dir;
            }
        }
    }
}
