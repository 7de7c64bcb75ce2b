//! The result of a pairwise alignment and summary statistics over it.
use crate::matrix::Matrix;

/// Gap marker used when rendering aligned text.
pub const GAP: char = '-';

/// A reconstructed pairwise alignment.
///
/// `aligned_a` and `aligned_b` always have the same length; `None` marks a gap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment<T> {
    /// Aligned symbols of A, gaps as `None`.
    pub aligned_a: Vec<Option<T>>,
    /// Aligned symbols of B, gaps as `None`.
    pub aligned_b: Vec<Option<T>>,
    /// Zero-based index into A for every alignment column (`-1` before the first symbol).
    pub warp_path_a: Vec<isize>,
    /// Zero-based index into B for every alignment column (`-1` before the first symbol).
    pub warp_path_b: Vec<isize>,
    /// Scoring matrix without its boundary row and column, `len(A) × len(B)`.
    pub scoring_matrix: Matrix<i64>,
    /// Score of this alignment: the corner cell (global) or the start cell (local).
    pub score: i64,
    /// Traceback start in prefix coordinates (boundary included).
    pub start: (usize, usize),
    /// All local-maximum cells when more than one existed, in prefix coordinates.
    pub tied_starts: Vec<(usize, usize)>,
}

impl<T> Alignment<T> {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Iterate over `(a, b)` columns.
    pub fn columns(&self) -> impl Iterator<Item = (Option<&T>, Option<&T>)> + '_ {
        self.aligned_a.iter().map(Option::as_ref).zip(self.aligned_b.iter().map(Option::as_ref))
    }

    /// Number of columns with a gap on either side.
    pub fn gaps(&self) -> usize {
        self.columns().filter(|(x, y)| x.is_none() || y.is_none()).count()
    }

    /// Percent gaps over aligned columns (0..=100).
    pub fn pct_gaps(&self) -> f64 {
        percent(self.gaps(), self.len())
    }

    /// Half-open range of A covered by the alignment, `None` if no symbol of A is aligned.
    pub fn range_a(&self) -> Option<(usize, usize)> {
        covered(&self.aligned_a, &self.warp_path_a)
    }

    /// Half-open range of B covered by the alignment, `None` if no symbol of B is aligned.
    pub fn range_b(&self) -> Option<(usize, usize)> {
        covered(&self.aligned_b, &self.warp_path_b)
    }

    /// CIGAR-like run-length operations (`M` aligned pair, `D` gap in B, `I` gap in A).
    pub fn cigar(&self) -> String {
        let mut ops: Vec<(char, usize)> = Vec::new();
        for (x, y) in self.columns() {
            let op = match (x, y) {
                (Some(_), Some(_)) => 'M',
                (Some(_), None) => 'D',
                _ => 'I',
            };
            push_cigar(&mut ops, op);
        }
        ops.into_iter().map(|(op, len)| format!("{len}{op}")).collect()
    }
}

impl<T: PartialEq> Alignment<T> {
    /// Number of columns with identical symbols.
    pub fn identity(&self) -> usize {
        self.columns().filter(|(x, y)| matches!((x, y), (Some(x), Some(y)) if x == y)).count()
    }

    /// Percent identity over aligned columns (0..=100).
    pub fn pct_identity(&self) -> f64 {
        percent(self.identity(), self.len())
    }
}

impl Alignment<char> {
    /// Aligned A as text, gaps rendered as [`GAP`].
    pub fn gapped_a(&self) -> String {
        render(&self.aligned_a)
    }

    /// Aligned B as text, gaps rendered as [`GAP`].
    pub fn gapped_b(&self) -> String {
        render(&self.aligned_b)
    }
}

fn render(v: &[Option<char>]) -> String {
    v.iter().map(|c| c.unwrap_or(GAP)).collect()
}

fn percent(n: usize, cols: usize) -> f64 {
    (n as f64) * 100.0 / (cols.max(1) as f64)
}

fn covered<T>(aligned: &[Option<T>], warp: &[isize]) -> Option<(usize, usize)> {
    let mut idx = aligned.iter().zip(warp).filter(|(s, _)| s.is_some()).map(|(_, &w)| w as usize);
    let first = idx.next()?;
    let last = idx.last().unwrap_or(first);
    Some((first, last + 1))
}

fn push_cigar(ops: &mut Vec<(char, usize)>, op: char) {
    if let Some(last) = ops.last_mut() {
        if last.0 == op { last.1 += 1; return; }
    }
    ops.push((op, 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Alignment<char> {
        // G-ATTACA / GCA-TGCU
        let a = "G-ATTACA".chars().map(|c| (c != GAP).then_some(c)).collect();
        let b = "GCA-TGCU".chars().map(|c| (c != GAP).then_some(c)).collect();
        Alignment {
            aligned_a: a,
            aligned_b: b,
            warp_path_a: vec![0, 0, 1, 2, 3, 4, 5, 6],
            warp_path_b: vec![0, 1, 2, 2, 3, 4, 5, 6],
            scoring_matrix: Matrix::filled(7, 7, 0),
            score: 0,
            start: (7, 7),
            tied_starts: vec![],
        }
    }

    #[test]
    fn statistics() {
        let aln = sample();
        assert_eq!(aln.len(), 8);
        assert_eq!(aln.gaps(), 2);
        assert_eq!(aln.identity(), 4);
        assert!((aln.pct_identity() - 50.0).abs() < 1e-9);
        assert!((aln.pct_gaps() - 25.0).abs() < 1e-9);
        assert_eq!(aln.cigar(), "1M1I1M1D4M");
        assert_eq!(aln.gapped_a(), "G-ATTACA");
        assert_eq!(aln.gapped_b(), "GCA-TGCU");
    }

    #[test]
    fn ranges_follow_warp_path() {
        let aln = sample();
        assert_eq!(aln.range_a(), Some((0, 7)));
        assert_eq!(aln.range_b(), Some((0, 7)));
    }

    #[test]
    fn empty_alignment() {
        let aln: Alignment<char> = Alignment {
            aligned_a: vec![],
            aligned_b: vec![],
            warp_path_a: vec![],
            warp_path_b: vec![],
            scoring_matrix: Matrix::filled(0, 0, 0),
            score: 0,
            start: (0, 0),
            tied_starts: vec![],
        };
        assert!(aln.is_empty());
        assert_eq!(aln.cigar(), "");
        assert_eq!(aln.pct_identity(), 0.0);
        assert_eq!(aln.range_a(), None);
    }
}
