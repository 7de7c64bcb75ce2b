//! Text and CSV output for alignments.
//!
//! [`write_alignment`] renders an EMBOSS-like report: a header with the
//! scoring policy and summary statistics followed by the alignment in blocks
//! of 60 columns with a match line (`|` identical, `.` mismatch, space at gaps).
//!
//! [`write_scoring_matrix`] dumps the boundary-stripped scoring matrix as CSV,
//! with the symbols of B as header and the symbols of A as the first column.
use std::io::Write;

use crate::alignment::Alignment;
use crate::common::AlignError;
use crate::matrix::Matrix;
use crate::scoring::ScoringPolicy;

/// Alignment columns per output block.
pub const BLOCK_WIDTH: usize = 60;

/// Write a human-readable report for `aln` between records `a_id` and `b_id`.
pub fn write_alignment<W: Write>(
    mut w: W,
    a_id: &str,
    b_id: &str,
    policy: &ScoringPolicy,
    aln: &Alignment<char>,
) -> Result<(), AlignError> {
    writeln!(w, "# Pairwise {} alignment", policy.mode())?;
    writeln!(w, "# A: {a_id}")?;
    writeln!(w, "# B: {b_id}")?;
    writeln!(w, "# Match: {}  Mismatch: {}  Gap: {}", policy.match_score(), policy.mismatch(), policy.gap())?;
    writeln!(w, "Score: {}", aln.score)?;
    writeln!(w, "Length: {}", aln.len())?;
    writeln!(w, "Identity: {}/{} ({:.2}%)   Gaps: {}/{} ({:.2}%)",
        aln.identity(), aln.len(), aln.pct_identity(), aln.gaps(), aln.len(), aln.pct_gaps())?;
    writeln!(w, "CIGAR: {}", aln.cigar())?;
    if let (Some((sa, ea)), Some((sb, eb))) = (aln.range_a(), aln.range_b()) {
        writeln!(w, "Range A: {}-{}   Range B: {}-{}", sa + 1, ea, sb + 1, eb)?;
    }
    if aln.tied_starts.len() > 1 {
        writeln!(w, "Traceback start: ({}, {}) chosen from {} tied cells", aln.start.0, aln.start.1, aln.tied_starts.len())?;
    }
    writeln!(w)?;

    let a = aln.gapped_a();
    let b = aln.gapped_b();
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    for (a_block, b_block) in a_chars.chunks(BLOCK_WIDTH).zip(b_chars.chunks(BLOCK_WIDTH)) {
        let mid: String = a_block.iter().zip(b_block).map(|(x, y)| match_symbol(*x, *y)).collect();
        writeln!(w, "A {}", a_block.iter().collect::<String>())?;
        writeln!(w, "  {mid}")?;
        writeln!(w, "B {}", b_block.iter().collect::<String>())?;
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

fn match_symbol(x: char, y: char) -> char {
    if x == crate::alignment::GAP || y == crate::alignment::GAP {
        ' '
    } else if x.eq_ignore_ascii_case(&y) {
        '|'
    } else {
        '.'
    }
}

/// Write `matrix` (shape `len(a) × len(b)`) as CSV.
pub fn write_scoring_matrix<W: Write>(w: W, a: &[char], b: &[char], matrix: &Matrix<i64>) -> Result<(), AlignError> {
    let mut out = csv::Writer::from_writer(w);
    let header: Vec<String> = std::iter::once(String::new()).chain(b.iter().map(char::to_string)).collect();
    out.write_record(&header)?;
    for (sym, row) in a.iter().zip(matrix.iter_rows()) {
        let record: Vec<String> = std::iter::once(sym.to_string()).chain(row.iter().map(i64::to_string)).collect();
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}
