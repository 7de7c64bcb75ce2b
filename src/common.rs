//! Common helpers shared by the aligner and the command-line tool: the crate
//! error type and minimal FASTA parsing.
//!
//! ## FASTA
//! The parser is intentionally permissive and suitable for small/medium files
//! and tests. It supports multi-record inputs and keeps every
//! non-whitespace symbol, uppercased.
//!
//! ## Examples
//! ```rust
//! use pairwise_align::parse_fasta;
//! let recs = parse_fasta(">seq\nACGT\n>p\nPAWHEAE\n");
//! assert_eq!(recs.len(), 2);
//! assert_eq!(recs[0].seq, "ACGT");
//! ```
//!

/// Errors that can be returned by this crate.
#[derive(thiserror::Error, Debug)]
pub enum AlignError {
    /// Returned when a scoring policy is built from an unknown mode name.
    #[error("invalid mode: {0} (expected `global` or `local`)")]
    InvalidMode(String),
    /// Returned when writing a report fails.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when writing the scoring matrix as CSV fails.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// A simple in-memory FASTA record parsed by [`parse_fasta`].
#[derive(Clone, Debug)]
pub struct FastaRecord {
    /// Identifier from the FASTA header (text after '>').
    pub id: String,
    /// Sequence symbols, uppercased. Every character other than whitespace is kept,
    /// so any alphabet can be aligned.
    pub seq: String,
}

/// Parse a minimal FASTA string into a vector of [`FastaRecord`].
///
/// *Lines starting with `>` start a new record.* All other lines are appended
/// (without spaces) to the current sequence. Sequences are uppercased.
/// Text before the first header is ignored.
pub fn parse_fasta(text: &str) -> Vec<FastaRecord> {
    let mut out: Vec<FastaRecord> = vec![];
    let mut id: Option<String> = None;
    let mut seq = String::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(prev) = id.take() {
                out.push(FastaRecord { id: prev, seq: seq.to_ascii_uppercase() });
                seq.clear();
            }
            id = Some(rest.split_whitespace().next().unwrap_or("").to_string());
        } else if id.is_some() {
            seq.push_str(line.trim());
        }
    }
    if let Some(prev) = id {
        out.push(FastaRecord { id: prev, seq: seq.to_ascii_uppercase() });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiline_records() {
        let recs = parse_fasta(">a first\nac\ngt\n>b\nTTg\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id, "a");
        assert_eq!(recs[0].seq, "ACGT");
        assert_eq!(recs[1].id, "b");
        assert_eq!(recs[1].seq, "TTG");
    }

    #[test]
    fn keeps_records_with_empty_sequence() {
        let recs = parse_fasta(">empty\n>full\nA\n");
        assert_eq!(recs.len(), 2);
        assert!(recs[0].seq.is_empty());
        assert_eq!(recs[1].seq, "A");
    }

    #[test]
    fn ignores_text_before_first_header() {
        assert!(parse_fasta("ACGT\n").is_empty());
    }

    #[test]
    fn keeps_any_symbol_alphabet() {
        let recs = parse_fasta(">p\nPAW*x\n>n\nac-gu\n");
        assert_eq!(recs[0].seq, "PAW*X");
        assert_eq!(recs[1].seq, "AC-GU");
    }

    #[test]
    fn invalid_mode_message_names_the_mode() {
        let e = AlignError::InvalidMode("semiglobal".into());
        assert!(e.to_string().contains("semiglobal"));
    }
}
