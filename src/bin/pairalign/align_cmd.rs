use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::Args;
use pairwise_align::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Options shared by the `global` and `local` subcommands.
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// A-sequence FASTA file (first record used).
    #[arg(long, value_name="FILE")]
    pub asequence: PathBuf,
    /// B-sequence FASTA file (first record used).
    #[arg(long, value_name="FILE")]
    pub bsequence: PathBuf,
    /// Seed for breaking ties between equally good local traceback starts.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output file for a human-readable alignment. Defaults to `<mode>.txt`.
    #[arg(long)]
    pub outfile: Option<PathBuf>,
    /// Optional CSV file receiving the scoring matrix.
    #[arg(long, value_name="FILE")]
    pub matrix_out: Option<PathBuf>,
}

/// Options for the `global` subcommand.
#[derive(Debug, Args)]
pub struct GlobalCmd {
    /// Score for a match.
    #[arg(long, default_value_t=1, allow_negative_numbers=true)]
    pub match_score: i64,
    /// Score for a mismatch (usually negative).
    #[arg(long, default_value_t=-1, allow_negative_numbers=true)]
    pub mismatch: i64,
    /// Score for a gap (usually negative).
    #[arg(long, default_value_t=-1, allow_negative_numbers=true)]
    pub gap: i64,
    #[command(flatten)]
    pub args: AlignArgs,
}

/// Options for the `local` subcommand.
#[derive(Debug, Args)]
pub struct LocalCmd {
    /// Score for a match.
    #[arg(long, default_value_t=2, allow_negative_numbers=true)]
    pub match_score: i64,
    /// Score for a mismatch (usually negative).
    #[arg(long, default_value_t=-1, allow_negative_numbers=true)]
    pub mismatch: i64,
    /// Score for a gap (usually negative).
    #[arg(long, default_value_t=-1, allow_negative_numbers=true)]
    pub gap: i64,
    #[command(flatten)]
    pub args: AlignArgs,
}

impl GlobalCmd {
    pub fn into_parts(self) -> (ScoringPolicy, AlignArgs) {
        (ScoringPolicy::with_mode(AlignMode::Global, self.match_score, self.mismatch, self.gap), self.args)
    }
}

impl LocalCmd {
    pub fn into_parts(self) -> (ScoringPolicy, AlignArgs) {
        (ScoringPolicy::with_mode(AlignMode::Local, self.match_score, self.mismatch, self.gap), self.args)
    }
}

fn read_first(path: &Path) -> Result<FastaRecord> {
    let mut s = String::new();
    File::open(path).with_context(|| format!("open FASTA: {}", path.display()))?.read_to_string(&mut s)?;
    parse_fasta(&s).into_iter().next().ok_or_else(|| anyhow::anyhow!("no FASTA records in {}", path.display()))
}

pub fn run(policy: ScoringPolicy, args: AlignArgs) -> Result<()> {
    let a = read_first(&args.asequence)?;
    let b = read_first(&args.bsequence)?;
    log::info!("Aligning {} ({} symbols) against {} ({} symbols)", a.id, a.seq.len(), b.id, b.seq.len());

    let a_syms: Vec<char> = a.seq.chars().collect();
    let b_syms: Vec<char> = b.seq.chars().collect();
    let aligner = Aligner::new(policy);
    let aln = match args.seed {
        Some(seed) => aligner.align_with_rng(&a_syms, &b_syms, &mut StdRng::seed_from_u64(seed)),
        None => aligner.align(&a_syms, &b_syms),
    };

    let outfile = args.outfile.unwrap_or_else(|| PathBuf::from(format!("{}.txt", policy.mode())));
    let f = File::create(&outfile).with_context(|| format!("create {}", outfile.display()))?;
    write_alignment(BufWriter::new(f), &a.id, &b.id, &policy, &aln)
        .with_context(|| format!("write {}", outfile.display()))?;
    log::info!("Score {} over {} columns written to {}", aln.score, aln.len(), outfile.display());

    if let Some(path) = &args.matrix_out {
        let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
        write_scoring_matrix(BufWriter::new(f), &a_syms, &b_syms, &aln.scoring_matrix)
            .with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_writes_report_and_matrix() {
        let dir = std::env::temp_dir().join(format!("pairalign-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a.fa"), ">a\nGATTACA\n").unwrap();
        std::fs::write(dir.join("b.fa"), ">b\nGCATGCU\n").unwrap();
        let args = AlignArgs {
            asequence: dir.join("a.fa"),
            bsequence: dir.join("b.fa"),
            seed: Some(1),
            outfile: Some(dir.join("out.txt")),
            matrix_out: Some(dir.join("matrix.csv")),
        };
        run(ScoringPolicy::default(), args).unwrap();
        let report = std::fs::read_to_string(dir.join("out.txt")).unwrap();
        assert!(report.contains("Score: 0"));
        let csv = std::fs::read_to_string(dir.join("matrix.csv")).unwrap();
        assert_eq!(csv.lines().next(), Some(",G,C,A,T,G,C,U"));
        assert_eq!(csv.lines().count(), 8);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_records_are_an_error() {
        let dir = std::env::temp_dir().join(format!("pairalign-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("empty.fa"), "").unwrap();
        let err = read_first(&dir.join("empty.fa")).unwrap_err();
        assert!(err.to_string().contains("no FASTA records"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
