use std::path::PathBuf;
use thiserror::Error;

/// Problems with the command line, detected before any record is read.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Input file does not have '.bam' extension: {}", .0.display())]
    NotBam(PathBuf),
}

/// A mapped record whose CIGAR, sequence and qualities do not agree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrimError {
    /// CIGAR query length disagrees with the stored sequence.
    #[error("CIGAR consumes {cigar_len} query bases but the sequence has {seq_len}")]
    CigarLength { cigar_len: usize, seq_len: usize },

    #[error("{qual_len} quality scores for a sequence of {seq_len} bases")]
    QualityLength { qual_len: usize, seq_len: usize },

    /// Qualities stored as `*` (all 0xFF in BAM).
    #[error("record has no quality scores")]
    MissingQualityScores,
}
