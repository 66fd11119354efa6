//! Soft-clip removal.
//!
//! A CIGAR partitions the query into contiguous, order-preserving spans, so a
//! single left-to-right cursor is enough: soft-clipped spans are skipped and
//! every other query-consuming span is copied through.

use crate::alignment::{AlignedRead, CigarKind, CigarOp};
use crate::errors::TrimError;

/// Offset between a Phred score and its FASTQ character.
pub const PHRED_OFFSET: u8 = 33;

/// Highest printable FASTQ quality character (`~`, Q93).
const MAX_QUAL_CHAR: u8 = b'~';

/// BAM stores a `*` quality string as 0xFF in every position.
const MISSING_QUAL: u8 = 0xFF;

/// Bases and Phred+33 qualities left after clip removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimmedRead {
    pub sequence: Vec<u8>,
    pub quality: Vec<u8>,
}

impl TrimmedRead {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Remove soft-clipped bases from a mapped read.
///
/// The record is checked before anything is copied: qualities must be present
/// and as long as the sequence, and the CIGAR must consume exactly the
/// sequence length. A record failing any of these is rejected rather than
/// partially trimmed.
pub fn trim_soft_clips(read: &AlignedRead) -> Result<TrimmedRead, TrimError> {
    let seq = read.sequence.as_slice();
    let qual = read.quality_scores.as_slice();

    if qual.len() != seq.len() {
        return Err(TrimError::QualityLength {
            qual_len: qual.len(),
            seq_len: seq.len(),
        });
    }
    if !qual.is_empty() && qual.iter().all(|&q| q == MISSING_QUAL) {
        return Err(TrimError::MissingQualityScores);
    }
    let cigar_len = read.cigar_query_len();
    if cigar_len != seq.len() {
        return Err(TrimError::CigarLength {
            cigar_len,
            seq_len: seq.len(),
        });
    }

    let kept = seq.len() - clipped_bases(&read.cigar);
    let mut sequence = Vec::with_capacity(kept);
    let mut scores = Vec::with_capacity(kept);

    let mut pos = 0usize;
    for op in &read.cigar {
        match op.kind {
            CigarKind::SoftClip => pos += op.len,
            CigarKind::Retain => {
                sequence.extend_from_slice(&seq[pos..pos + op.len]);
                scores.extend_from_slice(&qual[pos..pos + op.len]);
                pos += op.len;
            }
            CigarKind::Skip => {}
        }
    }

    Ok(TrimmedRead {
        sequence,
        quality: encode_phred33(&scores),
    })
}

/// Total soft-clipped bases in a CIGAR.
pub fn clipped_bases(cigar: &[CigarOp]) -> usize {
    cigar
        .iter()
        .filter(|op| op.kind == CigarKind::SoftClip)
        .map(|op| op.len)
        .sum()
}

/// Convert raw Phred scores to FASTQ characters, clamping at `~`.
pub fn encode_phred33(scores: &[u8]) -> Vec<u8> {
    scores
        .iter()
        .map(|&q| q.saturating_add(PHRED_OFFSET).min(MAX_QUAL_CHAR))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::CigarKind::{Retain, Skip, SoftClip};

    fn read(cigar: &[(CigarKind, usize)], seq: &[u8], qual: &[u8]) -> AlignedRead {
        AlignedRead {
            name: b"r1".to_vec(),
            is_unmapped: false,
            cigar: cigar.iter().map(|&(k, n)| CigarOp::new(k, n)).collect(),
            sequence: seq.to_vec(),
            quality_scores: qual.to_vec(),
        }
    }

    #[test]
    fn all_match_is_unchanged() {
        let r = read(&[(Retain, 5)], b"ACGTA", &[10; 5]);
        let t = trim_soft_clips(&r).unwrap();
        assert_eq!(t.sequence, b"ACGTA");
        assert_eq!(t.quality, b"+++++");
    }

    #[test]
    fn leading_clip_is_dropped() {
        let r = read(&[(SoftClip, 3), (Retain, 4)], b"AAACCGT", &[0, 0, 0, 5, 5, 5, 5]);
        let t = trim_soft_clips(&r).unwrap();
        assert_eq!(t.sequence, b"CCGT");
        assert_eq!(t.quality, b"&&&&");
    }

    #[test]
    fn trailing_clip_is_dropped() {
        let r = read(&[(Retain, 4), (SoftClip, 2)], b"CCGTAA", &[30, 31, 32, 33, 2, 2]);
        let t = trim_soft_clips(&r).unwrap();
        assert_eq!(t.sequence, b"CCGT");
        assert_eq!(t.quality, b"?@AB");
    }

    #[test]
    fn interior_clip_joins_retained_spans() {
        let r = read(
            &[(Retain, 2), (SoftClip, 2), (Retain, 2)],
            b"ACTTGG",
            &[1, 2, 3, 4, 5, 6],
        );
        let t = trim_soft_clips(&r).unwrap();
        assert_eq!(t.sequence, b"ACGG");
        assert_eq!(t.quality, b"\"#&'");
    }

    #[test]
    fn reference_only_ops_leave_cursor_in_place() {
        // 2S 3M 4D 2I 100N 3M 6H
        let r = read(
            &[(SoftClip, 2), (Retain, 3), (Skip, 4), (Retain, 2), (Skip, 100), (Retain, 3), (Skip, 6)],
            b"NNACGTTGCA",
            &[0, 0, 10, 10, 10, 20, 20, 30, 30, 30],
        );
        let t = trim_soft_clips(&r).unwrap();
        assert_eq!(t.sequence, b"ACGTTGCA");
        assert_eq!(t.quality, b"+++55???");
    }

    #[test]
    fn fully_clipped_read_is_empty() {
        let r = read(&[(SoftClip, 4)], b"ACGT", &[9; 4]);
        let t = trim_soft_clips(&r).unwrap();
        assert!(t.is_empty());
        assert!(t.quality.is_empty());
    }

    #[test]
    fn lengths_always_agree() {
        let r = read(
            &[(SoftClip, 1), (Retain, 3), (SoftClip, 1), (Retain, 1), (SoftClip, 2)],
            b"ACGTACGT",
            &[40; 8],
        );
        let t = trim_soft_clips(&r).unwrap();
        assert_eq!(t.sequence.len(), t.quality.len());
        assert_eq!(t.len(), 8 - clipped_bases(&r.cigar));
    }

    #[test]
    fn cigar_longer_than_sequence_is_rejected() {
        let r = read(&[(SoftClip, 3), (Retain, 5)], b"ACGTACG", &[20; 7]);
        assert_eq!(
            trim_soft_clips(&r),
            Err(TrimError::CigarLength { cigar_len: 8, seq_len: 7 })
        );
    }

    #[test]
    fn cigar_shorter_than_sequence_is_rejected() {
        let r = read(&[(Retain, 3)], b"ACGT", &[20; 4]);
        assert_eq!(
            trim_soft_clips(&r),
            Err(TrimError::CigarLength { cigar_len: 3, seq_len: 4 })
        );
    }

    #[test]
    fn quality_length_mismatch_is_rejected() {
        let r = read(&[(Retain, 4)], b"ACGT", &[20; 3]);
        assert_eq!(
            trim_soft_clips(&r),
            Err(TrimError::QualityLength { qual_len: 3, seq_len: 4 })
        );
    }

    #[test]
    fn missing_qualities_are_rejected() {
        let r = read(&[(Retain, 4)], b"ACGT", &[0xFF; 4]);
        assert_eq!(trim_soft_clips(&r), Err(TrimError::MissingQualityScores));
    }

    #[test]
    fn phred_encoding_clamps_at_tilde() {
        assert_eq!(encode_phred33(&[0, 40, 93, 94, 200]), b"!I~~~");
    }
}
