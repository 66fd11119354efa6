//! Library-neutral view of a BAM record: just the fields clip removal needs.

use anyhow::{Context, Result};
use noodles::bam;
use noodles::sam::alignment::record::cigar::op::Kind;
use noodles::sam::alignment::record::cigar::Op;

/// How a CIGAR operation affects the query cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarKind {
    /// `S`: bases present in the record but not aligned. Dropped.
    SoftClip,
    /// `M`, `I`, `=`, `X`: query-consuming bases that are kept.
    Retain,
    /// `D`, `N`, `H`, `P`: no query bases.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarOp {
    pub kind: CigarKind,
    pub len: usize,
}

impl CigarOp {
    pub fn new(kind: CigarKind, len: usize) -> Self {
        Self { kind, len }
    }

    /// Number of query bases this operation covers.
    pub fn query_len(&self) -> usize {
        match self.kind {
            CigarKind::SoftClip | CigarKind::Retain => self.len,
            CigarKind::Skip => 0,
        }
    }
}

impl From<Op> for CigarOp {
    fn from(op: Op) -> Self {
        let kind = match op.kind() {
            Kind::SoftClip => CigarKind::SoftClip,
            Kind::Match
            | Kind::Insertion
            | Kind::SequenceMatch
            | Kind::SequenceMismatch => CigarKind::Retain,
            // Non-query-consuming: Deletion, Skip, HardClip, Pad
            Kind::Deletion | Kind::Skip | Kind::HardClip | Kind::Pad => CigarKind::Skip,
        };
        Self::new(kind, op.len())
    }
}

/// One alignment record, decoded.
///
/// `quality_scores` holds raw Phred values (not ASCII), positionally aligned
/// with `sequence`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedRead {
    pub name: Vec<u8>,
    pub is_unmapped: bool,
    pub cigar: Vec<CigarOp>,
    pub sequence: Vec<u8>,
    pub quality_scores: Vec<u8>,
}

impl AlignedRead {
    /// Total query length implied by the CIGAR.
    pub fn cigar_query_len(&self) -> usize {
        self.cigar.iter().map(CigarOp::query_len).sum()
    }
}

impl TryFrom<&bam::Record> for AlignedRead {
    type Error = anyhow::Error;

    fn try_from(record: &bam::Record) -> Result<Self> {
        let name = record
            .name()
            .map(|n| n.to_vec())
            .unwrap_or_default();
        let is_unmapped = record.flags().is_unmapped();

        // Unmapped reads are skipped downstream; don't bother decoding them.
        if is_unmapped {
            return Ok(Self { name, is_unmapped, ..Self::default() });
        }

        let cigar = record
            .cigar()
            .iter()
            .map(|op| op.map(CigarOp::from))
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| {
                format!("invalid CIGAR in record {}", String::from_utf8_lossy(&name))
            })?;
        let sequence: Vec<u8> = record.sequence().iter().collect();
        let quality_scores = record.quality_scores().as_ref().to_vec();

        Ok(Self {
            name,
            is_unmapped,
            cigar,
            sequence,
            quality_scores,
        })
    }
}
