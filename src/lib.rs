//! unclip-rs: convert BAM alignments to FASTQ with soft-clipped bases removed.
//!
//! # Library usage
//!
//! ```
//! use unclip_rs::{trim_soft_clips, AlignedRead, CigarKind, CigarOp};
//!
//! let read = AlignedRead {
//!     name: b"read1".to_vec(),
//!     is_unmapped: false,
//!     cigar: vec![CigarOp::new(CigarKind::SoftClip, 3), CigarOp::new(CigarKind::Retain, 4)],
//!     sequence: b"AAACCGT".to_vec(),
//!     quality_scores: vec![0, 0, 0, 5, 5, 5, 5],
//! };
//! let trimmed = trim_soft_clips(&read).unwrap();
//! assert_eq!(trimmed.sequence, b"CCGT");
//! assert_eq!(trimmed.quality, b"&&&&");
//! ```

pub mod alignment;
pub mod bam_input;
pub mod cli;
pub mod errors;
pub mod fastq;
pub mod pipeline;
pub mod trim;

// Flat re-exports for the most commonly used types.
pub use alignment::{AlignedRead, CigarKind, CigarOp};
pub use errors::{TrimError, UsageError};
pub use fastq::FastqWriter;
pub use pipeline::{convert, Stats};
pub use trim::{trim_soft_clips, TrimmedRead};
