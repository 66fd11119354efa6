use crate::alignment::AlignedRead;
use crate::bam_input;
use crate::cli::Args;
use crate::fastq::FastqWriter;
use crate::trim::{clipped_bases, trim_soft_clips};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_reads: u64,
    pub unmapped_reads: u64,
    pub written_reads: u64,
    pub clipped_bases: u64,
}

pub fn run(args: &Args) -> Result<Stats> {
    let out_path = args.output_path();
    let mut bam = bam_input::open_bam(&args.in_bam)?;
    tracing::debug!(
        reference_sequences = bam.header.reference_sequences().len(),
        "read BAM header"
    );

    let out_file = File::create(&out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    let mut writer = FastqWriter::new(BufWriter::new(out_file));

    tracing::info!(
        input = %args.in_bam.display(),
        output = %out_path.display(),
        "converting BAM to FASTQ"
    );
    convert(bam.aligned_reads(), &mut writer)
}

/// Trim every mapped read from `reads` and write it as FASTQ.
///
/// The first malformed record aborts the conversion.
pub fn convert<I, W>(reads: I, writer: &mut FastqWriter<W>) -> Result<Stats>
where
    I: IntoIterator<Item = Result<AlignedRead>>,
    W: Write,
{
    let mut stats = Stats::default();

    for result in reads {
        let read = result?;
        stats.total_reads += 1;
        if read.is_unmapped {
            stats.unmapped_reads += 1;
            continue;
        }

        let trimmed = trim_soft_clips(&read).with_context(|| {
            format!("malformed record {}", String::from_utf8_lossy(&read.name))
        })?;
        writer.write_record(&read.name, &trimmed)?;

        stats.written_reads += 1;
        stats.clipped_bases += clipped_bases(&read.cigar) as u64;
    }

    writer.flush()?;
    Ok(stats)
}
