use crate::alignment::AlignedRead;
use anyhow::{Context, Result};
use noodles::{bam, sam};
use std::io::Read;
use std::path::Path;

pub struct BamInput<R> {
    pub header: sam::Header,
    pub reader: bam::io::Reader<R>,
}

pub fn open_bam(path: &Path) -> Result<BamInput<impl Read>> {
    let mut reader = bam::io::reader::Builder
        .build_from_path(path)
        .with_context(|| format!("failed to open BAM {}", path.display()))?;
    let header = reader
        .read_header()
        .with_context(|| format!("failed to read BAM header from {}", path.display()))?;
    Ok(BamInput { header, reader })
}

impl<R: Read> BamInput<R> {
    /// Decoded records in file order.
    pub fn aligned_reads(&mut self) -> impl Iterator<Item = Result<AlignedRead>> + '_ {
        self.reader.records().map(|result| {
            let record = result.context("failed to read BAM record")?;
            AlignedRead::try_from(&record)
        })
    }
}
