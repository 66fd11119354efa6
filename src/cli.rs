use crate::errors::UsageError;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "unclip-rs",
    about = "Convert BAM to FASTQ, removing soft-clipped bases",
    version
)]
pub struct Args {
    /// Input BAM file (must be sorted/indexed)
    #[arg(short = 'b', long = "bam", value_name = "BAM")]
    pub in_bam: PathBuf,

    /// Output FASTQ file [default: BAM filename with .fastq]
    #[arg(short = 'o', long = "out", value_name = "FASTQ")]
    pub out_fastq: Option<PathBuf>,

    /// Set logging level to WARN
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Args {
    /// Reject inputs that don't look like BAM.
    pub fn validate(&self) -> Result<(), UsageError> {
        let is_bam = self
            .in_bam
            .to_str()
            .is_some_and(|s| s.ends_with(".bam"));
        if is_bam {
            Ok(())
        } else {
            Err(UsageError::NotBam(self.in_bam.clone()))
        }
    }

    /// `--out` if given, otherwise the input path with a `.fastq` extension.
    pub fn output_path(&self) -> PathBuf {
        self.out_fastq
            .clone()
            .unwrap_or_else(|| default_output_path(&self.in_bam))
    }
}

pub fn default_output_path(in_bam: &Path) -> PathBuf {
    in_bam.with_extension("fastq")
}
