use anyhow::Result;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;
use unclip_rs::{cli, pipeline};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Initialize tracing subscriber
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            if args.quiet {
                EnvFilter::new("warn")
            } else {
                EnvFilter::new("info")
            }
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    args.validate()?;

    let stats = pipeline::run(&args)?;
    tracing::info!(
        total_reads = stats.total_reads,
        unmapped_reads = stats.unmapped_reads,
        written_reads = stats.written_reads,
        clipped_bases = stats.clipped_bases,
        "unclip-rs: processing complete"
    );
    println!("Finished! Output FASTQ written to: {}", args.output_path().display());
    Ok(())
}
