//! Reformat command - parse a FASTA file and write it back out with a chosen layout.

use std::io::{stdout, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_records, OutputFormat};
use crate::core::sequence::DEFAULT_LINE_LENGTH;
use crate::io::{self, Layout, WriteOptions};

#[derive(Args)]
pub struct ReformatArgs {
    /// Input FASTA file, optionally gzipped. Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (stdout if omitted). A `.gz` suffix enables compression
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of sequence characters per line
    #[arg(short = 'w', long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: usize,

    /// Write each sequence on a single line
    #[arg(long, conflicts_with = "line_length")]
    pub sequential: bool,
}

impl ReformatArgs {
    fn write_options(&self) -> WriteOptions {
        if self.sequential {
            WriteOptions {
                layout: Layout::Sequential,
                line_length: self.line_length,
            }
        } else {
            WriteOptions::interleaved(self.line_length)
        }
    }
}

/// Execute reformat subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, the line length is zero,
/// or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReformatArgs, _format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = args.write_options();
    options.validate()?;

    let records = load_records(&args.input)?;

    match &args.output {
        Some(path) => {
            io::write_records_to_path(path, &records, &options)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if verbose {
                eprintln!("Wrote {} records to {}", records.len(), path.display());
            }
        }
        None => {
            let stdout = stdout();
            io::write_records(BufWriter::new(stdout.lock()), &records, &options)?;
        }
    }

    Ok(())
}
