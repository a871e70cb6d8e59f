//! Command-line interface for fasta-kit.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **inspect**: List the records of a FASTA file with their identifiers and checksums
//! - **reformat**: Re-emit a FASTA file in interleaved or sequential layout
//! - **classify**: Decide whether raw sequence text is nucleic or amino acid
//!
//! ## Usage
//!
//! ```text
//! # Summarize every record
//! fasta-kit inspect proteins.faa
//!
//! # Read from stdin, JSON output for scripting
//! cat proteins.faa | fasta-kit inspect - --format json
//!
//! # Wrap sequences at 60 columns into a gzipped file
//! fasta-kit reformat genome.fa --line-length 60 -o genome.fa.gz
//!
//! # Classify a raw sequence
//! fasta-kit classify ACGTNNACGT
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::core::record::RecordSet;
use crate::io;

pub mod classify;
pub mod inspect;
pub mod reformat;

#[derive(Parser)]
#[command(name = "fasta-kit")]
#[command(version)]
#[command(about = "Parse, inspect and reformat FASTA files")]
#[command(
    long_about = "fasta-kit reads FASTA files, validates their headers against the NCBI identifier syntax and classifies each sequence as nucleic or amino acid.\n\nIt can:\n- Summarize records with their identifiers and MD5 checksums\n- Re-wrap sequences at a chosen line length\n- Classify raw sequence text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the records of a FASTA file
    Inspect(inspect::InspectArgs),

    /// Rewrite a FASTA file with a different line layout
    Reformat(reformat::ReformatArgs),

    /// Classify raw sequence text
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load every record from a path, or from stdin when the path is `-`
pub(crate) fn load_records(input: &Path) -> anyhow::Result<RecordSet> {
    if input.as_os_str() == "-" {
        let stdin = std::io::stdin();
        return io::read_records_from(stdin.lock())
            .context("Failed to parse FASTA from stdin");
    }

    io::read_records(input).with_context(|| format!("Failed to parse {}", input.display()))
}
