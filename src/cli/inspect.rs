//! Inspect command - one summary row per record.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{load_records, OutputFormat};
use crate::core::record::{Record, RecordSet};

#[derive(Args)]
pub struct InspectArgs {
    /// Input FASTA file, optionally gzipped. Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

#[derive(Debug, Serialize)]
struct RecordSummary {
    number: usize,
    identifiers: Vec<String>,
    description: String,
    kind: String,
    length: usize,
    md5: String,
}

impl RecordSummary {
    fn new(number: usize, record: &Record) -> Self {
        let header = record.header();
        Self {
            number,
            identifiers: header.identifiers().map(ToString::to_string).collect(),
            description: header
                .descriptions()
                .map(|d| d.text())
                .collect::<Vec<_>>()
                .join(" "),
            kind: record.data().kind().to_string(),
            length: record.data().len(),
            md5: record.data().md5(),
        }
    }
}

/// Execute inspect subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or any record fails to parse.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InspectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = load_records(&args.input)?;

    if verbose {
        eprintln!("Parsed {} records from {}", records.len(), args.input.display());
    }

    let summaries = summarize(&records);
    match format {
        OutputFormat::Text => print_text(&records, &summaries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Tsv => print_tsv(&summaries),
    }

    Ok(())
}

fn summarize(records: &RecordSet) -> Vec<RecordSummary> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| RecordSummary::new(i + 1, record))
        .collect()
}

fn print_text(records: &RecordSet, summaries: &[RecordSummary]) {
    println!("Records: {}", summaries.len());
    if records.is_empty() {
        return;
    }
    if records.contains_only_nucleic_acid() {
        println!("Content: nucleic acid only");
    } else if records.contains_only_amino_acid() {
        println!("Content: amino acid only");
    } else {
        println!("Content: mixed");
    }
    println!("{}", "=".repeat(60));

    for s in summaries {
        println!("\n#{}", s.number);
        if !s.identifiers.is_empty() {
            println!("  Identifiers: {}", s.identifiers.join(", "));
        }
        if !s.description.is_empty() {
            println!("  Description: {}", s.description);
        }
        println!("  Kind: {}", s.kind);
        println!("  Length: {}", s.length);
        println!("  MD5: {}", s.md5);
    }
}

fn print_tsv(summaries: &[RecordSummary]) {
    println!("number\tidentifiers\tdescription\tkind\tlength\tmd5");
    for s in summaries {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            s.number,
            s.identifiers.join(","),
            s.description,
            s.kind,
            s.length,
            s.md5
        );
    }
}
