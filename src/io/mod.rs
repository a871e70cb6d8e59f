//! File and stream collaborators around the core parsers.
//!
//! Readers materialise all lines and hand them to [`crate::Record::parse_lines`]
//! or [`crate::RecordSet::parse_lines`]; writers render records through
//! [`crate::Record::to_interleaved_lines`] / [`crate::Record::to_sequential_lines`].
//! Paths ending in `.gz` or `.bgz` are compressed/decompressed transparently.
//!
//! Supported extensions:
//! - `.fasta`, `.fa` (generic)
//! - `.faa` (amino acid), `.fna` (nucleic acid), `.ffn` (nucleotide of gene regions)
//! - `.frn` (non-coding RNA), `.mpfa` (multiple protein)
//! - any of the above followed by `.gz` or `.bgz`

use std::path::Path;

pub mod reader;
pub mod writer;

pub use reader::{
    read_record, read_record_async, read_record_from, read_records, read_records_async,
    read_records_from,
};
pub use writer::{
    write_records, write_records_to_path, write_records_to_path_async, Layout, WriteOptions,
};

/// Conventional FASTA filename extensions (lowercase, with the leading dot)
pub mod extensions {
    pub const GENERIC_LONG: &str = ".fasta";
    pub const GENERIC_SHORT: &str = ".fa";
    pub const AMINO_ACID: &str = ".faa";
    pub const NUCLEIC_ACID: &str = ".fna";
    pub const NUCLEOTIDE_OF_GENE_REGIONS: &str = ".ffn";
    pub const NON_CODING_RNA: &str = ".frn";
    pub const MULTIPLE_PROTEIN: &str = ".mpfa";

    pub const ALL: [&str; 7] = [
        GENERIC_LONG,
        GENERIC_SHORT,
        AMINO_ACID,
        NUCLEIC_ACID,
        NUCLEOTIDE_OF_GENE_REGIONS,
        NON_CODING_RNA,
        MULTIPLE_PROTEIN,
    ];
}

const COMPRESSED_SUFFIXES: [&str; 2] = [".gz", ".bgz"];

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    COMPRESSED_SUFFIXES
        .iter()
        .any(|suffix| path_str.ends_with(suffix))
}

/// Check if the path has a FASTA extension, optionally gzip compressed
pub fn is_fasta_file(path: &Path) -> bool {
    let mut path_str = path.to_string_lossy().to_lowercase();

    for suffix in COMPRESSED_SUFFIXES {
        if let Some(stripped) = path_str.strip_suffix(suffix) {
            path_str = stripped.to_string();
            break;
        }
    }

    extensions::ALL.iter().any(|ext| path_str.ends_with(ext))
}
