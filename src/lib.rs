//! # fasta-kit
//!
//! A library for reading, validating and writing FASTA sequence records.
//!
//! Every record is a header line followed by sequence lines. `fasta-kit` parses the
//! header into typed NCBI identifiers (`gb|M73307|AGMA13GT`, `sp|P01013|OVAX_CHICK`,
//! `pdb|1I4L|D`, ...) and free-text descriptions, and classifies the sequence as
//! nucleic acid or amino acid.
//!
//! ## Features
//!
//! - **Typed identifiers**: All twenty NCBI identifier codes, each with validated fields
//! - **Sequence classification**: Nucleic acid is preferred when text fits both alphabets
//! - **Multi-record parsing**: Eager ([`RecordSet::parse`]) or lazy ([`Record::parse_multiple`])
//! - **Layouts**: Interleaved (wrapped) or sequential output
//! - **File I/O**: Transparent gzip, sync and async readers and writers
//!
//! ## Example
//!
//! ```rust
//! use fasta_kit::{Identifier, Record, SequenceKind};
//!
//! let record = Record::parse(">gb|M73307|AGMA13GT\nACGTACGT\nNNNN").unwrap();
//!
//! let id = record.header().identifiers().next().unwrap();
//! assert_eq!(id, &Identifier::gen_bank("M73307", "AGMA13GT").unwrap());
//! assert_eq!(record.data().kind(), SequenceKind::NucleicAcid);
//! assert_eq!(record.to_interleaved_lines(4).unwrap().len(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Value types for sequences, identifiers, headers and records
//! - [`parsing`]: Text parsers for identifiers, headers and records
//! - [`io`]: File and stream readers and writers
//! - [`error`]: The crate error type
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::header::{Description, Header, HeaderItem, HEADER_START};
pub use crate::core::identifier::{Field, Identifier, PART_SEPARATOR};
pub use crate::core::record::{Record, RecordSet};
pub use crate::core::sequence::{
    classify, AminoAcidSequence, NucleicAcidSequence, SequenceData, SequenceKind,
    DEFAULT_LINE_LENGTH,
};
pub use error::{FastaError, Result};
pub use io::{Layout, WriteOptions};
pub use parsing::Records;
