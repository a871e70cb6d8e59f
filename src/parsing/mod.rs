//! Parsers turning FASTA text into the [`crate::core`] value types.
//!
//! - **Identifiers**: `code|field|...` text dispatched through a code table
//! - **Headers**: `>`-prefixed lines split into identifiers and descriptions
//! - **Records**: single records and lazily split multi-record text
//!
//! ## Example
//!
//! ```rust
//! use fasta_kit::{Record, RecordSet};
//!
//! let record = Record::parse(">pdb|1I4L|D\nMDSKG").unwrap();
//! assert_eq!(record.data().characters(), "MDSKG");
//!
//! let set = RecordSet::parse(">lcl|1\nACGT\n>lcl|2\nTTTT").unwrap();
//! assert!(set.contains_only_nucleic_acid());
//! ```

pub mod header;
pub mod identifier;
pub mod record;

pub use record::Records;
