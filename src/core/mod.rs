//! Core value types for FASTA records.
//!
//! - [`SequenceData`]: validated nucleic or amino acid characters
//! - [`Identifier`]: a structured header identifier, one variant per database convention
//! - [`Description`], [`HeaderItem`], [`Header`]: the parsed header line
//! - [`Record`], [`RecordSet`]: a header with its sequence, and ordered collections of them
//!
//! ## Identifier Codes
//!
//! | Code | Convention | Fields |
//! |------|------------|--------|
//! | bbm  | GenInfo backbone moltype | integer |
//! | bbs  | GenInfo backbone seqid | integer |
//! | gi   | GenInfo integrated database | integer |
//! | gim  | GenInfo import ID | integer |
//! | lcl  | Local | value |
//! | gb, emb, dbj | GenBank, EMBL, DDBJ | accession, locus |
//! | pir, prf, ref, sp, tr | PIR, PRF, RefSeq, SWISS-PROT, TrEMBL | accession, name |
//! | tpd, tpe, tpg | Third-party DDBJ, EMBL, GenBank | accession, name |
//! | pdb  | Brookhaven Protein Data Bank | entry, chain |
//! | gnl  | General database reference | database, value |
//! | pat  | Patent | country, patent, sequence number |
//! | pgp  | Pre-grant patent | country, application number, sequence number |
//!
//! All values are immutable once built; every constructor validates its input.

pub mod header;
pub mod identifier;
pub mod record;
pub mod sequence;

pub use header::{Description, Header, HeaderItem};
pub use identifier::{Field, Identifier};
pub use record::{Record, RecordSet};
pub use sequence::{AminoAcidSequence, NucleicAcidSequence, SequenceData, SequenceKind};
