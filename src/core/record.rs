use std::fmt;

use serde::Serialize;

use crate::core::header::Header;
use crate::core::sequence::{SequenceData, SequenceKind};
use crate::error::Result;

/// One FASTA record: a header line plus its sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    header: Header,
    data: SequenceData,
}

impl Record {
    #[must_use]
    pub fn new(header: Header, data: SequenceData) -> Self {
        Self { header, data }
    }

    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[must_use]
    pub fn data(&self) -> &SequenceData {
        &self.data
    }

    #[must_use]
    pub fn into_parts(self) -> (Header, SequenceData) {
        (self.header, self.data)
    }

    /// Header line followed by the sequence wrapped at `line_length` columns.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_interleaved_lines(&self, line_length: usize) -> Result<Vec<String>> {
        let body = self.data.to_lines(line_length)?;
        let mut lines = Vec::with_capacity(body.len() + 1);
        lines.push(self.header.to_string());
        lines.extend(body);
        Ok(lines)
    }

    /// Header line followed by the whole sequence on one line
    #[must_use]
    pub fn to_sequential_lines(&self) -> Vec<String> {
        vec![self.header.to_string(), self.data.to_string()]
    }
}

/// Renders the sequential form, one line per `\n`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header, self.data)
    }
}

/// Ordered records parsed from one multi-record text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// True if every record holds amino acid data (vacuously true when empty)
    #[must_use]
    pub fn contains_only_amino_acid(&self) -> bool {
        self.all_of_kind(SequenceKind::AminoAcid)
    }

    /// True if every record holds nucleic acid data (vacuously true when empty)
    #[must_use]
    pub fn contains_only_nucleic_acid(&self) -> bool {
        self.all_of_kind(SequenceKind::NucleicAcid)
    }

    fn all_of_kind(&self, kind: SequenceKind) -> bool {
        self.records.iter().all(|record| record.data.kind() == kind)
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_interleaved_lines(&self, line_length: usize) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for record in &self.records {
            lines.extend(record.to_interleaved_lines(line_length)?);
        }
        Ok(lines)
    }

    #[must_use]
    pub fn to_sequential_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(Record::to_sequential_lines)
            .collect()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
