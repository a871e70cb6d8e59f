//! Sequence data and the nucleic/amino acid classifier.
//!
//! Sequence text is cleaned the same way for both alphabets: all whitespace
//! (including line breaks) is removed, the remaining characters are checked
//! case-insensitively against the alphabet, and the stored form is uppercase.
//!
//! | Kind | Alphabet |
//! |------|----------|
//! | Nucleic acid | `ACGTURYKMSWBDHVN-` |
//! | Amino acid | `A`-`Z`, `*` (translation stop), `-` (gap) |
//!
//! [`classify`] tries the nucleic acid alphabet first, so text valid under both
//! alphabets (for example `ACGT`) is always a nucleic acid sequence.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FastaError, Result};

/// Default maximum length of each line of a wrapped sequence
pub const DEFAULT_LINE_LENGTH: usize = 80;

const NUCLEIC_ACID_ALPHABET: &[u8] = b"ACGTURYKMSWBDHVN-";

/// Which alphabet a sequence was validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    NucleicAcid,
    AminoAcid,
}

impl SequenceKind {
    fn accepts(self, c: char) -> bool {
        if !c.is_ascii() {
            return false;
        }
        let upper = c.to_ascii_uppercase();
        match self {
            Self::NucleicAcid => NUCLEIC_ACID_ALPHABET.contains(&(upper as u8)),
            Self::AminoAcid => upper.is_ascii_uppercase() || upper == '*' || upper == '-',
        }
    }

    /// Strip whitespace, validate and uppercase. `None` if any character is
    /// outside the alphabet.
    fn clean(self, text: &str) -> Option<String> {
        let mut cleaned = String::with_capacity(text.len());
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            if !self.accepts(c) {
                return None;
            }
            cleaned.push(c.to_ascii_uppercase());
        }
        Some(cleaned)
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NucleicAcid => write!(f, "nucleic acid"),
            Self::AminoAcid => write!(f, "amino acid"),
        }
    }
}

/// Split validated (ASCII) characters into chunks of at most `line_length`.
fn split_into_lines(characters: &str, line_length: usize) -> Result<Vec<String>> {
    if line_length < 1 {
        return Err(FastaError::LineLength(line_length));
    }

    let mut lines = Vec::with_capacity(characters.len().div_ceil(line_length));
    let mut start = 0;
    while start < characters.len() {
        let end = (start + line_length).min(characters.len());
        lines.push(characters[start..end].to_string());
        start = end;
    }
    Ok(lines)
}

fn join_lines(characters: &str, line_length: usize) -> Result<String> {
    if line_length == 1 {
        return Ok(characters.to_string());
    }
    Ok(split_into_lines(characters, line_length)?.join("\n"))
}

/// Nucleic acid sequence characters, whitespace-free and uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NucleicAcidSequence {
    characters: String,
}

impl NucleicAcidSequence {
    /// Parse nucleic acid text. Empty text is a valid (empty) sequence.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::Format` if any non-whitespace character is outside
    /// the nucleic acid alphabet.
    pub fn parse(text: &str) -> Result<Self> {
        Self::try_parse(text).ok_or_else(|| {
            FastaError::format("The supplied characters are not a valid nucleic acid sequence.")
        })
    }

    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        SequenceKind::NucleicAcid
            .clean(text)
            .map(|characters| Self { characters })
    }

    #[must_use]
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_lines(&self, line_length: usize) -> Result<Vec<String>> {
        split_into_lines(&self.characters, line_length)
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_multiline_string(&self, line_length: usize) -> Result<String> {
        join_lines(&self.characters, line_length)
    }
}

impl FromStr for NucleicAcidSequence {
    type Err = FastaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NucleicAcidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.characters)
    }
}

/// Amino acid sequence characters, whitespace-free and uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AminoAcidSequence {
    characters: String,
}

impl AminoAcidSequence {
    /// Parse amino acid text. Empty text is a valid (empty) sequence.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::Format` if any non-whitespace character is outside
    /// the amino acid alphabet.
    pub fn parse(text: &str) -> Result<Self> {
        Self::try_parse(text).ok_or_else(|| {
            FastaError::format("The supplied characters are not a valid amino acid sequence.")
        })
    }

    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        SequenceKind::AminoAcid
            .clean(text)
            .map(|characters| Self { characters })
    }

    #[must_use]
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_lines(&self, line_length: usize) -> Result<Vec<String>> {
        split_into_lines(&self.characters, line_length)
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_multiline_string(&self, line_length: usize) -> Result<String> {
        join_lines(&self.characters, line_length)
    }
}

impl FromStr for AminoAcidSequence {
    type Err = FastaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AminoAcidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.characters)
    }
}

/// The sequence body of a record: either nucleic or amino acid characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "characters", rename_all = "snake_case")]
pub enum SequenceData {
    NucleicAcid(NucleicAcidSequence),
    AminoAcid(AminoAcidSequence),
}

impl SequenceData {
    #[must_use]
    pub fn kind(&self) -> SequenceKind {
        match self {
            Self::NucleicAcid(_) => SequenceKind::NucleicAcid,
            Self::AminoAcid(_) => SequenceKind::AminoAcid,
        }
    }

    #[must_use]
    pub fn is_nucleic_acid(&self) -> bool {
        self.kind() == SequenceKind::NucleicAcid
    }

    #[must_use]
    pub fn is_amino_acid(&self) -> bool {
        self.kind() == SequenceKind::AminoAcid
    }

    #[must_use]
    pub fn characters(&self) -> &str {
        match self {
            Self::NucleicAcid(seq) => seq.characters(),
            Self::AminoAcid(seq) => seq.characters(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters().is_empty()
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_lines(&self, line_length: usize) -> Result<Vec<String>> {
        split_into_lines(self.characters(), line_length)
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` if `line_length` is zero.
    pub fn to_multiline_string(&self, line_length: usize) -> Result<String> {
        join_lines(self.characters(), line_length)
    }

    /// Lowercase hex MD5 of the (uppercase) sequence characters
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(self.characters().as_bytes()))
    }
}

impl From<NucleicAcidSequence> for SequenceData {
    fn from(seq: NucleicAcidSequence) -> Self {
        Self::NucleicAcid(seq)
    }
}

impl From<AminoAcidSequence> for SequenceData {
    fn from(seq: AminoAcidSequence) -> Self {
        Self::AminoAcid(seq)
    }
}

impl fmt::Display for SequenceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.characters())
    }
}

/// Classify raw sequence text as nucleic or amino acid.
///
/// Nucleic acid is tried first and wins whenever it succeeds, even if the text
/// is also a valid amino acid sequence.
///
/// # Errors
///
/// Returns `FastaError::Format` if the text is empty or all whitespace, or if it
/// is valid under neither alphabet.
pub fn classify(text: &str) -> Result<SequenceData> {
    if text.trim().is_empty() {
        return Err(FastaError::format(
            "The sequence data to parse cannot be empty or all whitespace.",
        ));
    }

    if let Some(seq) = NucleicAcidSequence::try_parse(text) {
        return Ok(seq.into());
    }

    AminoAcidSequence::try_parse(text)
        .map(SequenceData::from)
        .ok_or_else(|| {
            FastaError::format("The provided string is not a valid amino or nucleic acid sequence.")
        })
}
