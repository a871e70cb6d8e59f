//! Record parsing for single and multi-record FASTA text.
//!
//! Blank lines are ignored everywhere. In multi-record text a line starting
//! with `>` closes the current group (if it has any lines) and opens the next
//! one, so a blank line between records is optional.

use crate::core::header::{Header, HEADER_START};
use crate::core::record::{Record, RecordSet};
use crate::core::sequence::classify;
use crate::error::{FastaError, Result};

const RECORD_FORMAT_MESSAGE: &str = "The collection of sequence lines are not in the correct format.";

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl Record {
    /// Parse a single record from text, splitting it into lines first.
    ///
    /// # Errors
    ///
    /// See [`Record::parse_lines`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_lines(text.lines())
    }

    /// Parse a single record: the first non-blank line is the header and all
    /// following non-blank lines are the sequence.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::Format` if there is no header, no sequence lines, or
    /// either part fails to parse. The underlying failure is the error source.
    pub fn parse_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_non_blank(lines).map_err(|e| FastaError::wrap(RECORD_FORMAT_MESSAGE, e))
    }

    /// Lazily parse multi-record text, one `Result` per record in input order.
    ///
    /// A failing record is reported when the iterator reaches it; records
    /// before it are still yielded. Iteration does not stop at an `Err`: the
    /// caller may keep calling `next` to parse the groups after it, or stop
    /// there (as [`RecordSet::parse_lines`] does).
    pub fn parse_multiple<I, S>(lines: I) -> Records<I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Records {
            lines: lines.into_iter(),
            pending: None,
            number: 0,
        }
    }
}

fn parse_non_blank<I, S>(lines: I) -> Result<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter().filter(|line| !is_blank(line.as_ref()));

    let header_line = lines
        .next()
        .ok_or_else(|| FastaError::format("No header line was found."))?;
    let header = Header::parse(header_line.as_ref())?;

    let body: Vec<S> = lines.collect();
    if body.is_empty() {
        return Err(FastaError::format(
            "No sequence data lines were found after the header.",
        ));
    }

    let joined = body
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    let data = classify(&joined)?;

    Ok(Record::new(header, data))
}

/// Lazy multi-record parser returned by [`Record::parse_multiple`]
pub struct Records<I> {
    lines: I,
    /// Header line that closed the previous group
    pending: Option<String>,
    number: usize,
}

impl<I, S> Iterator for Records<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group: Vec<String> = self.pending.take().into_iter().collect();

        for line in self.lines.by_ref() {
            let line = line.as_ref();
            if is_blank(line) {
                continue;
            }
            if line.starts_with(HEADER_START) && !group.is_empty() {
                self.pending = Some(line.to_string());
                break;
            }
            group.push(line.to_string());
        }

        if group.is_empty() {
            return None;
        }

        self.number += 1;
        let number = self.number;
        Some(Record::parse_lines(&group).map_err(|e| {
            FastaError::wrap(format!("Sequence {number} is in an incorrect format."), e)
        }))
    }
}

impl RecordSet {
    /// Parse multi-record text eagerly.
    ///
    /// # Errors
    ///
    /// See [`RecordSet::parse_lines`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_lines(text.lines())
    }

    /// Parse every record, stopping at the first one that fails.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::Format` wrapping the numbered per-record failure.
    pub fn parse_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Record::parse_multiple(lines)
            .collect::<Result<Vec<_>>>()
            .map(RecordSet::new)
            .map_err(|e| FastaError::wrap(RECORD_FORMAT_MESSAGE, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::{Description, HeaderItem};
    use crate::core::identifier::Identifier;
    use crate::core::sequence::SequenceKind;
    use std::error::Error as _;

    #[test]
    fn test_parse_pdb_record() {
        let record = Record::parse(">pdb|1I4L|D\nMDSKG").unwrap();
        assert_eq!(
            record.header().items(),
            &[HeaderItem::Identifier(Identifier::pdb("1I4L", "D").unwrap())]
        );
        assert_eq!(record.data().kind(), SequenceKind::AminoAcid);
        assert_eq!(record.data().characters(), "MDSKG");
        assert_eq!(record.to_sequential_lines(), vec![">pdb|1I4L|D", "MDSKG"]);
    }

    #[test]
    fn test_parse_joins_body_lines_and_skips_blanks() {
        let lines = ["", "  ", ">lcl|123", "atcg", "", "aaaa", "   "];
        let record = Record::parse_lines(lines).unwrap();
        assert_eq!(record.data().characters(), "ATCGAAAA");
        assert!(record.data().is_nucleic_acid());
    }

    #[test]
    fn test_parse_accepts_crlf_text() {
        let record = Record::parse(">lcl|1\r\nACGT\r\nTT\r\n").unwrap();
        assert_eq!(record.data().characters(), "ACGTTT");
    }

    #[test]
    fn test_parse_without_header() {
        let err = Record::parse_lines(Vec::<String>::new()).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.to_string(), RECORD_FORMAT_MESSAGE);
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("No header line was found.".to_string())
        );
        assert!(Record::parse("\n \n").is_err());
    }

    #[test]
    fn test_parse_without_sequence() {
        let err = Record::parse(">lcl|123\n\n").unwrap_err();
        assert!(err.is_format());
        assert!(err.root_cause().to_string().contains("No sequence data"));
    }

    #[test]
    fn test_parse_invalid_header_is_wrapped() {
        let err = Record::parse("lcl|123\nACGT").unwrap_err();
        assert_eq!(err.to_string(), RECORD_FORMAT_MESSAGE);
        assert!(err.root_cause().to_string().contains("start character"));
    }

    #[test]
    fn test_parse_invalid_sequence_is_wrapped() {
        let err = Record::parse(">lcl|123\nACGT1").unwrap_err();
        assert_eq!(err.to_string(), RECORD_FORMAT_MESSAGE);
        assert!(err
            .root_cause()
            .to_string()
            .contains("not a valid amino or nucleic acid sequence"));
    }

    #[test]
    fn test_parse_multiple_splits_on_headers() {
        let text = ">lcl|123\nATCG\nAAAA\n\n>lcl|456\nTTTT\nCCCC";
        let records: Vec<Record> = Record::parse_multiple(text.lines())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].header().identifiers().next(),
            Some(&Identifier::local("123").unwrap())
        );
        assert_eq!(records[0].data().characters(), "ATCGAAAA");
        assert_eq!(
            records[1].header().identifiers().next(),
            Some(&Identifier::local("456").unwrap())
        );
        assert_eq!(records[1].data().characters(), "TTTTCCCC");
    }

    #[test]
    fn test_parse_multiple_without_blank_separator() {
        let text = ">a\nACGT\n>b\nMDSKG\n>c\nTT";
        let set = RecordSet::parse(text).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.contains_only_nucleic_acid());
        assert!(!set.contains_only_amino_acid());
    }

    #[test]
    fn test_parse_multiple_is_lazy_and_numbered() {
        let text = ">lcl|1\nACGT\n>lcl|2\nAC1T\n>lcl|3\nGGGG";
        let mut records = Record::parse_multiple(text.lines());

        let first = records.next().unwrap().unwrap();
        assert_eq!(first.data().characters(), "ACGT");

        let err = records.next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Sequence 2 is in an incorrect format.");

        // The caller may keep going past a failed record
        let third = records.next().unwrap().unwrap();
        assert_eq!(third.data().characters(), "GGGG");
        assert!(records.next().is_none());
    }

    #[test]
    fn test_consecutive_headers_form_separate_groups() {
        let text = ">lcl|1\n>lcl|2\nACGT";
        let results: Vec<_> = Record::parse_multiple(text.lines()).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_first_group_starts_without_header() {
        // Leading sequence text stays with the first group and fails as a header
        let text = "ACGT\n>lcl|1\nACGT";
        let results: Vec<_> = Record::parse_multiple(text.lines()).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_record_set_parse_wraps_first_failure() {
        let err = RecordSet::parse(">lcl|1\nACGT\n>lcl|2\n123").unwrap_err();
        assert_eq!(err.to_string(), RECORD_FORMAT_MESSAGE);
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("Sequence 2 is in an incorrect format.".to_string())
        );
    }

    #[test]
    fn test_record_set_parse_empty_text() {
        let set = RecordSet::parse("\n\n").unwrap();
        assert!(set.is_empty());
        assert!(set.contains_only_nucleic_acid());
    }

    #[test]
    fn test_header_fields_cannot_span_lines() {
        assert!(Identifier::gen_bank("M73307", "AGMA\nACGT").is_err());
        assert!(Description::new("a\n>b").is_err());

        let record = Record::new(
            Header::new(vec![
                Identifier::gen_bank("M73307", "AGMA13GT").unwrap().into(),
                Description::new("some gene").unwrap().into(),
            ])
            .unwrap(),
            classify("ACGT").unwrap(),
        );
        let lines = record.to_sequential_lines();
        assert!(lines.iter().all(|line| !line.contains('\n')));
        assert_eq!(Record::parse_lines(&lines).unwrap(), record);
    }

    #[test]
    fn test_round_trip_interleaved() {
        let text = ">sp|P01013|OVAX_CHICK|GENE X PROTEIN\nQIKDLLVSSSTDLDTTLVLVNAIYFKGMWKTAFNAEDTREMPFHVTKQESKPVQMMCMNNSFNVATLPAEKMKILELPFASGDLSMLVLLPDEVSDLERIEKTINFEKLTEWTNPNTMEKRRVKVYLPQMKIEEKYNLTSVLMALGMTDLFIPSANLTGISSAESLKISQAVHGAFMELSEDGIEMAGSTGVIEDIKHSPESEQFRADHPFLFLIKHNPTNTIVYFGRYWSP";
        let record = Record::parse(text).unwrap();
        let lines = record.to_interleaved_lines(60).unwrap();
        assert_eq!(lines[0], ">sp|P01013|OVAX_CHICK|GENE X PROTEIN");
        assert!(lines[1..].iter().all(|line| line.len() <= 60));
        assert_eq!(Record::parse_lines(&lines).unwrap(), record);
    }
}
