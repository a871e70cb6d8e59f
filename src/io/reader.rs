use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, warn};

use crate::core::record::{Record, RecordSet};
use crate::error::Result;
use crate::io::{is_fasta_file, is_gzipped};

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?)
}

fn check_extension(path: &Path) {
    if !is_fasta_file(path) {
        warn!(
            "{} does not have a conventional FASTA extension",
            path.display()
        );
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    check_extension(path);

    let file = File::open(path)?;
    let lines = if is_gzipped(path) {
        collect_lines(BufReader::new(GzDecoder::new(file)))?
    } else {
        collect_lines(BufReader::new(file))?
    };

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

async fn read_lines_async(path: &Path) -> Result<Vec<String>> {
    check_extension(path);

    let bytes = tokio::fs::read(path).await?;
    let lines = if is_gzipped(path) {
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice()).read_to_string(&mut text)?;
        text.lines().map(str::to_string).collect()
    } else {
        collect_lines(bytes.as_slice())?
    };

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read a single-record FASTA file.
///
/// # Errors
///
/// Returns `FastaError::Io` if the file cannot be read, or `FastaError::Format`
/// if its contents are not one valid record.
pub fn read_record(path: &Path) -> Result<Record> {
    Record::parse_lines(read_lines(path)?)
}

/// Read a multi-record FASTA file.
///
/// # Errors
///
/// Returns `FastaError::Io` if the file cannot be read, or `FastaError::Format`
/// identifying the first record that fails to parse.
pub fn read_records(path: &Path) -> Result<RecordSet> {
    let records = RecordSet::parse_lines(read_lines(path)?)?;
    debug!("Parsed {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a single record from any buffered reader.
///
/// # Errors
///
/// Returns `FastaError::Io` on read failure or `FastaError::Format` on bad content.
pub fn read_record_from<R: BufRead>(reader: R) -> Result<Record> {
    Record::parse_lines(collect_lines(reader)?)
}

/// Read all records from any buffered reader.
///
/// # Errors
///
/// Returns `FastaError::Io` on read failure or `FastaError::Format` on bad content.
pub fn read_records_from<R: BufRead>(reader: R) -> Result<RecordSet> {
    RecordSet::parse_lines(collect_lines(reader)?)
}

/// Async variant of [`read_record`].
///
/// # Errors
///
/// Same as [`read_record`].
pub async fn read_record_async(path: &Path) -> Result<Record> {
    let lines = read_lines_async(path).await?;
    Record::parse_lines(lines)
}

/// Async variant of [`read_records`].
///
/// # Errors
///
/// Same as [`read_records`].
pub async fn read_records_async(path: &Path) -> Result<RecordSet> {
    let lines = read_lines_async(path).await?;
    RecordSet::parse_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_record_from_reader() {
        let record = read_record_from(Cursor::new(">gb|M73307|AGMA13GT\nACGT\nNN\n")).unwrap();
        assert_eq!(record.header().to_string(), ">gb|M73307|AGMA13GT");
        assert_eq!(record.data().characters(), "ACGTNN");
    }

    #[test]
    fn test_read_records_from_reader() {
        let text = ">lcl|1 first\nMDSKG\n\n>lcl|2\nQIKDL*\n";
        let records = read_records_from(Cursor::new(text)).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.contains_only_amino_acid());
    }

    #[test]
    fn test_read_record_from_empty_reader() {
        let err = read_record_from(Cursor::new("")).unwrap_err();
        assert!(err.is_format());
    }
}
