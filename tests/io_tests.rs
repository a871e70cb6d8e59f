//! File round trips through the reader and writer, plain and gzipped.

use std::io::Read;

use fasta_kit::io::{
    read_record, read_record_async, read_records, read_records_async, write_records_to_path,
    write_records_to_path_async, WriteOptions,
};
use fasta_kit::{FastaError, Identifier, RecordSet, SequenceKind};
use flate2::read::GzDecoder;
use tempfile::TempDir;

const SAMPLE: &str = "tests/data/mixed.fasta";

#[test]
fn test_read_sample_file() {
    let records = read_records(SAMPLE.as_ref()).expect("sample should parse");
    assert_eq!(records.len(), 3);

    let kinds: Vec<SequenceKind> = records.iter().map(|r| r.data().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SequenceKind::NucleicAcid,
            SequenceKind::AminoAcid,
            SequenceKind::AminoAcid
        ]
    );

    let last: Vec<&Identifier> = records.records()[2].header().identifiers().collect();
    assert_eq!(last.len(), 2);
    assert_eq!(last[0], &Identifier::pdb("1I4L", "D").unwrap());
    assert_eq!(last[1], &Identifier::local("local-7").unwrap());
    assert_eq!(records.records()[2].data().characters(), "MDSKGS");
}

#[test]
fn test_plain_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.fa");

    let records = read_records(SAMPLE.as_ref()).unwrap();
    write_records_to_path(&path, &records, &WriteOptions::interleaved(10)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(">gb|M73307|AGMA13GT\nACGTACGTAC\n"));
    assert!(written.ends_with(">pdb|1I4L|D|lcl|local-7\nMDSKGS\n"));

    let reread = read_records(&path).unwrap();
    assert_eq!(reread, records);
}

#[test]
fn test_gzip_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.fasta.gz");

    let records = read_records(SAMPLE.as_ref()).unwrap();
    write_records_to_path(&path, &records, &WriteOptions::sequential()).unwrap();

    let mut text = String::new();
    GzDecoder::new(std::fs::File::open(&path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    assert_eq!(text.lines().count(), 6);

    assert_eq!(read_records(&path).unwrap(), records);
}

#[test]
fn test_read_single_record_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.faa");
    std::fs::write(&path, "\n>lcl|seq1 some protein\nMDSKG\nQIKDL\n").unwrap();

    let record = read_record(&path).unwrap();
    assert_eq!(record.data().characters(), "MDSKGQIKDL");
    assert_eq!(record.data().kind(), SequenceKind::AminoAcid);
}

#[test]
fn test_read_missing_file() {
    let err = read_records("does/not/exist.fa".as_ref()).unwrap_err();
    assert!(matches!(err, FastaError::Io(_)));
}

#[test]
fn test_read_reports_failing_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.fa");
    std::fs::write(&path, ">lcl|1\nACGT\n>lcl|2\nAC#GT\n").unwrap();

    let err = read_records(&path).unwrap_err();
    assert!(err.is_format());
    let chain: Vec<String> = {
        let mut messages = Vec::new();
        let mut current: Option<&dyn std::error::Error> = Some(&err);
        while let Some(e) = current {
            messages.push(e.to_string());
            current = e.source();
        }
        messages
    };
    assert!(chain.contains(&"Sequence 2 is in an incorrect format.".to_string()));
}

#[test]
fn test_write_rejects_zero_line_length() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.fa");
    let records = read_records(SAMPLE.as_ref()).unwrap();

    let err = write_records_to_path(&path, &records, &WriteOptions::interleaved(0)).unwrap_err();
    assert!(matches!(err, FastaError::LineLength(0)));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_async_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("async.fna.gz");

    let records = read_records_async(SAMPLE.as_ref()).await.unwrap();
    write_records_to_path_async(&path, records.records(), &WriteOptions::default())
        .await
        .unwrap();

    let reread: RecordSet = read_records_async(&path).await.unwrap();
    assert_eq!(reread, records);
}

#[tokio::test]
async fn test_async_single_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("single.fa");
    tokio::fs::write(&path, ">emb|CAM43271.1|\nACGU\n").await.unwrap();

    let err = read_record_async(&path).await.unwrap_err();
    assert!(err.is_format());

    tokio::fs::write(&path, ">emb|CAM43271.1|X\nACGU\n").await.unwrap();
    let record = read_record_async(&path).await.unwrap();
    assert_eq!(record.data().characters(), "ACGU");
}
