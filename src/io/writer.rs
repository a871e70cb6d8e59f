use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::core::record::Record;
use crate::core::sequence::DEFAULT_LINE_LENGTH;
use crate::error::{FastaError, Result};
use crate::io::is_gzipped;

/// How sequence lines are laid out on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Sequence wrapped at a fixed column width
    #[default]
    Interleaved,
    /// Whole sequence on a single line
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub layout: Layout,
    /// Only used by [`Layout::Interleaved`]
    pub line_length: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Interleaved,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

impl WriteOptions {
    #[must_use]
    pub fn interleaved(line_length: usize) -> Self {
        Self {
            layout: Layout::Interleaved,
            line_length,
        }
    }

    #[must_use]
    pub fn sequential() -> Self {
        Self {
            layout: Layout::Sequential,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns `FastaError::LineLength` for an interleaved layout with a zero
    /// line length.
    pub fn validate(&self) -> Result<()> {
        if self.layout == Layout::Interleaved && self.line_length < 1 {
            return Err(FastaError::LineLength(self.line_length));
        }
        Ok(())
    }

    fn render(&self, record: &Record) -> Result<Vec<String>> {
        match self.layout {
            Layout::Interleaved => record.to_interleaved_lines(self.line_length),
            Layout::Sequential => Ok(record.to_sequential_lines()),
        }
    }
}

/// Write records to `writer`, each line terminated by `\n`.
///
/// The options are validated before anything is written.
///
/// # Errors
///
/// Returns `FastaError::LineLength` for invalid options or `FastaError::Io` if
/// writing fails.
pub fn write_records<'a, W, I>(mut writer: W, records: I, options: &WriteOptions) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    options.validate()?;

    let mut count = 0usize;
    for record in records {
        for line in options.render(record)? {
            writeln!(writer, "{line}")?;
        }
        count += 1;
    }
    writer.flush()?;

    debug!("Wrote {count} records");
    Ok(())
}

/// Write records to a file, gzip compressing when the path ends in `.gz`/`.bgz`.
///
/// # Errors
///
/// Returns `FastaError::LineLength` for invalid options or `FastaError::Io` if
/// the file cannot be created or written.
pub fn write_records_to_path<'a, I>(path: &Path, records: I, options: &WriteOptions) -> Result<()>
where
    I: IntoIterator<Item = &'a Record>,
{
    options.validate()?;

    let file = File::create(path)?;
    if is_gzipped(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        write_records(&mut encoder, records, options)?;
        encoder.finish()?.flush()?;
    } else {
        write_records(BufWriter::new(file), records, options)?;
    }

    debug!("Finished writing {}", path.display());
    Ok(())
}

/// Async variant of [`write_records_to_path`]. Rendering happens up front; only
/// the file write is awaited.
///
/// # Errors
///
/// Same as [`write_records_to_path`].
pub async fn write_records_to_path_async(
    path: &Path,
    records: &[Record],
    options: &WriteOptions,
) -> Result<()> {
    let mut buffer = Vec::new();
    if is_gzipped(path) {
        let mut encoder = GzEncoder::new(&mut buffer, Compression::default());
        write_records(&mut encoder, records, options)?;
        encoder.finish()?;
    } else {
        write_records(&mut buffer, records, options)?;
    }

    tokio::fs::write(path, buffer).await?;
    debug!("Finished writing {}", path.display());
    Ok(())
}
