//! Header line parsing.
//!
//! The text after `>` is split on `|` and walked left to right. A part equal
//! to a recognised identifier code starts an identifier and consumes as many
//! parts as that code needs; any other part becomes a [`Description`]. The
//! check applies at every position, so free text that happens to equal a code
//! (for example a lone `gb`) is read as the start of an identifier.

use std::str::FromStr;

use crate::core::header::{Description, Header, HeaderItem, HEADER_START};
use crate::error::{FastaError, Result};
use crate::parsing::identifier::{lookup, split_parts};

impl Header {
    /// Parse a header line such as `>gi|42|gb|M73307|AGMA13GT|some text`.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::Format` if the line is blank, does not start with
    /// `>`, or contains an identifier that cannot be built from its parts.
    pub fn parse(line: &str) -> Result<Self> {
        if line.trim().is_empty() {
            return Err(FastaError::format(
                "The header line to parse cannot be empty or all whitespace.",
            ));
        }

        if !line.starts_with(HEADER_START) {
            return Err(FastaError::format(
                "The header line to parse does not start with the required start character.",
            ));
        }

        let parts = split_parts(line.trim_start_matches(HEADER_START).trim());
        Header::new(parse_items(&parts)?)
    }
}

fn parse_items(parts: &[&str]) -> Result<Vec<HeaderItem>> {
    let mut items = Vec::new();
    let mut index = 0;

    while index < parts.len() {
        let part = parts[index];
        match lookup(part) {
            Some(spec) => {
                let end = (index + spec.arity).min(parts.len());
                let identifier = spec.build(&parts[index..end]).map_err(|e| {
                    FastaError::wrap(
                        format!(
                            "The \"{}\" identifier at header part {} is in an incorrect format.",
                            spec.code,
                            index + 1
                        ),
                        e,
                    )
                })?;
                items.push(identifier.into());
                index = end;
            }
            None => {
                items.push(Description::new(part)?.into());
                index += 1;
            }
        }
    }

    Ok(items)
}

impl FromStr for Header {
    type Err = FastaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
