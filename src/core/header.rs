use std::fmt;

use serde::Serialize;

use crate::core::identifier::{Identifier, LINE_BREAKS, PART_SEPARATOR};
use crate::error::{FastaError, Result};

/// Character that starts every header line
pub const HEADER_START: char = '>';

/// Free text in a header line. May be empty, but never contains `|` or a line
/// break and never has surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if the text contains `|` or a line
    /// break, or starts or ends with whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains(PART_SEPARATOR) {
            return Err(FastaError::InvalidArgument(
                "The pipe (\"|\") character is not permitted in the description.".to_string(),
            ));
        }
        if text.contains(LINE_BREAKS) {
            return Err(FastaError::InvalidArgument(
                "Line breaks are not permitted in the description.".to_string(),
            ));
        }
        if text.trim() != text {
            return Err(FastaError::InvalidArgument(
                "The description cannot start or end with whitespace.".to_string(),
            ));
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `|`-separated item of a header line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderItem {
    Identifier(Identifier),
    Description(Description),
}

impl From<Identifier> for HeaderItem {
    fn from(identifier: Identifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<Description> for HeaderItem {
    fn from(description: Description) -> Self {
        Self::Description(description)
    }
}

impl fmt::Display for HeaderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => identifier.fmt(f),
            Self::Description(description) => description.fmt(f),
        }
    }
}

/// A parsed header line: an ordered, non-empty list of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Header {
    items: Vec<HeaderItem>,
}

impl Header {
    /// # Errors
    ///
    /// Returns `FastaError::InvalidArgument` if `items` is empty.
    pub fn new(items: Vec<HeaderItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(FastaError::InvalidArgument(
                "A header must contain at least one item.".to_string(),
            ));
        }
        Ok(Self { items })
    }

    pub fn from_item(item: impl Into<HeaderItem>) -> Self {
        Self {
            items: vec![item.into()],
        }
    }

    #[must_use]
    pub fn items(&self) -> &[HeaderItem] {
        &self.items
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.items.iter().filter_map(|item| match item {
            HeaderItem::Identifier(identifier) => Some(identifier),
            HeaderItem::Description(_) => None,
        })
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &Description> {
        self.items.iter().filter_map(|item| match item {
            HeaderItem::Description(description) => Some(description),
            HeaderItem::Identifier(_) => None,
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HEADER_START}")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, "{PART_SEPARATOR}")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
