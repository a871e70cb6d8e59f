use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while parsing, validating, or writing FASTA data.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally invalid input. Higher-level parsers wrap the failure of a
    /// lower-level one here so the `source()` chain records where it happened.
    #[error("{message}")]
    Format {
        message: String,
        #[source]
        source: Option<Box<FastaError>>,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("The length of each line cannot be less than one (got {0})")]
    LineLength(usize),

    #[error("\"{0}\" is not a recognized identifier code")]
    UnsupportedCode(String),

    #[error("Invalid integer value '{value}': {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FastaError {
    /// A format error with no underlying cause
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            source: None,
        }
    }

    /// A format error wrapping the failure that caused it
    pub fn wrap(message: impl Into<String>, cause: FastaError) -> Self {
        Self::Format {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }

    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// The innermost error in the wrapping chain
    #[must_use]
    pub fn root_cause(&self) -> &FastaError {
        match self {
            Self::Format {
                source: Some(inner),
                ..
            } => inner.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, FastaError>;
